use std::collections::BTreeSet;

use owo_colors::OwoColorize;
use tracing::{debug, trace};

use super::{Automaton, State, StateIndex};
use crate::{alphabet::Symbol, math, statistics::Statistics, word::FiniteWord, Show};

/// Synthesizes the deterministic [`Automaton`] that recognizes the k-testable language described
/// by some [`Statistics`].
///
/// The states are all non-empty prefixes of the prefixes and short strings, which make up a trie
/// rooted in the initial state, together with the first and last `k - 1` symbols of every valid
/// substring. The transitions are then computed in two passes:
/// 1. the **trie pass** connects each prefix `x[..i]` of a prefix or short string `x` to `x[..=i]`
///    on the symbol `x[i]`,
/// 2. the **sliding-window pass** connects `x[..k-1]` to `x[1..]` on the symbol `x[k-1]` for every
///    valid substring `x`. This moves from the state representing the last `k - 1` symbols to the
///    one representing the new last `k - 1` symbols, provided the resulting k-gram has been seen.
///
/// Every transition that is not set by either pass leads into the failure state. The sliding-window
/// pass takes precedence, should both passes assign the same state and symbol. For `k >= 2` this
/// never happens, as sources in the trie pass have length at most `k - 2`, while sliding-window
/// sources have length exactly `k - 1`. Within the sliding-window pass the source and symbol
/// determine the valid substring, so its transitions never compete either.
///
/// The accepting states are those labelled with a suffix or a short string.
#[derive(Clone, Debug)]
pub struct AutomatonBuilder<'a, S: Symbol = char> {
    stats: &'a Statistics<S>,
}

/// The transition table while it is being filled.
struct Table<S: Symbol> {
    states: Vec<State<S>>,
    labels: math::Map<Vec<S>, StateIndex>,
    transitions: Vec<StateIndex>,
    width: usize,
    failure: StateIndex,
}

impl<S: Symbol> Table<S> {
    fn new(states: Vec<State<S>>, width: usize) -> Self {
        let labels: math::Map<_, _> = states
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.label().map(|label| (label.to_vec(), StateIndex::new(i))))
            .collect();
        let failure = StateIndex::new(states.len() - 1);
        Self {
            transitions: vec![failure; states.len() * width],
            states,
            labels,
            width,
            failure,
        }
    }

    fn index_of(&self, label: &[S]) -> Option<StateIndex> {
        self.labels.get(label).copied()
    }

    /// Sets the transition from the state labelled `source` on the symbol in column `column`
    /// to the state labelled `target`, returning the target it previously had.
    fn set(&mut self, source: &[S], column: usize, target: &[S]) -> Option<StateIndex> {
        let (Some(p), Some(q)) = (self.index_of(source), self.index_of(target)) else {
            debug!(
                "skipping transition {} -> {} between unknown states",
                source.as_string(),
                target.as_string()
            );
            return None;
        };
        let cell = p.index() * self.width + column;
        Some(std::mem::replace(&mut self.transitions[cell], q))
    }
}

impl<'a, S: Symbol> AutomatonBuilder<'a, S> {
    /// Creates a builder for the given statistics, the window size is taken from them.
    pub fn new(stats: &'a Statistics<S>) -> Self {
        Self { stats }
    }

    /// Collects the states in their canonical order, i.e. the initial state first, then the
    /// remaining active states length-lexicographically and finally the failure state.
    fn states(&self) -> Vec<State<S>> {
        let k = self.stats.k();
        let mut states = BTreeSet::from([State::initial(), State::Failure]);

        for x in self.stats.prefixes_and_short_strings() {
            for i in 1..=x.len() {
                states.insert(State::Active(x[..i].to_vec()));
            }
        }
        for x in self.stats.valid_substrings() {
            states.insert(State::Active(x[..k - 1].to_vec()));
            states.insert(State::Active(x[1..].to_vec()));
        }

        trace!(
            "collected states {}",
            states.iter().map(|q| q.show()).collect::<Vec<_>>().join(", ")
        );
        states.into_iter().collect()
    }

    /// Compiles the statistics into an [`Automaton`].
    ///
    /// # Example
    /// ```
    /// use ktestable::prelude::*;
    /// let stats = Statistics::extract(2, ["ab", "abab"]).unwrap();
    /// let automaton = AutomatonBuilder::new(&stats).compile();
    /// assert!(automaton.detect("ababab"));
    /// assert!(!automaton.detect("aab"));
    /// ```
    pub fn compile(self) -> Automaton<S> {
        let k = self.stats.k();
        let alphabet = self.stats.alphabet().clone();
        let mut table = Table::new(self.states(), alphabet.size());

        // trie pass
        for x in self.stats.prefixes_and_short_strings() {
            for (i, &symbol) in x.iter().enumerate() {
                let Some(column) = alphabet.index_of(symbol) else {
                    continue;
                };
                table.set(&x[..i], column, &x[..=i]);
            }
        }

        // sliding-window pass, overrides the trie pass
        for x in self.stats.valid_substrings() {
            let (source, target, symbol) = (&x[..k - 1], &x[1..], x[k - 1]);
            let Some(column) = alphabet.index_of(symbol) else {
                continue;
            };
            let previous = table.set(source, column, target);
            trace!(
                "{} --{}--> {}",
                source.as_string(),
                symbol.show().blue(),
                target.as_string()
            );
            if let Some(previous) = previous {
                if previous != table.failure && Some(previous) != table.index_of(target) {
                    debug!(
                        "{} transition from {} on {} now leads to {} instead of {}",
                        "overriding".yellow(),
                        source.as_string(),
                        symbol.show(),
                        target.as_string(),
                        table.states[previous.index()].show()
                    );
                }
            }
        }

        let mut accepting = math::StateSet::with_capacity(table.states.len());
        for label in self.stats.suffixes_and_short_strings() {
            match table.index_of(label) {
                Some(q) => {
                    accepting.insert(q.index());
                }
                None => debug!("no state for accepting label {}", label.as_string()),
            }
        }

        let Table {
            states,
            transitions,
            failure,
            ..
        } = table;
        debug!(
            "compiled automaton for k = {k} with {} states ({} accepting) over {} symbols",
            states.len(),
            accepting.len(),
            alphabet.size()
        );
        Automaton::from_parts(alphabet, states, transitions, accepting, failure)
    }
}
