use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::{
    alphabet::{Alphabet, Symbol},
    math,
    word::FiniteWord,
    Show,
};

mod state;
pub use state::{State, StateIndex};

mod builder;
pub use builder::AutomatonBuilder;

/// A deterministic and complete finite automaton that recognizes a k-testable language. It is
/// obtained by compiling [`crate::Statistics`] with an [`AutomatonBuilder`].
///
/// The transition function is stored as a dense table with one row per state and one column per
/// symbol of the alphabet, so every state has precisely one successor for every symbol. Symbols
/// that are not part of the alphabet lead into the failure state, from which there is no escape.
///
/// An automaton is immutable once it has been compiled. Running a word only uses a local cursor,
/// which means that a single automaton may be queried from multiple threads at the same time.
///
/// # Example
/// ```
/// use ktestable::prelude::*;
/// let stats = Statistics::extract(3, ["a", "aa", "abba"]).unwrap();
/// let automaton = AutomatonBuilder::new(&stats).compile();
/// assert_eq!(automaton.scan("abb"), &State::Active(vec!['b', 'b']));
/// assert_eq!(automaton.scan("abc"), &State::Failure);
/// assert!(automaton.detect("abba"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton<S: Symbol = char> {
    alphabet: Alphabet<S>,
    states: Vec<State<S>>,
    transitions: Vec<StateIndex>,
    accepting: math::StateSet,
    failure: StateIndex,
}

impl<S: Symbol> Automaton<S> {
    /// Assembles an automaton. The states must be sorted, with the initial state first and the
    /// failure state at index `failure`, which is the last one. The transitions are given row
    /// by row, one row per state with one entry per symbol of the alphabet.
    pub(crate) fn from_parts(
        alphabet: Alphabet<S>,
        states: Vec<State<S>>,
        transitions: Vec<StateIndex>,
        accepting: math::StateSet,
        failure: StateIndex,
    ) -> Self {
        debug_assert!(states.first().is_some_and(State::is_initial));
        debug_assert_eq!(failure.index() + 1, states.len());
        debug_assert_eq!(transitions.len(), states.len() * alphabet.size());
        Self {
            alphabet,
            states,
            transitions,
            accepting,
            failure,
        }
    }

    /// Returns a reference to the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the number of states, including the failure state.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The index of the initial state, which is labelled with the empty word.
    pub fn initial(&self) -> StateIndex {
        StateIndex::new(0)
    }

    /// The index of the absorbing failure state.
    pub fn failure(&self) -> StateIndex {
        self.failure
    }

    /// Returns the state with the given index. Panics if the index does not belong to `self`.
    pub fn state(&self, index: StateIndex) -> &State<S> {
        &self.states[index.index()]
    }

    /// Looks up the index of the active state with the given label.
    pub fn index_of(&self, label: &[S]) -> Option<StateIndex> {
        self.states
            .binary_search_by(|q| q.cmp_label(label))
            .ok()
            .map(StateIndex::new)
    }

    /// Iterates over all states together with their indices, in ascending order of the indices.
    pub fn states(&self) -> impl Iterator<Item = (StateIndex, &State<S>)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, q)| (StateIndex::new(i), q))
    }

    /// Iterates over the indices of all accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.accepting.iter().map(StateIndex::new)
    }

    /// Gives the state that is reached from `source` by reading `symbol`. Reading a symbol
    /// that is not in the alphabet leads into the failure state.
    pub fn successor(&self, source: StateIndex, symbol: S) -> StateIndex {
        self.alphabet
            .index_of(symbol)
            .and_then(|column| {
                self.transitions
                    .get(source.index() * self.alphabet.size() + column)
                    .copied()
            })
            .unwrap_or(self.failure)
    }

    /// Runs the given word from the initial state and returns the index of the state that is
    /// reached. As the failure state is absorbing, reading stops as soon as it is entered.
    pub fn reached_state_index<W: FiniteWord<Symbol = S>>(&self, word: W) -> StateIndex {
        match word.symbols().try_fold(self.initial(), |q, symbol| {
            match self.successor(q, symbol) {
                p if p == self.failure => Err(p),
                p => Ok(p),
            }
        }) {
            Ok(q) | Err(q) => q,
        }
    }

    /// Runs the given word from the initial state and returns the state that is reached.
    pub fn scan<W: FiniteWord<Symbol = S>>(&self, word: W) -> &State<S> {
        self.state(self.reached_state_index(word))
    }

    /// Returns the sequence of states that are visited when reading the given word, starting with
    /// the initial state. The result therefore has one more element than `word` has symbols.
    pub fn run<W: FiniteWord<Symbol = S>>(&self, word: W) -> Vec<StateIndex> {
        std::iter::once(self.initial())
            .chain(word.symbols().scan(self.initial(), |q, symbol| {
                *q = self.successor(*q, symbol);
                Some(*q)
            }))
            .collect()
    }

    /// Returns true if the given state is accepting. States that do not belong to the
    /// automaton are never accepting.
    pub fn is_accepting(&self, state: &State<S>) -> bool {
        match state {
            State::Active(label) => self
                .index_of(label)
                .is_some_and(|q| self.is_accepting_index(q)),
            State::Failure => false,
        }
    }

    /// Returns true if the state with the given index is accepting.
    pub fn is_accepting_index(&self, index: StateIndex) -> bool {
        self.accepting.contains(index.index())
    }

    /// Decides whether the given word belongs to the recognized language.
    pub fn detect<W: FiniteWord<Symbol = S>>(&self, word: W) -> bool {
        self.is_accepting_index(self.reached_state_index(word))
    }
}

impl<S: Symbol> Show for Automaton<S> {
    fn show(&self) -> String {
        let mut b = tabled::builder::Builder::default();

        b.push_record(
            std::iter::once(String::new()).chain(self.alphabet.universe().map(|sym| sym.show())),
        );
        for (q, state) in self.states() {
            let name = if state.is_initial() {
                format!("→ {}", state.show())
            } else {
                state.show()
            };
            let name = if state.is_failure() {
                name.dimmed().to_string()
            } else if self.is_accepting_index(q) {
                name.bold().to_string()
            } else {
                name
            };
            let row = self
                .alphabet
                .universe()
                .map(|sym| self.state(self.successor(q, sym)).show())
                .collect_vec();
            b.push_record(std::iter::once(name).chain(row));
        }

        b.build().with(tabled::settings::Style::ascii()).to_string()
    }
}

impl<S: Symbol> std::fmt::Debug for Automaton<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::{Automaton, AutomatonBuilder, State};
    use crate::statistics::Statistics;

    fn reference() -> Automaton {
        let stats =
            Statistics::extract(3, ["a", "aa", "abba", "abbbba", "aaabbbbba"]).unwrap();
        AutomatonBuilder::new(&stats).compile()
    }

    #[test]
    fn scan_and_detect() {
        let automaton = reference();
        assert_eq!(automaton.scan(""), &State::initial());
        assert_eq!(automaton.scan("aaab"), &State::Active(vec!['a', 'b']));
        assert_eq!(automaton.scan("aba"), &State::Failure);
        assert!(automaton.is_accepting(automaton.scan("abbba")));
        assert!(!automaton.is_accepting(&State::Failure));
        assert!(!automaton.is_accepting(&State::Active(vec!['x'])));
        assert!(!automaton.detect(""));
        assert!(automaton.detect("aaaaabbbbbbbbba"));
    }

    #[test]
    fn unknown_symbols_lead_to_failure() {
        let automaton = reference();
        assert_eq!(automaton.reached_state_index("ac"), automaton.failure());
        assert_eq!(automaton.reached_state_index("c"), automaton.failure());
        assert!(!automaton.detect("abbac"));
    }

    #[test]
    fn run_visits_states_in_order() {
        let automaton = reference();
        let run = automaton.run("abbab");
        let labels: Vec<_> = run
            .iter()
            .map(|q| crate::Show::show(automaton.state(*q)))
            .collect();
        assert_eq!(labels, vec!["ε", "a", "ab", "bb", "ba", "⊥"]);
        assert_eq!(run.last(), Some(&automaton.reached_state_index("abbab")));
    }

    #[test]
    fn transition_table() {
        let table = crate::Show::show(&reference());
        assert!(table.contains("→ ε"));
        assert!(table.contains('⊥'));
        for label in ["aa", "ab", "ba", "bb"] {
            assert!(table.contains(label), "missing row for {label}");
        }
    }

    #[test]
    fn shared_between_threads() {
        let automaton = &reference();
        let words = ["abba", "aba", "aaabbbbba", "abc"];
        std::thread::scope(|scope| {
            let handles = words
                .into_iter()
                .map(|word| scope.spawn(move || automaton.detect(word)))
                .collect::<Vec<_>>();
            let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results, vec![true, false, true, false]);
        });
    }
}
