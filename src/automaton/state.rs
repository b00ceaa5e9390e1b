use std::cmp::Ordering;

use crate::{alphabet::Symbol, word::FiniteWord, Show};

/// A state of a k-testable automaton. An active state is labelled with the (at most `k - 1`) most
/// recently read symbols, or with the whole input read so far while that is still shorter than
/// `k - 1`. The state labelled with the empty word is the initial state. Every input that leaves
/// the learned structure ends up in the distinguished [`State::Failure`] sink.
///
/// States are ordered length-lexicographically by their label, with [`State::Failure`] coming last.
/// This means the initial state is always the smallest state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum State<S: Symbol = char> {
    /// A state that is labelled with a word.
    Active(Vec<S>),
    /// The absorbing sink state.
    Failure,
}

impl<S: Symbol> State<S> {
    /// Returns the initial state, which is labelled with the empty word.
    pub fn initial() -> Self {
        State::Active(vec![])
    }

    /// Returns the label of an active state and `None` for the failure state.
    pub fn label(&self) -> Option<&[S]> {
        match self {
            State::Active(label) => Some(label),
            State::Failure => None,
        }
    }

    /// Returns true if this is the initial state.
    pub fn is_initial(&self) -> bool {
        matches!(self, State::Active(label) if label.is_empty())
    }

    /// Returns true if this is the failure state.
    pub fn is_failure(&self) -> bool {
        matches!(self, State::Failure)
    }

    /// Compares the state with an active state of the given label.
    pub(crate) fn cmp_label(&self, other: &[S]) -> Ordering {
        match self {
            State::Active(label) => label
                .len()
                .cmp(&other.len())
                .then_with(|| label.as_slice().cmp(other)),
            State::Failure => Ordering::Greater,
        }
    }
}

impl<S: Symbol> Ord for State<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other {
            State::Active(label) => self.cmp_label(label),
            State::Failure if self.is_failure() => Ordering::Equal,
            State::Failure => Ordering::Less,
        }
    }
}

impl<S: Symbol> PartialOrd for State<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Symbol> Show for State<S> {
    fn show(&self) -> String {
        match self {
            State::Active(label) => label.as_string(),
            State::Failure => "⊥".into(),
        }
    }
}

/// Identifies a state of an [`crate::Automaton`]. Indices are dense, the initial state always
/// has index `0` and the failure state has the largest index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateIndex(u32);

impl StateIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the index as a `usize`, i.e. the position of the state in the automaton.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Show for StateIndex {
    fn show(&self) -> String {
        format!("q{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::Show;

    fn active(label: &str) -> State {
        State::Active(label.chars().collect())
    }

    #[test]
    fn length_lexicographic_order() {
        let mut states = vec![
            State::Failure,
            active("ba"),
            active("b"),
            active(""),
            active("ab"),
            active("a"),
        ];
        states.sort();
        assert_eq!(
            states.iter().map(|q| q.show()).collect::<Vec<_>>(),
            vec!["ε", "a", "b", "ab", "ba", "⊥"]
        );
        assert!(states[0].is_initial());
        assert!(states[5].is_failure());
        assert_eq!(states[3].label(), Some(&['a', 'b'][..]));
    }

    #[test]
    fn failure_never_collides_with_a_label() {
        assert_ne!(State::Failure, active("FAILURE"));
        assert_eq!(State::<char>::Failure.label(), None);
        assert_eq!(State::<char>::initial(), active(""));
    }
}
