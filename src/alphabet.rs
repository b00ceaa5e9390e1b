use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::Show;

/// A symbol of an alphabet, which is also the type of the symbols in a word. Symbols are
/// atomic and compared by equality only, the ordering is just used to lay out transition
/// tables deterministically.
pub trait Symbol: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show {}
impl<S: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show> Symbol for S {}

/// Represents a finite alphabet, i.e. a collection of distinct [`Symbol`]s. The symbols are
/// kept in sorted order, which gives every symbol a fixed position. That position is used as
/// the column of the symbol in the transition table of an [`crate::Automaton`].
///
/// # Example
/// ```
/// use ktestable::prelude::*;
/// let alphabet = Alphabet::from_iter(['b', 'a', 'b']);
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet.index_of('b'), Some(1));
/// assert!(!alphabet.contains('c'));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct Alphabet<S: Symbol = char>(Vec<S>);

impl<S: Symbol> Alphabet<S> {
    /// Creates an alphabet without any symbols.
    pub fn empty() -> Self {
        Self(vec![])
    }

    /// Returns the position of the given symbol in the alphabet, if it is present.
    pub fn index_of(&self, symbol: S) -> Option<usize> {
        self.0.binary_search(&symbol).ok()
    }

    /// Returns the symbol at the given position, if it exists.
    pub fn get(&self, index: usize) -> Option<S> {
        self.0.get(index).copied()
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: S) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Returns an iterator over all symbols in the alphabet, in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = S> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Symbol> Default for Alphabet<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().unique().sorted().collect())
    }
}

impl<S: Symbol> Show for Alphabet<S> {
    fn show(&self) -> String {
        format!("{{{}}}", self.0.iter().map(|sym| sym.show()).join(", "))
    }
}
