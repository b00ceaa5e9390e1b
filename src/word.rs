use std::collections::VecDeque;

use crate::alphabet::Symbol;

/// A finite word is a finite sequence of [`Symbol`]s. This trait abstracts over the different ways
/// in which such a sequence can be given, so that for example both `"abba"` and `vec!['a', 'b', 'b', 'a']`
/// can be used to train and query a recognizer.
pub trait FiniteWord {
    /// The type of symbols making up the word.
    type Symbol: Symbol;

    /// Type for an iterator over the symbols making up the word.
    type Symbols<'this>: Iterator<Item = Self::Symbol>
    where
        Self: 'this;

    /// Returns an iterator over the symbols of the word.
    fn symbols(&self) -> Self::Symbols<'_>;

    /// Gives the length of the word, i.e. the number of symbols.
    fn len(&self) -> usize {
        self.symbols().count()
    }

    /// Returns `true` if the word is empty, i.e. has no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects the symbols making up `self` into a vector.
    fn collect_vec(&self) -> Vec<Self::Symbol> {
        self.symbols().collect()
    }

    /// Converts the word to a string. The empty word is displayed as `ε`.
    ///
    /// # Example
    /// ```
    /// use ktestable::prelude::*;
    /// assert_eq!("abba".as_string(), "abba");
    /// assert_eq!("".as_string(), "ε");
    /// assert_eq!([1u8, 2].as_string(), "[1, 2]");
    /// ```
    fn as_string(&self) -> String {
        let symbols = self.collect_vec();
        if symbols.is_empty() {
            "ε".into()
        } else {
            <Self::Symbol as crate::Show>::show_collection(symbols.iter())
        }
    }
}

impl FiniteWord for str {
    type Symbol = char;
    type Symbols<'this> = std::str::Chars<'this>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }

    fn len(&self) -> usize {
        self.chars().count()
    }
}

impl FiniteWord for String {
    type Symbol = char;
    type Symbols<'this> = std::str::Chars<'this>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }

    fn len(&self) -> usize {
        self.chars().count()
    }
}

impl<S: Symbol> FiniteWord for [S] {
    type Symbol = S;
    type Symbols<'this> = std::iter::Copied<std::slice::Iter<'this, S>>
    where
        Self: 'this;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        <[S]>::len(self)
    }
}

impl<S: Symbol, const N: usize> FiniteWord for [S; N] {
    type Symbol = S;
    type Symbols<'this> = std::iter::Copied<std::slice::Iter<'this, S>>
    where
        Self: 'this;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<S: Symbol> FiniteWord for Vec<S> {
    type Symbol = S;
    type Symbols<'this> = std::iter::Copied<std::slice::Iter<'this, S>>
    where
        Self: 'this;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn collect_vec(&self) -> Vec<S> {
        self.clone()
    }
}

impl<S: Symbol> FiniteWord for VecDeque<S> {
    type Symbol = S;
    type Symbols<'this> = std::iter::Copied<std::collections::vec_deque::Iter<'this, S>>
    where
        Self: 'this;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<W: FiniteWord + ?Sized> FiniteWord for &W {
    type Symbol = W::Symbol;
    type Symbols<'this> = W::Symbols<'this> where Self: 'this;

    fn symbols(&self) -> Self::Symbols<'_> {
        W::symbols(*self)
    }

    fn len(&self) -> usize {
        W::len(*self)
    }

    fn collect_vec(&self) -> Vec<Self::Symbol> {
        W::collect_vec(*self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::FiniteWord;

    #[test]
    fn words_of_different_shapes() {
        assert_eq!(FiniteWord::len("abc"), 3);
        assert_eq!(FiniteWord::len(&String::from("αβ")), 2);
        assert_eq!(vec![1u32, 2, 3].collect_vec(), vec![1, 2, 3]);
        assert!(<[char; 0] as FiniteWord>::is_empty(&[]));
        assert_eq!(
            VecDeque::from(vec!['x', 'y']).collect_vec(),
            "xy".collect_vec()
        );
        assert_eq!((&"ab").as_string(), "ab");
    }
}
