use itertools::Itertools;

/// Helper trait which can be used to display symbols, words, states and automata.
pub trait Show {
    /// Returns a human readable representation of `self`. For a symbol this is just the symbol
    /// itself, for a state it is the label of the state and for an automaton it is its transition
    /// table. This is mainly used for debugging purposes.
    fn show(&self) -> String;

    /// Show a sequence of the thing. For symbols this is the word they make up, i.e. the
    /// sequence `a`, `b`, `b` is shown as `abb`. By default, the elements are separated by
    /// commas and enclosed in brackets.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("[{}]", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
    {
        iter.into_iter().collect()
    }
}

macro_rules! impl_integer_show {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    }
}

impl_integer_show!(u8, u16, u32, u64, usize);

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
