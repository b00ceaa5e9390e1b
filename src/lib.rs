//! Inference of deterministic recognizers for k-testable languages.
//!
//! A k-testable language is fully determined by three structural facts about a sample of words: which words
//! shorter than $k$ occur verbatim, which prefixes and suffixes of length $k-1$ occur, and which infixes of
//! length $k$ (the k-grams) occur anywhere in a sample word. Learning such a language from a finite sample
//! therefore happens in two steps.
//!
//! First, [`Statistics::extract`] scans the sample and collects these facts. Then an [`AutomatonBuilder`]
//! compiles them into a deterministic and complete [`Automaton`], whose states are labelled with the last
//! $k-1$ symbols that have been read (or a shorter prefix while still at the beginning of a word). Reading a
//! symbol that completes a k-gram which never appeared in the sample leads into a sink state, from which no
//! word is ever accepted again.
//!
//! The facade [`KTestable`] chains both steps and is what most users want:
//! ```
//! use ktestable::prelude::*;
//! let kt = KTestable::build(3, ["a", "aa", "abba", "abbbba", "aaabbbbba"]).unwrap();
//! assert!(kt.detect("aaaaabbbbbbbbba"));
//! assert!(!kt.detect("aba"));
//! ```
//!
//! A compiled automaton is immutable and classifying a word only uses a local cursor, so a single recognizer
//! can be shared between any number of threads.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use ktestable::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{Automaton, AutomatonBuilder, State, StateIndex},
        error::ConfigurationError,
        math,
        recognizer::KTestable,
        statistics::Statistics,
        word::FiniteWord,
        Show,
    };
}

/// Version of the crate, as given in its manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

mod show;
pub use show::Show;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

/// Module that contains definitions for dealing with finite words.
pub mod word;
pub use word::FiniteWord;

/// The errors that may occur when setting up a recognizer.
pub mod error;
pub use error::ConfigurationError;

/// Extraction of the structural statistics of a sample.
pub mod statistics;
pub use statistics::Statistics;

/// The compiled deterministic automaton together with the builder that synthesizes it.
pub mod automaton;
pub use automaton::{Automaton, AutomatonBuilder, State, StateIndex};

/// The public facade, which learns a recognizer from a sample and classifies words with it.
pub mod recognizer;
pub use recognizer::KTestable;
