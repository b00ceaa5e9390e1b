use tracing::debug;

use crate::{
    alphabet::Symbol,
    automaton::{Automaton, AutomatonBuilder},
    error::ConfigurationError,
    statistics::Statistics,
    word::FiniteWord,
};

/// A recognizer for a k-testable language that is learned from a sample of words. Building it
/// extracts the [`Statistics`] of the sample and compiles them into an [`Automaton`], both of which
/// are kept for the lifetime of the recognizer. Afterwards, [`KTestable::detect`] decides
/// membership of arbitrary words.
///
/// # Example
/// ```
/// use ktestable::prelude::*;
/// let kt = KTestable::build(3, ["a", "aa", "abba", "abbbba", "aaabbbbba"]).unwrap();
/// assert!(kt.detect("abba"));
/// assert!(kt.detect("aaaaabbbbbbbbba"));
/// assert!(!kt.detect("aabbbaaac"));
/// assert!(KTestable::build(0, ["a"]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct KTestable<S: Symbol = char> {
    stats: Statistics<S>,
    automaton: Automaton<S>,
}

impl<S: Symbol> KTestable<S> {
    /// Learns a recognizer with window size `k` from the given sample. Fails if `k` is `0`, an
    /// empty sample is fine and yields a recognizer that rejects every word.
    pub fn build<W, I>(k: usize, sample: I) -> Result<Self, ConfigurationError>
    where
        W: FiniteWord<Symbol = S>,
        I: IntoIterator<Item = W>,
    {
        let stats = Statistics::extract(k, sample)?;
        let start = std::time::Instant::now();
        let automaton = AutomatonBuilder::new(&stats).compile();
        debug!(
            "building k-testable recognizer with {} states took {}µs",
            automaton.size(),
            start.elapsed().as_micros()
        );
        Ok(Self { stats, automaton })
    }

    /// Decides whether `word` belongs to the learned language. This never fails, a word that
    /// contains a symbol which has not been seen during training is simply rejected.
    pub fn detect<W: FiniteWord<Symbol = S>>(&self, word: W) -> bool {
        self.automaton.detect(word)
    }

    /// The window size of the recognizer.
    pub fn k(&self) -> usize {
        self.stats.k()
    }

    /// Gives access to the statistics the recognizer was built from.
    pub fn statistics(&self) -> &Statistics<S> {
        &self.stats
    }

    /// Gives access to the compiled automaton.
    pub fn automaton(&self) -> &Automaton<S> {
        &self.automaton
    }
}

#[cfg(test)]
mod tests {
    use super::KTestable;
    use crate::{error::ConfigurationError, Show};

    const K: usize = 3;
    const SAMPLE: [&str; 5] = ["a", "aa", "abba", "abbbba", "aaabbbbba"];

    fn kt() -> KTestable {
        KTestable::build(K, SAMPLE).unwrap()
    }

    #[test_log::test]
    fn detect_reference_words() {
        let kt = kt();
        let expected = [
            ("aba", false),
            ("abc", false),
            ("aaaaaaaaabbbbbbbbbbbbbbbbbbbbbbbbaaaaaaaaaaaaaa", false),
            ("aabbbaaac", false),
            ("aaaaabbbbbbbbba", true),
            ("a", true),
            ("aa", true),
            ("abba", true),
            ("abbbba", true),
            ("aaabbbbba", true),
        ];
        for (word, classification) in expected {
            let b = kt.detect(word);
            assert_eq!(b, classification, "{word} is classified {b}, expected {classification}");
        }
    }

    #[test]
    fn sample_words_are_accepted() {
        let samples: [(usize, &[&str]); 4] = [
            (2, &["ab", "abab", "b"]),
            (3, &SAMPLE),
            (4, &["abcabc", "abc", "cab"]),
            (1, &["xyz", "zz"]),
        ];
        for (k, sample) in samples {
            let kt = KTestable::build(k, sample.iter()).unwrap();
            for word in sample {
                assert!(kt.detect(word), "{word} rejected for k = {k}");
            }
        }
    }

    #[test]
    fn detection_is_deterministic_and_independent() {
        let kt = kt();
        let fresh = kt.detect("abbba");
        assert!(!kt.detect("abc"));
        assert!(!kt.detect("aba"));
        assert_eq!(kt.detect("abbba"), fresh);
        assert_eq!(kt.detect("abbba"), kt.detect("abbba"));
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let kt = kt();
        for word in ["c", "ac", "abbac", "caa", "aäa"] {
            assert!(!kt.detect(word), "{word} should be rejected");
        }
    }

    #[test]
    fn window_of_size_one_accepts_all_words_over_the_alphabet() {
        let kt = KTestable::build(1, ["ab", "c"]).unwrap();
        assert!(kt.detect(""));
        assert!(kt.detect("a"));
        assert!(kt.detect("cba"));
        assert!(kt.detect("abcabcccc"));
        assert!(!kt.detect("abd"));
        assert!(!kt.detect("d"));
    }

    #[test]
    fn empty_sample_rejects_everything() {
        let kt = KTestable::<char>::build(2, Vec::<String>::new()).unwrap();
        assert!(!kt.detect(""));
        assert!(!kt.detect("a"));
        assert_eq!(kt.automaton().size(), 2);
    }

    #[test]
    fn invalid_window_is_rejected() {
        assert_eq!(
            KTestable::build(0, SAMPLE).unwrap_err(),
            ConfigurationError::InvalidWindow(0)
        );
    }

    #[test]
    fn builds_are_idempotent() {
        let first = kt();
        let second = kt();
        assert_eq!(first.automaton(), second.automaton());
        assert_eq!(first.statistics(), second.statistics());
        assert_eq!(first.automaton().show(), second.automaton().show());
    }

    #[test]
    fn words_over_integers() {
        let kt = KTestable::build(2, [vec![0u8, 1, 0], vec![0, 1, 1, 0]]).unwrap();
        assert_eq!(kt.k(), 2);
        assert!(kt.detect([0u8, 1, 1, 1, 0]));
        assert!(kt.detect(vec![0, 1, 0, 1, 0]));
        assert!(!kt.detect([1u8, 0]));
        assert!(!kt.detect([0u8, 2, 0]));
    }
}
