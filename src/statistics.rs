use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::{debug, trace};

use crate::{
    alphabet::{Alphabet, Symbol},
    error::ConfigurationError,
    math,
    word::FiniteWord,
    Show,
};

/// The structural statistics of a sample with respect to a window size `k`. These fully
/// characterize the smallest k-testable language that contains every word of the sample:
/// - the short strings are the sample words of length less than `k`,
/// - the prefixes and suffixes are the first and last `k - 1` symbols of every sample word
///   that is long enough to have them,
/// - the valid substrings are all infixes of length `k` of the sample words.
///
/// Statistics are computed once by [`Statistics::extract`] and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics<S: Symbol = char> {
    k: usize,
    alphabet: Alphabet<S>,
    short_strings: math::Set<Vec<S>>,
    prefixes: math::Set<Vec<S>>,
    suffixes: math::Set<Vec<S>>,
    valid_substrings: math::Set<Vec<S>>,
}

impl<S: Symbol> Statistics<S> {
    /// Scans the given sample and collects its structural statistics for window size `k`. The
    /// order of the sample and duplicate words do not influence the result. An empty sample yields
    /// empty statistics, the only way for this to fail is a window size of `0`.
    ///
    /// # Example
    /// ```
    /// use ktestable::prelude::*;
    /// let stats = Statistics::extract(3, ["a", "abba"]).unwrap();
    /// assert!(stats.short_strings().contains(&vec!['a']));
    /// assert!(stats.prefixes().contains(&vec!['a', 'b']));
    /// assert!(stats.suffixes().contains(&vec!['b', 'a']));
    /// assert_eq!(stats.valid_substrings().len(), 2);
    /// ```
    pub fn extract<W, I>(k: usize, sample: I) -> Result<Self, ConfigurationError>
    where
        W: FiniteWord<Symbol = S>,
        I: IntoIterator<Item = W>,
    {
        let k = ConfigurationError::check_window(k)?;

        let mut symbols = math::Set::default();
        let mut short_strings = math::Set::default();
        let mut prefixes = math::Set::default();
        let mut suffixes = math::Set::default();
        let mut valid_substrings = math::Set::default();

        let mut scanned = 0usize;
        for word in sample {
            let word = word.collect_vec();
            scanned += 1;

            // a word of length exactly k - 1 is short and has a prefix and suffix
            if word.len() + 1 >= k {
                prefixes.insert(word[..k - 1].to_vec());
                suffixes.insert(word[word.len() + 1 - k..].to_vec());
            }
            for window in word.windows(k) {
                if valid_substrings.insert(window.to_vec()) {
                    trace!("found new valid substring {}", window.show().blue());
                }
            }
            symbols.extend(word.iter().copied());
            if word.len() < k {
                short_strings.insert(word);
            }
        }

        let stats = Self {
            k,
            alphabet: symbols.into_iter().collect(),
            short_strings,
            prefixes,
            suffixes,
            valid_substrings,
        };
        debug!(
            "extracted statistics from {scanned} words for k = {k}: {} symbols, {} short strings, {} prefixes, {} suffixes and {} valid substrings",
            stats.alphabet.size(),
            stats.short_strings.len(),
            stats.prefixes.len(),
            stats.suffixes.len(),
            stats.valid_substrings.len()
        );
        Ok(stats)
    }

    /// Returns the window size these statistics were computed for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the alphabet, which consists of all symbols occurring in some sample word.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// The sample words of length strictly less than `k`.
    pub fn short_strings(&self) -> &math::Set<Vec<S>> {
        &self.short_strings
    }

    /// The prefixes of length `k - 1` of all sample words.
    pub fn prefixes(&self) -> &math::Set<Vec<S>> {
        &self.prefixes
    }

    /// The suffixes of length `k - 1` of all sample words.
    pub fn suffixes(&self) -> &math::Set<Vec<S>> {
        &self.suffixes
    }

    /// All infixes of length `k` of the sample words.
    pub fn valid_substrings(&self) -> &math::Set<Vec<S>> {
        &self.valid_substrings
    }

    /// Iterates over the union of prefixes and short strings, these are the words that make
    /// up the initial trie of an automaton.
    pub fn prefixes_and_short_strings(&self) -> impl Iterator<Item = &Vec<S>> + '_ {
        self.prefixes.union(&self.short_strings)
    }

    /// Iterates over the union of suffixes and short strings, these are the labels of the
    /// accepting states.
    pub fn suffixes_and_short_strings(&self) -> impl Iterator<Item = &Vec<S>> + '_ {
        self.suffixes.union(&self.short_strings)
    }

    /// Returns true if no word has been scanned.
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty() && self.short_strings.is_empty() && self.prefixes.is_empty()
    }
}

fn show_set<S: Symbol>(set: &math::Set<Vec<S>>) -> String {
    format!(
        "{{{}}}",
        set.iter()
            .sorted_by(|x, y| x.len().cmp(&y.len()).then(x.cmp(y)))
            .map(|word| word.as_string())
            .join(", ")
    )
}

impl<S: Symbol> Show for Statistics<S> {
    fn show(&self) -> String {
        format!(
            "k = {}\nalphabet: {}\nshort strings: {}\nprefixes: {}\nsuffixes: {}\nvalid substrings: {}",
            self.k,
            self.alphabet.show(),
            show_set(&self.short_strings),
            show_set(&self.prefixes),
            show_set(&self.suffixes),
            show_set(&self.valid_substrings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;
    use crate::{error::ConfigurationError, math, Show};

    fn set(words: &[&str]) -> math::Set<Vec<char>> {
        words.iter().map(|w| w.chars().collect()).collect()
    }

    #[test_log::test]
    fn extract_reference_sample() {
        let stats =
            Statistics::extract(3, ["a", "aa", "abba", "abbbba", "aaabbbbba"]).unwrap();
        assert_eq!(stats.k(), 3);
        assert_eq!(stats.alphabet().universe().collect::<String>(), "ab");
        assert_eq!(stats.short_strings(), &set(&["a", "aa"]));
        assert_eq!(stats.prefixes(), &set(&["aa", "ab"]));
        assert_eq!(stats.suffixes(), &set(&["aa", "ba"]));
        assert_eq!(
            stats.valid_substrings(),
            &set(&["abb", "bba", "bbb", "aaa", "aab"])
        );
        assert_eq!(stats.prefixes_and_short_strings().count(), 3);
        assert_eq!(stats.suffixes_and_short_strings().count(), 3);
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        let forward = Statistics::extract(2, ["ab", "ba", "abab"]).unwrap();
        let backward = Statistics::extract(2, ["abab", "ba", "ab", "ba", "ab"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn window_of_size_one() {
        let stats = Statistics::extract(1, ["ab", "c", ""]).unwrap();
        assert_eq!(stats.short_strings(), &set(&[""]));
        assert_eq!(stats.prefixes(), &set(&[""]));
        assert_eq!(stats.suffixes(), &set(&[""]));
        assert_eq!(stats.valid_substrings(), &set(&["a", "b", "c"]));
    }

    #[test]
    fn empty_sample_and_invalid_window() {
        let stats = Statistics::<char>::extract(4, Vec::<String>::new()).unwrap();
        assert!(stats.is_empty());
        assert!(stats.valid_substrings().is_empty());
        assert_eq!(
            Statistics::extract(0, ["abc"]),
            Err(ConfigurationError::InvalidWindow(0))
        );
    }

    #[test]
    fn words_over_integers() {
        let stats = Statistics::extract(2, [vec![1u8, 2, 3], vec![3, 1]]).unwrap();
        assert_eq!(stats.alphabet().size(), 3);
        assert!(stats.valid_substrings().contains(&vec![3, 1]));
        assert!(stats.suffixes().contains(&vec![1]));
        assert!(stats.show().contains("prefixes: {[1], [3]}"));
    }
}
