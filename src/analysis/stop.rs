//! Stop-word filter implementation.
//!
//! Removes common words that carry no class signal before vectorization.
//! The word set is always supplied by the caller; an empty filter is valid
//! and passes every token through.

use ahash::AHashSet;

/// A filter that removes stop words from a token stream.
///
/// # Examples
///
/// ```
/// use textcat::analysis::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["the", "and", "or"]);
/// assert!(filter.is_stop_word("the"));
/// assert!(!filter.is_stop_word("hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: AHashSet<String>,
}

impl StopFilter {
    /// Create a filter with no stop words.
    pub fn empty() -> Self {
        StopFilter {
            stop_words: AHashSet::new(),
        }
    }

    /// Create a filter with the given stop-word set.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcat::analysis::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
