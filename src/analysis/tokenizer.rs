//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and lowercases
//! each word, so international text (including CJK) is handled without any
//! language-specific configuration. Punctuation and whitespace segments are
//! filtered out.

use unicode_segmentation::UnicodeSegmentation;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// # Examples
///
/// ```
/// use textcat::analysis::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split `text` into lowercased word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("The quick, brown fox!");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("café résumé");
        assert_eq!(tokens, vec!["café", "résumé"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  \t\n").is_empty());
    }
}
