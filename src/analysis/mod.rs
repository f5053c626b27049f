//! Text analysis: tokenization and stop-word filtering.
//!
//! The analysis pipeline is deliberately small: Unicode word segmentation
//! with lowercasing, followed by stop-word removal. Stop words are always an
//! explicit input supplied by the caller; there is no default list and no
//! process-wide state.

pub mod stop;
pub mod tokenizer;

pub use stop::StopFilter;
pub use tokenizer::WordTokenizer;

/// Tokenize a document and drop stop words in one pass.
///
/// This is the token stream every vectorizer is built on.
pub fn analyze(text: &str, tokenizer: &WordTokenizer, stop: &StopFilter) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|token| !stop.is_stop_word(token))
        .collect()
}
