//! Count vectorizer: documents to token occurrence counts.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::analysis::{self, StopFilter, WordTokenizer};
use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// A vectorizer that maps documents to rows of token occurrence counts.
///
/// # Examples
///
/// ```
/// use textcat::analysis::StopFilter;
/// use textcat::vectorize::CountVectorizer;
///
/// let documents = vec![
///     "good product".to_string(),
///     "bad product".to_string(),
/// ];
///
/// let mut vectorizer = CountVectorizer::new(StopFilter::empty());
/// let matrix = vectorizer.fit_transform(&documents).unwrap();
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.cols(), 3); // "bad", "good", "product"
/// ```
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    tokenizer: WordTokenizer,
    stop: StopFilter,
    /// Vocabulary: token -> column index mapping.
    vocabulary: AHashMap<String, usize>,
    fitted: bool,
}

impl CountVectorizer {
    /// Create a new count vectorizer with the given stop-word filter.
    pub fn new(stop: StopFilter) -> Self {
        CountVectorizer {
            tokenizer: WordTokenizer::new(),
            stop,
            vocabulary: AHashMap::new(),
            fitted: false,
        }
    }

    /// Build the vocabulary from the token stream of `documents`.
    ///
    /// Re-fitting rebuilds the vocabulary entirely.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut tokens = BTreeSet::new();
        for doc in documents {
            tokens.extend(analysis::analyze(doc, &self.tokenizer, &self.stop));
        }

        self.vocabulary = tokens
            .into_iter()
            .enumerate()
            .map(|(idx, token)| (token, idx))
            .collect();
        self.fitted = true;

        Ok(())
    }

    /// Map each document to a row of occurrence counts over the fitted
    /// vocabulary.
    ///
    /// Tokens not in the vocabulary are ignored; a document that is empty
    /// or consists only of stop words yields an all-zero row.
    pub fn transform(&self, documents: &[String]) -> Result<Matrix> {
        if !self.fitted {
            return Err(TextcatError::not_fitted(
                "CountVectorizer::transform called before fit",
            ));
        }

        let mut matrix = Matrix::zeros(documents.len(), self.vocabulary.len());
        for (row, doc) in documents.iter().enumerate() {
            for token in analysis::analyze(doc, &self.tokenizer, &self.stop) {
                if let Some(&col) = self.vocabulary.get(&token) {
                    matrix.set(row, col, matrix.get(row, col) + 1.0);
                }
            }
        }

        Ok(matrix)
    }

    /// Fit the vocabulary and transform the same documents in one call.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Matrix> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Borrow the fitted vocabulary.
    pub fn vocabulary(&self) -> &AHashMap<String, usize> {
        &self.vocabulary
    }
}
