//! TF-IDF vectorizer with document-frequency pruning.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::{self, StopFilter, WordTokenizer};
use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// Configuration for TF-IDF vocabulary pruning.
///
/// Both bounds are document-frequency fractions in `[0, 1]`: a token
/// survives only if the fraction of documents containing it is at least
/// `min_df` and at most `max_df`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfConfig {
    /// Upper document-frequency bound; tokens above it are pruned.
    pub max_df: f64,
    /// Lower document-frequency bound; tokens below it are pruned.
    pub min_df: f64,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_df: 1.0,
            min_df: 0.0,
        }
    }
}

impl TfidfConfig {
    /// Validate the pruning bounds.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_df) || !(0.0..=1.0).contains(&self.max_df) {
            return Err(TextcatError::invalid_config(format!(
                "min_df and max_df must be fractions in [0, 1], got min_df={}, max_df={}",
                self.min_df, self.max_df
            )));
        }
        if self.min_df > self.max_df {
            return Err(TextcatError::invalid_config(format!(
                "min_df ({}) must not exceed max_df ({})",
                self.min_df, self.max_df
            )));
        }
        Ok(())
    }
}

/// A vectorizer that maps documents to TF-IDF weighted rows.
///
/// Shares the count vectorizer's tokenization and vocabulary building, but
/// prunes the vocabulary by document frequency and weights each surviving
/// token as `count * ln(n_documents / (1 + document_frequency))`. The IDF
/// table is computed once at fit time and reused by every `transform`;
/// transform never recomputes document frequencies from its own input.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: WordTokenizer,
    stop: StopFilter,
    config: TfidfConfig,
    /// Vocabulary: token -> column index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per column, fixed at fit time.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Create a TF-IDF vectorizer with default (no-op) pruning bounds.
    pub fn new(stop: StopFilter) -> Self {
        TfidfVectorizer {
            tokenizer: WordTokenizer::new(),
            stop,
            config: TfidfConfig::default(),
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            fitted: false,
        }
    }

    /// Create a TF-IDF vectorizer with explicit pruning bounds.
    ///
    /// The configuration is validated eagerly.
    pub fn with_config(stop: StopFilter, config: TfidfConfig) -> Result<Self> {
        config.validate()?;
        Ok(TfidfVectorizer {
            tokenizer: WordTokenizer::new(),
            stop,
            config,
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            fitted: false,
        })
    }

    /// Build the pruned vocabulary and the IDF table from `documents`.
    ///
    /// Fails with an empty-vocabulary error if pruning eliminates every
    /// token; a degenerate all-zero-width matrix is never produced
    /// silently.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(TextcatError::empty_vocabulary(
                "cannot fit a TF-IDF vectorizer on zero documents",
            ));
        }

        self.n_documents = documents.len();

        // Document frequency per token. BTreeMap keeps column assignment
        // deterministic.
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: AHashSet<String> =
                analysis::analyze(doc, &self.tokenizer, &self.stop)
                    .into_iter()
                    .collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n = self.n_documents as f64;
        let mut vocabulary = AHashMap::new();
        let mut idf = Vec::new();
        for (token, df) in document_frequency {
            let fraction = df as f64 / n;
            if fraction < self.config.min_df || fraction > self.config.max_df {
                continue;
            }
            let idx = vocabulary.len();
            vocabulary.insert(token, idx);
            // The +1 in the denominator is the fixed smoothing constant.
            idf.push((n / (1.0 + df as f64)).ln());
        }

        if vocabulary.is_empty() {
            return Err(TextcatError::empty_vocabulary(format!(
                "document-frequency pruning (min_df={}, max_df={}) removed every token",
                self.config.min_df, self.config.max_df
            )));
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.fitted = true;

        Ok(())
    }

    /// Map each document to a TF-IDF weighted row over the fitted
    /// vocabulary, reusing the IDF table computed at fit time.
    pub fn transform(&self, documents: &[String]) -> Result<Matrix> {
        if !self.fitted {
            return Err(TextcatError::not_fitted(
                "TfidfVectorizer::transform called before fit",
            ));
        }

        let mut matrix = Matrix::zeros(documents.len(), self.vocabulary.len());
        for (row, doc) in documents.iter().enumerate() {
            for token in analysis::analyze(doc, &self.tokenizer, &self.stop) {
                if let Some(&col) = self.vocabulary.get(&token) {
                    matrix.set(row, col, matrix.get(row, col) + 1.0);
                }
            }
            for col in 0..self.vocabulary.len() {
                let count = matrix.get(row, col);
                if count > 0.0 {
                    matrix.set(row, col, count * self.idf[col]);
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

    /// Inverse document frequency for a fitted token, if it survived
    /// pruning.
    pub fn idf_of(&self, token: &str) -> Option<f64> {
        self.vocabulary.get(token).map(|&idx| self.idf[idx])
    }
}
