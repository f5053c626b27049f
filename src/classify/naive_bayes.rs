//! Multinomial Naive Bayes classifier.

use serde::{Deserialize, Serialize};

use crate::classify::{Estimator, Label, ParamSet, check_predict_shape, index_classes};
use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// Configuration for the multinomial Naive Bayes classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesConfig {
    /// Additive (Laplace) smoothing strength; must be > 0.
    pub alpha: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl NaiveBayesConfig {
    /// Validate the smoothing strength.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(TextcatError::invalid_config(format!(
                "alpha must be a finite value > 0, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Multinomial Naive Bayes classifier.
///
/// Fitting estimates, per class, a log prior from the class frequency and a
/// smoothed log conditional per feature. Prediction scores each row in log
/// space and picks the highest-scoring class, breaking ties toward the
/// lowest class label.
///
/// # Examples
///
/// ```
/// use textcat::classify::{Estimator, NaiveBayes, NaiveBayesConfig};
/// use textcat::matrix::Matrix;
///
/// let x = Matrix::from_rows(vec![
///     vec![2.0, 0.0],
///     vec![0.0, 3.0],
/// ]).unwrap();
/// let y = vec![1, 0];
///
/// let mut model = NaiveBayes::new(NaiveBayesConfig { alpha: 1.0 }).unwrap();
/// model.fit(&x, &y).unwrap();
///
/// let test = Matrix::from_rows(vec![vec![4.0, 0.0]]).unwrap();
/// assert_eq!(model.predict(&test).unwrap(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayes<L: Label> {
    config: NaiveBayesConfig,
    /// Distinct class labels in ascending order.
    classes: Vec<L>,
    /// Log prior per class.
    log_prior: Vec<f64>,
    /// Smoothed log conditional probability per (class, feature).
    log_cond: Vec<Vec<f64>>,
    /// Column count seen at fit time.
    n_features: usize,
    fitted: bool,
}

impl<L: Label> NaiveBayes<L> {
    /// Create a new classifier; the configuration is validated eagerly.
    pub fn new(config: NaiveBayesConfig) -> Result<Self> {
        config.validate()?;
        Ok(NaiveBayes {
            config,
            classes: Vec::new(),
            log_prior: Vec::new(),
            log_cond: Vec::new(),
            n_features: 0,
            fitted: false,
        })
    }

    /// The distinct class labels seen at fit time, ascending.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Log-space score of every class for one feature row.
    pub(crate) fn score_row(&self, row: &[f64]) -> Vec<f64> {
        self.log_prior
            .iter()
            .zip(&self.log_cond)
            .map(|(prior, cond)| {
                prior
                    + row
                        .iter()
                        .zip(cond)
                        .map(|(value, log_p)| value * log_p)
                        .sum::<f64>()
            })
            .collect()
    }
}

/// Index of the maximum score; the first maximum wins, so ties resolve to
/// the lowest class label when classes are sorted.
pub(crate) fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}

impl<L: Label> Estimator<L> for NaiveBayes<L> {
    fn with_params(params: &ParamSet) -> Result<Self> {
        let mut config = NaiveBayesConfig::default();
        for (name, value) in params {
            match name.as_str() {
                "alpha" => {
                    config.alpha = value.as_f64().ok_or_else(|| {
                        TextcatError::invalid_config("alpha must be numeric")
                    })?;
                }
                other => {
                    return Err(TextcatError::invalid_config(format!(
                        "unknown NaiveBayes parameter '{other}'"
                    )));
                }
            }
        }
        Self::new(config)
    }

    fn fit(&mut self, x: &Matrix, y: &[L]) -> Result<()> {
        if x.rows() != y.len() {
            return Err(TextcatError::shape_mismatch(format!(
                "matrix has {} rows but {} labels were supplied",
                x.rows(),
                y.len()
            )));
        }
        let (classes, row_classes) = index_classes(y)?;

        let n_classes = classes.len();
        let n_features = x.cols();
        let alpha = self.config.alpha;

        // Per-class feature counts and row counts.
        let mut feature_counts = vec![vec![0.0f64; n_features]; n_classes];
        let mut row_counts = vec![0usize; n_classes];
        for (row, &class) in row_classes.iter().enumerate() {
            row_counts[class] += 1;
            let counts = &mut feature_counts[class];
            for (count, &value) in counts.iter_mut().zip(x.row(row)) {
                *count += value;
            }
        }

        let n_rows = y.len() as f64;
        self.log_prior = row_counts
            .iter()
            .map(|&count| (count as f64 / n_rows).ln())
            .collect();

        self.log_cond = feature_counts
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum();
                let denom = total + alpha * n_features as f64;
                counts
                    .iter()
                    .map(|&count| ((count + alpha) / denom).ln())
                    .collect()
            })
            .collect();

        self.classes = classes;
        self.n_features = n_features;
        self.fitted = true;

        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<L>> {
        if !self.fitted {
            return Err(TextcatError::not_fitted(
                "NaiveBayes::predict called before fit",
            ));
        }
        check_predict_shape(x, self.n_features)?;

        Ok(x.iter_rows()
            .map(|row| {
                let scores = self.score_row(row);
                self.classes[argmax(&scores)].clone()
            })
            .collect())
    }
}
