//! SPODE: super-parent one-dependence estimator.
//!
//! A semi-naive Bayes classifier. One feature (the "super-parent") is
//! promoted: every other feature's conditional probability is modeled as
//! depending on both the class and the super-parent's (bucketed) value,
//! capturing one real feature dependency while staying tractable.

use serde::{Deserialize, Serialize};

use crate::classify::naive_bayes::argmax;
use crate::classify::{Estimator, Label, ParamSet, check_predict_shape, index_classes};
use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// Configuration for the SPODE classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpodeConfig {
    /// Additive smoothing strength; must be > 0.
    pub alpha: f64,
    /// Super-parent feature index; selected automatically when `None`.
    pub super_parent: Option<usize>,
    /// Number of buckets the super-parent value is discretized into;
    /// must be >= 1. With a single bucket the model degenerates to
    /// plain Naive Bayes.
    pub buckets: usize,
}

impl Default for SpodeConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            super_parent: None,
            buckets: 2,
        }
    }
}

impl SpodeConfig {
    /// Validate smoothing strength and bucket count.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(TextcatError::invalid_config(format!(
                "alpha must be a finite value > 0, got {}",
                self.alpha
            )));
        }
        if self.buckets == 0 {
            return Err(TextcatError::invalid_config(
                "buckets must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Super-parent one-dependence estimator.
///
/// Shares Naive Bayes' priors and smoothing discipline, but stores joint
/// conditional tables indexed by (class, super-parent bucket, feature).
/// Buckets with no observed joint counts fall back to the smoothing mass
/// rather than producing zero probability.
#[derive(Debug, Clone)]
pub struct Spode<L: Label> {
    config: SpodeConfig,
    /// Distinct class labels in ascending order.
    classes: Vec<L>,
    /// Log prior per class.
    log_prior: Vec<f64>,
    /// Chosen super-parent feature index.
    super_parent: usize,
    /// The super-parent's own class-conditional log probability.
    sp_log_cond: Vec<f64>,
    /// Joint log conditionals indexed as [class][bucket][feature].
    joint_log_cond: Vec<Vec<Vec<f64>>>,
    /// Column count seen at fit time.
    n_features: usize,
    fitted: bool,
}

impl<L: Label> Spode<L> {
    /// Create a new classifier; the configuration is validated eagerly.
    pub fn new(config: SpodeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Spode {
            config,
            classes: Vec::new(),
            log_prior: Vec::new(),
            super_parent: 0,
            sp_log_cond: Vec::new(),
            joint_log_cond: Vec::new(),
            n_features: 0,
            fitted: false,
        })
    }

    /// The super-parent feature index chosen at fit time.
    pub fn super_parent(&self) -> usize {
        self.super_parent
    }

    /// The distinct class labels seen at fit time, ascending.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Bucket index for a super-parent value.
    fn bucket(&self, value: f64) -> usize {
        (value.max(0.0).floor() as usize).min(self.config.buckets - 1)
    }

    /// Pick the feature with the highest column total; lowest index wins
    /// ties.
    fn select_super_parent(x: &Matrix) -> usize {
        let mut best = 0;
        let mut best_total = x.col_sum(0);
        for col in 1..x.cols() {
            let total = x.col_sum(col);
            if total > best_total {
                best = col;
                best_total = total;
            }
        }
        best
    }

    /// Log-space score of every class for one feature row.
    fn score_row(&self, row: &[f64]) -> Vec<f64> {
        let sp = self.super_parent;
        let bucket = self.bucket(row[sp]);

        (0..self.classes.len())
            .map(|class| {
                let joint = &self.joint_log_cond[class][bucket];
                let mut score = self.log_prior[class] + row[sp] * self.sp_log_cond[class];
                for (feature, &value) in row.iter().enumerate() {
                    if feature != sp {
                        score += value * joint[feature];
                    }
                }
                score
            })
            .collect()
    }
}

impl<L: Label> Estimator<L> for Spode<L> {
    fn with_params(params: &ParamSet) -> Result<Self> {
        let mut config = SpodeConfig::default();
        for (name, value) in params {
            match name.as_str() {
                "alpha" => {
                    config.alpha = value.as_f64().ok_or_else(|| {
                        TextcatError::invalid_config("alpha must be numeric")
                    })?;
                }
                "super_parent" => {
                    config.super_parent = Some(value.as_usize().ok_or_else(|| {
                        TextcatError::invalid_config(
                            "super_parent must be a non-negative integer",
                        )
                    })?);
                }
                "buckets" => {
                    config.buckets = value.as_usize().ok_or_else(|| {
                        TextcatError::invalid_config(
                            "buckets must be a non-negative integer",
                        )
                    })?;
                }
                other => {
                    return Err(TextcatError::invalid_config(format!(
                        "unknown Spode parameter '{other}'"
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
        if x.cols() == 0 {
            return Err(TextcatError::shape_mismatch(
                "cannot fit SPODE on a matrix with zero columns",
            ));
        }
        let (classes, row_classes) = index_classes(y)?;

        let n_classes = classes.len();
        let n_features = x.cols();
        let buckets = self.config.buckets;
        let alpha = self.config.alpha;

        let sp = match self.config.super_parent {
            Some(sp) => {
                if sp >= n_features {
                    return Err(TextcatError::invalid_config(format!(
                        "super_parent index {sp} out of range for {n_features} features"
                    )));
                }
                sp
            }
            None => Self::select_super_parent(x),
        };
        self.super_parent = sp;

        // Per-class totals for the prior and the super-parent's own
        // conditional, plus joint counts per (class, bucket, feature).
        let mut row_counts = vec![0usize; n_classes];
        let mut class_totals = vec![0.0f64; n_classes];
        let mut sp_counts = vec![0.0f64; n_classes];
        let mut joint_counts = vec![vec![vec![0.0f64; n_features]; buckets]; n_classes];

        for (row_idx, &class) in row_classes.iter().enumerate() {
            let row = x.row(row_idx);
            row_counts[class] += 1;
            sp_counts[class] += row[sp];
            class_totals[class] += row.iter().sum::<f64>();

            let bucket = self.bucket(row[sp]);
            let counts = &mut joint_counts[class][bucket];
            for (count, &value) in counts.iter_mut().zip(row) {
                *count += value;
            }
        }

        let n_rows = y.len() as f64;
        self.log_prior = row_counts
            .iter()
            .map(|&count| (count as f64 / n_rows).ln())
            .collect();

        self.sp_log_cond = sp_counts
            .iter()
            .zip(&class_totals)
            .map(|(&count, &total)| {
                ((count + alpha) / (total + alpha * n_features as f64)).ln()
            })
            .collect();

        // Smoothing denominator is scaled by the bucket count, so a bucket
        // with zero observed mass still yields a proper distribution.
        self.joint_log_cond = joint_counts
            .into_iter()
            .map(|per_bucket| {
                per_bucket
                    .into_iter()
                    .map(|counts| {
                        let total: f64 = counts.iter().sum();
                        let denom = total + alpha * n_features as f64 * buckets as f64;
                        counts
                            .into_iter()
                            .map(|count| ((count + alpha) / denom).ln())
                            .collect()
                    })
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
                "Spode::predict called before fit",
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
