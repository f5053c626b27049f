//! Probabilistic classifiers and the estimator contract.
//!
//! The search components treat classifiers polymorphically: anything that
//! can be constructed from a set of named parameters and exposes
//! `fit`/`predict` can be tuned. That capability is the [`Estimator`]
//! trait; [`NaiveBayes`] and [`Spode`] implement it.

pub mod naive_bayes;
pub mod spode;

pub use naive_bayes::{NaiveBayes, NaiveBayesConfig};
pub use spode::{Spode, SpodeConfig};

use std::collections::BTreeMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// A single candidate hyperparameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// A floating-point value (e.g. a smoothing strength).
    Float(f64),
    /// An integer value (e.g. a feature index or bucket count).
    Int(i64),
    /// A free-form text value.
    Text(String),
}

impl ParamValue {
    /// Interpret the value as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Text(_) => None,
        }
    }

    /// Interpret the value as a non-negative index or count.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ParamValue::Int(v) if *v >= 0 => Some(*v as usize),
            _ => None,
        }
    }
}

/// A named assignment of hyperparameter values: one point of a grid.
///
/// `BTreeMap` keeps the parameter names in a stable order, so a `ParamSet`
/// formats and compares deterministically.
pub type ParamSet = BTreeMap<String, ParamValue>;

/// Bound for class label types.
///
/// Labels may be any hashable, totally ordered value; the ordering defines
/// the tie-break (lowest label wins). `Send + Sync` lets searches evaluate
/// folds in parallel.
pub trait Label: Clone + Eq + Hash + Ord + Send + Sync + std::fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + Send + Sync + std::fmt::Debug> Label for T {}

/// The capability contract between classifiers and the search components.
pub trait Estimator<L: Label>: Sized {
    /// Construct an estimator from named parameters, rejecting unknown
    /// names and invalid values eagerly.
    fn with_params(params: &ParamSet) -> Result<Self>;

    /// Fit the estimator on a feature matrix and parallel label sequence.
    fn fit(&mut self, x: &Matrix, y: &[L]) -> Result<()>;

    /// Predict one label per row of `x`.
    fn predict(&self, x: &Matrix) -> Result<Vec<L>>;
}

/// Sorted distinct classes plus the class index of every training row.
///
/// The sorted order is what makes tie-breaking resolve toward the lowest
/// label in every classifier.
pub(crate) fn index_classes<L: Label>(y: &[L]) -> Result<(Vec<L>, Vec<usize>)> {
    if y.is_empty() {
        return Err(TextcatError::shape_mismatch(
            "cannot fit on an empty training set",
        ));
    }

    let mut classes: Vec<L> = y.to_vec();
    classes.sort();
    classes.dedup();

    let index: std::collections::HashMap<&L, usize> =
        classes.iter().enumerate().map(|(i, c)| (c, i)).collect();
    let row_classes = y.iter().map(|label| index[label]).collect();

    Ok((classes, row_classes))
}

/// Check that a prediction matrix matches the fitted column count.
pub(crate) fn check_predict_shape(x: &Matrix, n_features: usize) -> Result<()> {
    if x.cols() != n_features {
        return Err(TextcatError::shape_mismatch(format!(
            "predict input has {} columns but the model was fitted with {}",
            x.cols(),
            n_features
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_conversions() {
        assert_eq!(ParamValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Int(3).as_usize(), Some(3));
        assert_eq!(ParamValue::Int(-1).as_usize(), None);
        assert_eq!(ParamValue::Text("x".to_string()).as_f64(), None);
    }

    #[test]
    fn test_index_classes_sorted() {
        let y = vec![2, 0, 1, 0, 2];
        let (classes, rows) = index_classes(&y).unwrap();
        assert_eq!(classes, vec![0, 1, 2]);
        assert_eq!(rows, vec![2, 0, 1, 0, 2]);
    }

    #[test]
    fn test_index_classes_empty() {
        let y: Vec<i64> = Vec::new();
        assert!(index_classes(&y).is_err());
    }
}
