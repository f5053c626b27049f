//! Cross-validated hyperparameter search.
//!
//! Both search strategies share the same machinery: a [`ParamGrid`]
//! enumerated in a fixed, reproducible order, contiguous k-fold splitting,
//! and accuracy scoring. Fold and candidate evaluations run in parallel,
//! but every reduction (mean over folds, argmax over candidates) happens in
//! enumeration order, so results never depend on task scheduling.

pub mod grid;
pub mod halving;

pub use grid::GridSearchCV;
pub use halving::HalvingGridSearchCV;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify::{Estimator, Label, ParamSet, ParamValue};
use crate::error::{Result, TextcatError};
use crate::matrix::Matrix;

/// An ordered hyperparameter grid.
///
/// The search space is the full Cartesian product of the candidate value
/// lists, enumerated with the first-added parameter varying slowest.
///
/// # Examples
///
/// ```
/// use textcat::classify::ParamValue;
/// use textcat::search::ParamGrid;
///
/// let grid = ParamGrid::new()
///     .add("alpha", vec![ParamValue::Float(0.1), ParamValue::Float(0.3)]);
/// assert_eq!(grid.candidates().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamGrid {
    entries: Vec<(String, Vec<ParamValue>)>,
}

impl ParamGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        ParamGrid {
            entries: Vec::new(),
        }
    }

    /// Add a named hyperparameter with its ordered candidate values.
    pub fn add<S: Into<String>>(mut self, name: S, values: Vec<ParamValue>) -> Self {
        self.entries.push((name.into(), values));
        self
    }

    /// A grid is degenerate if it has no parameters or any parameter has
    /// no candidate values.
    pub fn is_degenerate(&self) -> bool {
        self.entries.is_empty() || self.entries.iter().any(|(_, values)| values.is_empty())
    }

    /// Enumerate the full Cartesian product in a fixed order: the first
    /// parameter varies slowest, the last varies fastest.
    pub fn candidates(&self) -> Vec<ParamSet> {
        let mut out = vec![ParamSet::new()];
        for (name, values) in &self.entries {
            let mut next = Vec::with_capacity(out.len() * values.len());
            for base in &out {
                for value in values {
                    let mut candidate = base.clone();
                    candidate.insert(name.clone(), value.clone());
                    next.push(candidate);
                }
            }
            out = next;
        }
        out
    }
}

/// One search outcome: the winning parameter set and its mean
/// cross-validation score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestResult {
    /// The winning parameter assignment.
    pub params: ParamSet,
    /// Its mean cross-validation accuracy.
    pub score: f64,
}

/// Fraction of predictions matching the true labels.
pub fn accuracy<L: PartialEq>(truth: &[L], predicted: &[L]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(a, b)| a == b)
        .count();
    correct as f64 / truth.len() as f64
}

/// Partition `0..n_rows` into `cv` contiguous folds whose sizes differ by
/// at most one. Every row lands in exactly one fold.
pub(crate) fn fold_indices(n_rows: usize, cv: usize) -> Vec<Vec<usize>> {
    let base = n_rows / cv;
    let extra = n_rows % cv;

    let mut folds = Vec::with_capacity(cv);
    let mut start = 0;
    for fold in 0..cv {
        let size = base + usize::from(fold < extra);
        folds.push((start..start + size).collect());
        start += size;
    }
    folds
}

/// Mean accuracy of one candidate over `cv` folds: for each fold, fit on
/// the remaining rows and score on the held-out fold.
///
/// Folds are evaluated in parallel; the mean is taken in fold order.
pub(crate) fn cross_validate<E, L>(
    params: &ParamSet,
    x: &Matrix,
    y: &[L],
    cv: usize,
) -> Result<f64>
where
    E: Estimator<L>,
    L: Label,
{
    let folds = fold_indices(x.rows(), cv);

    let scores: Vec<f64> = folds
        .par_iter()
        .map(|held_out| -> Result<f64> {
            let mut in_fold = vec![false; x.rows()];
            for &idx in held_out {
                in_fold[idx] = true;
            }
            let train: Vec<usize> = (0..x.rows()).filter(|&i| !in_fold[i]).collect();

            let x_train = x.select_rows(&train);
            let y_train: Vec<L> = train.iter().map(|&i| y[i].clone()).collect();
            let x_held = x.select_rows(held_out);
            let y_held: Vec<L> = held_out.iter().map(|&i| y[i].clone()).collect();

            let mut model = E::with_params(params)?;
            model.fit(&x_train, &y_train)?;
            let predicted = model.predict(&x_held)?;
            Ok(accuracy(&y_held, &predicted))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Shared construction-time validation for both search strategies.
pub(crate) fn validate_search(grid: &ParamGrid, cv: usize) -> Result<()> {
    if grid.is_degenerate() {
        return Err(TextcatError::invalid_config(
            "parameter grid is empty",
        ));
    }
    if cv < 2 {
        return Err(TextcatError::invalid_config(format!(
            "cv must be at least 2, got {cv}"
        )));
    }
    Ok(())
}

/// Shared fit-time validation: the fold count must not exceed the number
/// of training rows.
pub(crate) fn validate_fit<L>(x: &Matrix, y: &[L], cv: usize) -> Result<()> {
    if x.rows() != y.len() {
        return Err(TextcatError::shape_mismatch(format!(
            "matrix has {} rows but {} labels were supplied",
            x.rows(),
            y.len()
        )));
    }
    if cv > x.rows() {
        return Err(TextcatError::invalid_config(format!(
            "cv ({}) exceeds the number of training rows ({})",
            cv,
            x.rows()
        )));
    }
    Ok(())
}
