//! Exhaustive cross-validated grid search.

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::classify::{Estimator, Label, ParamSet};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::search::{BestResult, ParamGrid, cross_validate, validate_fit, validate_search};

/// Exhaustive grid search with k-fold cross-validation.
///
/// Enumerates the full Cartesian product of the grid in a fixed order and
/// scores every candidate by mean fold accuracy. The first candidate (in
/// enumeration order) attaining the maximum mean score wins; search order
/// is part of the contract, not an implementation detail.
///
/// # Examples
///
/// ```
/// use textcat::classify::{NaiveBayes, ParamValue};
/// use textcat::matrix::Matrix;
/// use textcat::search::{GridSearchCV, ParamGrid};
///
/// let x = Matrix::from_rows(vec![
///     vec![2.0, 0.0],
///     vec![0.0, 2.0],
///     vec![3.0, 0.0],
///     vec![0.0, 3.0],
/// ]).unwrap();
/// let y = vec![1, 0, 1, 0];
///
/// let grid = ParamGrid::new()
///     .add("alpha", vec![ParamValue::Float(0.3), ParamValue::Float(0.5)]);
/// let mut search: GridSearchCV<NaiveBayes<i64>, i64> = GridSearchCV::new(grid, 2).unwrap();
/// search.fit(&x, &y).unwrap();
/// assert!(search.best_params().is_some());
/// ```
#[derive(Debug)]
pub struct GridSearchCV<E, L>
where
    E: Estimator<L>,
    L: Label,
{
    grid: ParamGrid,
    cv: usize,
    best: Option<BestResult>,
    _estimator: PhantomData<fn() -> (E, L)>,
}

impl<E, L> GridSearchCV<E, L>
where
    E: Estimator<L>,
    L: Label,
{
    /// Create a new search over `grid` with `cv` folds.
    ///
    /// Fails eagerly on an empty grid or `cv < 2`.
    pub fn new(grid: ParamGrid, cv: usize) -> Result<Self> {
        validate_search(&grid, cv)?;
        Ok(GridSearchCV {
            grid,
            cv,
            best: None,
            _estimator: PhantomData,
        })
    }

    /// Score every candidate by cross-validation and retain the best one.
    ///
    /// Fails if `cv` exceeds the number of training rows.
    pub fn fit(&mut self, x: &Matrix, y: &[L]) -> Result<()> {
        validate_fit(x, y, self.cv)?;

        let candidates = self.grid.candidates();
        let scores: Vec<f64> = candidates
            .par_iter()
            .map(|candidate| cross_validate::<E, L>(candidate, x, y, self.cv))
            .collect::<Result<Vec<f64>>>()?;

        // Sequential scan with strict '>' keeps the first candidate on
        // ties, independent of evaluation scheduling.
        let mut best_idx = 0;
        for (idx, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best_idx] {
                best_idx = idx;
            }
        }

        self.best = Some(BestResult {
            params: candidates[best_idx].clone(),
            score: scores[best_idx],
        });

        Ok(())
    }

    /// The winning parameter set, once fitted.
    pub fn best_params(&self) -> Option<&ParamSet> {
        self.best.as_ref().map(|b| &b.params)
    }

    /// The winning mean cross-validation score, once fitted.
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.score)
    }

    /// The full search outcome, once fitted.
    pub fn best_result(&self) -> Option<&BestResult> {
        self.best.as_ref()
    }
}
