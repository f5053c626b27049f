//! Successive-halving grid search.
//!
//! Trades exhaustiveness for speed: every candidate starts on a small
//! prefix of the training data; each round eliminates the lower-scoring
//! half of the field and doubles the data given to the survivors, until one
//! candidate remains or the full training set is reached. The subset given
//! to a surviving candidate is monotonically non-decreasing across rounds.
//!
//! Elimination keeps the candidates scoring at or above the round's
//! median, in enumeration order, capped at half the field rounded up. The
//! cap breaks fully tied rounds, so at least one candidate survives every
//! round and a completed `fit` always names a winner.

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::classify::{Estimator, Label, ParamSet};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::search::{BestResult, ParamGrid, cross_validate, validate_fit, validate_search};

/// Successive-halving grid search with k-fold cross-validation.
///
/// Same external contract as [`crate::search::GridSearchCV`]:
/// `best_result()` is `None` until `fit` completes, and the winner is
/// always one of the originally enumerated grid candidates.
#[derive(Debug)]
pub struct HalvingGridSearchCV<E, L>
where
    E: Estimator<L>,
    L: Label,
{
    grid: ParamGrid,
    cv: usize,
    best: Option<BestResult>,
    fitted: bool,
    _estimator: PhantomData<fn() -> (E, L)>,
}

impl<E, L> HalvingGridSearchCV<E, L>
where
    E: Estimator<L>,
    L: Label,
{
    /// Create a new search over `grid` with `cv` folds.
    ///
    /// Fails eagerly on an empty grid or `cv < 2`.
    pub fn new(grid: ParamGrid, cv: usize) -> Result<Self> {
        validate_search(&grid, cv)?;
        Ok(HalvingGridSearchCV {
            grid,
            cv,
            best: None,
            fitted: false,
            _estimator: PhantomData,
        })
    }

    /// Run the halving schedule and retain the winning candidate.
    pub fn fit(&mut self, x: &Matrix, y: &[L]) -> Result<()> {
        validate_fit(x, y, self.cv)?;

        let mut survivors = self.grid.candidates();
        let n_rows = x.rows();

        // Size the initial prefix so that doubling it once per halving
        // round lands on the full set.
        let rounds = survivors.len().next_power_of_two().trailing_zeros();
        let mut subset = (n_rows >> rounds).max(self.cv);

        while survivors.len() > 1 && subset < n_rows {
            let x_sub = x.prefix_rows(subset);
            let y_sub = &y[..subset];
            let scores = self.score_candidates(&survivors, &x_sub, y_sub)?;

            // Keep everything at or above the round median, capped at half
            // the field rounded up. The cap is what shrinks a fully tied
            // round, so the field never empties.
            let median = median(&scores);
            let cap = survivors.len().div_ceil(2);
            let kept: Vec<ParamSet> = survivors
                .iter()
                .zip(&scores)
                .filter(|&(_, &score)| score >= median)
                .map(|(candidate, _)| candidate.clone())
                .take(cap)
                .collect();

            survivors = kept;
            subset = (subset * 2).min(n_rows);
        }

        // Final pass on the full training set decides among the
        // survivors; the first maximum in enumeration order wins.
        let scores = self.score_candidates(&survivors, x, y)?;
        let mut best_idx = 0;
        for (idx, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best_idx] {
                best_idx = idx;
            }
        }
        self.best = Some(BestResult {
            params: survivors[best_idx].clone(),
            score: scores[best_idx],
        });
        self.fitted = true;

        Ok(())
    }

    /// Cross-validate every candidate on the given data, in parallel, with
    /// scores returned in candidate order.
    fn score_candidates(
        &self,
        candidates: &[ParamSet],
        x: &Matrix,
        y: &[L],
    ) -> Result<Vec<f64>> {
        candidates
            .par_iter()
            .map(|candidate| cross_validate::<E, L>(candidate, x, y, self.cv))
            .collect()
    }

    /// The winning parameter set; `None` before `fit`.
    pub fn best_params(&self) -> Option<&ParamSet> {
        self.best.as_ref().map(|b| &b.params)
    }

    /// The winning mean cross-validation score; `None` before `fit`.
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.score)
    }

    /// The full search outcome; `None` before `fit`.
    pub fn best_result(&self) -> Option<&BestResult> {
        self.best.as_ref()
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Median of a score list; the mean of the two middle values for an even
/// count.
fn median(scores: &[f64]) -> f64 {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
