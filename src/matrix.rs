//! Dense row-major matrix used as the document-term representation.
//!
//! Rows are documents, columns are vocabulary entries. Vectorizers produce
//! these matrices and classifiers consume them; the search components slice
//! them by row for cross-validation folds and halving-search prefixes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextcatError};

/// A dense row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix of zeros with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a matrix from a list of equally sized rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(TextcatError::shape_mismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        let n_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get a single cell.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Set a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over all rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Copy the listed rows into a new matrix, preserving the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        let mut out = Matrix::zeros(indices.len(), self.cols);
        for (i, &idx) in indices.iter().enumerate() {
            let src = self.row(idx);
            let start = i * self.cols;
            out.data[start..start + self.cols].copy_from_slice(src);
        }
        out
    }

    /// Copy the first `n` rows into a new matrix.
    pub fn prefix_rows(&self, n: usize) -> Matrix {
        let n = n.min(self.rows);
        Matrix {
            data: self.data[..n * self.cols].to_vec(),
            rows: n,
            cols: self.cols,
        }
    }

    /// Sum of every value in one column.
    pub fn col_sum(&self, col: usize) -> f64 {
        self.iter_rows().map(|r| r[col]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(crate::error::TextcatError::ShapeMismatch(_))));
    }

    #[test]
    fn test_select_and_prefix() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 0.0],
            vec![4.0, 0.0],
        ])
        .unwrap();

        let picked = m.select_rows(&[3, 1]);
        assert_eq!(picked.rows(), 2);
        assert_eq!(picked.get(0, 0), 4.0);
        assert_eq!(picked.get(1, 0), 2.0);

        let prefix = m.prefix_rows(3);
        assert_eq!(prefix.rows(), 3);
        assert_eq!(prefix.get(2, 0), 3.0);

        // Prefix larger than the matrix is clamped
        assert_eq!(m.prefix_rows(10).rows(), 4);
    }

    #[test]
    fn test_col_sum() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.col_sum(0), 4.0);
        assert_eq!(m.col_sum(1), 6.0);
    }

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert_eq!(m.iter_rows().count(), 0);
    }
}
