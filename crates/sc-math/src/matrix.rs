//! Dense square matrix value type.
//!
//! Row-major storage in a flat `Vec<f64>`. Sized for Markov chains in
//! the tens of states; no sparse representation is warranted.

use serde::{Deserialize, Serialize};

use crate::MathError;

/// A dense square matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Creates a `dim x dim` matrix of zeros.
    pub fn zeros(dim: usize) -> Self {
        DenseMatrix {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Creates a matrix from row-major data. Fails if `data` is not a
    /// perfect square's worth of entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MathError> {
        let dim = rows.len();
        for row in rows {
            if row.len() != dim {
                return Err(MathError::NotSquare {
                    rows: dim,
                    cols: row.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(DenseMatrix { dim, data })
    }

    /// Matrix dimension (number of rows = number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    /// Sets the entry at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dim)
    }

    /// Sum of the entries in one row.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.row(row).iter().sum()
    }

    /// Checks that every row is non-negative and sums to 1 within `tol`.
    ///
    /// Returns the first offending row on failure: `InvalidEntry` for a
    /// negative or non-finite entry, `NotRowStochastic` for a bad sum.
    pub fn check_row_stochastic(&self, tol: f64) -> Result<(), MathError> {
        for row in 0..self.dim {
            let mut sum = 0.0;
            for &v in self.row(row) {
                if !v.is_finite() || v < -tol {
                    return Err(MathError::InvalidEntry { row, value: v });
                }
                sum += v;
            }
            if (sum - 1.0).abs() > tol {
                return Err(MathError::NotRowStochastic { row, sum });
            }
        }
        Ok(())
    }

    /// Transpose into a new matrix.
    pub fn transposed(&self) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(self.dim);
        for r in 0..self.dim {
            for c in 0..self.dim {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Left-multiplies a row vector: `v * M`.
    pub fn left_mul(&self, v: &[f64]) -> Result<Vec<f64>, MathError> {
        if v.len() != self.dim {
            return Err(MathError::DimensionMismatch {
                dim: self.dim,
                len: v.len(),
            });
        }
        let mut out = vec![0.0; self.dim];
        for (r, &vr) in v.iter().enumerate() {
            if vr == 0.0 {
                continue;
            }
            for c in 0..self.dim {
                out[c] += vr * self.get(r, c);
            }
        }
        Ok(out)
    }
}
