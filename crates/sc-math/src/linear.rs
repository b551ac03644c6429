//! Direct linear solve by Gaussian elimination with partial pivoting.
//!
//! Deterministic and exact up to floating roundoff, which is what the
//! stationary solve needs: reported probabilities must be reproducible
//! bit-for-bit across runs. Iterative methods trade that away for
//! scalability these matrix sizes never need.

use crate::{DenseMatrix, MathError};

/// Pivot magnitudes below this are treated as structural zeros.
const PIVOT_EPS: f64 = 1e-12;

/// Solves `A x = b` in place, consuming the matrix and right-hand side.
///
/// Partial pivoting by largest absolute column entry. Returns
/// `MathError::Singular` when no usable pivot exists, which for the
/// stationary systems built on top of this means the chain is
/// reducible.
pub fn solve_in_place(a: &mut DenseMatrix, b: &mut [f64]) -> Result<Vec<f64>, MathError> {
    let dim = a.dim();
    if b.len() != dim {
        return Err(MathError::DimensionMismatch { dim, len: b.len() });
    }

    // Forward elimination.
    for col in 0..dim {
        let mut pivot_row = col;
        let mut pivot_mag = a.get(col, col).abs();
        for r in (col + 1)..dim {
            let mag = a.get(r, col).abs();
            if mag > pivot_mag {
                pivot_row = r;
                pivot_mag = mag;
            }
        }
        if pivot_mag < PIVOT_EPS {
            return Err(MathError::Singular {
                col,
                pivot: pivot_mag,
            });
        }
        if pivot_row != col {
            for c in 0..dim {
                let tmp = a.get(col, c);
                a.set(col, c, a.get(pivot_row, c));
                a.set(pivot_row, c, tmp);
            }
            b.swap(col, pivot_row);
        }
        let pivot = a.get(col, col);
        for r in (col + 1)..dim {
            let factor = a.get(r, col) / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..dim {
                a.set(r, c, a.get(r, c) - factor * a.get(col, c));
            }
            b[r] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = vec![0.0; dim];
    for r in (0..dim).rev() {
        let mut acc = b[r];
        for c in (r + 1)..dim {
            acc -= a.get(r, c) * x[c];
        }
        x[r] = acc / a.get(r, r);
    }
    Ok(x)
}
