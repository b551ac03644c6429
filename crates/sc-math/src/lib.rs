//! Sparecast matrix and linear-system numerics.
//!
//! Small dense square matrices solved directly; no iterative methods.
//! Everything here is domain-free: callers own the meaning of rows and
//! columns.

pub mod linear;
pub mod matrix;
pub mod stationary;

pub use linear::solve_in_place;
pub use matrix::DenseMatrix;
pub use stationary::{stationary_distribution, ROW_SUM_TOL};

use thiserror::Error;

/// Errors from matrix construction and linear solves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("matrix is not square: {rows} rows, {cols} cols")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: matrix is {dim}x{dim}, vector has length {len}")]
    DimensionMismatch { dim: usize, len: usize },

    #[error("singular system: pivot {pivot:e} below threshold at column {col}")]
    Singular { col: usize, pivot: f64 },

    #[error("matrix is not row-stochastic: row {row} sums to {sum}")]
    NotRowStochastic { row: usize, sum: f64 },

    #[error("matrix has invalid entry {value} in row {row}")]
    InvalidEntry { row: usize, value: f64 },

    #[error("degenerate solution: {0}")]
    Degenerate(String),
}
