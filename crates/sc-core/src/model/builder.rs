//! Generalized transition-matrix construction.
//!
//! One parametrized builder covers every spare count; there are no
//! per-S matrix literals. The state space decomposes into three
//! failure-count blocks, ordered by severity so that contingency bands
//! are prefix sums:
//!
//! - block A, `S+1` states: zero units down. Sub-state `j` counts
//!   outstanding procurement orders (consumed spares being
//!   replenished).
//! - block B, `S+2` states: one unit down, a spare installing where one
//!   is on hand.
//! - block C, `S+3` states: two units down, the model's degradation
//!   cap; no further failure transitions exist.
//!
//! Transitions, as per-year rates embedded at unit time step:
//! - failure: `n*a` from A (all units exposed), `(n-1)*a` from B, none
//!   from C; a failure moves one block up and opens one more
//!   procurement order.
//! - installation completion: `sr` moves one block down at equal order
//!   count, where a healthy counterpart state exists.
//! - procurement completion: `j*b` closes one of `j` open orders,
//!   staying within the block.
//!
//! The diagonal absorbs the remainder so each row sums to exactly 1.
//! That embedding requires every off-diagonal row sum to stay below 1,
//! which holds for per-year rates in the ranges this model is meant for
//! (failure rates well under one per unit-year, lead and installation
//! times of weeks to years). Violations surface as `Construction`
//! errors rather than negative pseudo-probabilities.

use sc_common::{Error, Result};
use sc_math::{DenseMatrix, ROW_SUM_TOL};

use crate::params::ModelParameters;

/// State space size for a given spare count.
pub fn state_count(spares: u32) -> usize {
    3 * (spares as usize + 2)
}

/// Builds the one-step transition probability matrix for `spares`.
///
/// The output is verified row-stochastic within `1e-9` before being
/// returned; any deviation is a formula defect and fails loudly.
pub fn build_transition_matrix(
    params: &ModelParameters,
    spares: u32,
) -> Result<DenseMatrix> {
    let s = spares as usize;
    let dim = state_count(spares);
    let a = params.failure_rate;
    let sr = params.installation_rate;
    let b = params.replacement_rate;
    let n = f64::from(params.unit_count);

    // Block base offsets; sizes S+1, S+2, S+3.
    let block_a = 0;
    let block_b = s + 1;
    let block_c = 2 * s + 3;

    let mut m = DenseMatrix::zeros(dim);

    // Block A: zero units down, j outstanding orders.
    for j in 0..=s {
        let row = block_a + j;
        if j > 0 {
            m.set(row, block_a + j - 1, j as f64 * b);
        }
        m.set(row, block_b + j + 1, n * a);
    }

    // Block B: one unit down. No healthy counterpart exists at
    // j = S+1 (every spare consumed plus the failed unit's order), so
    // installation cannot complete there.
    for j in 0..=s + 1 {
        let row = block_b + j;
        if j <= s {
            m.set(row, block_a + j, sr);
        }
        if j > 0 {
            m.set(row, block_b + j - 1, j as f64 * b);
        }
        m.set(row, block_c + j + 1, (n - 1.0) * a);
    }

    // Block C: two units down, failure transitions capped.
    for j in 0..=s + 2 {
        let row = block_c + j;
        if j <= s + 1 {
            m.set(row, block_b + j, sr);
        }
        if j > 0 {
            m.set(row, block_c + j - 1, j as f64 * b);
        }
    }

    // Diagonal completes each row to 1; an off-diagonal sum above 1
    // means the unit-time-step embedding precondition is violated.
    for row in 0..dim {
        let off = m.row_sum(row);
        if off > 1.0 + ROW_SUM_TOL {
            return Err(Error::Construction(format!(
                "row {row} off-diagonal rate sum {off} exceeds 1 \
                 (rates too large for unit time step)"
            )));
        }
        m.set(row, row, 1.0 - off);
    }

    m.check_row_stochastic(ROW_SUM_TOL)
        .map_err(|e| Error::Construction(e.to_string()))?;
    Ok(m)
}
