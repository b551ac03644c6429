//! The Markov model engine.
//!
//! `evaluate` is the whole pipeline for one spare level: build the
//! transition matrix, solve its stationary distribution, aggregate the
//! contingency bands. Pure function of its arguments; callers wanting
//! several spare levels call it once per level.

pub mod bands;
pub mod builder;

pub use bands::{band_probabilities, BandProbabilities};
pub use builder::{build_transition_matrix, state_count};

use serde::{Deserialize, Serialize};
use tracing::debug;

use sc_common::{Error, Result};
use sc_math::stationary_distribution;

use crate::params::ModelParameters;

/// Largest spare count accepted at the request boundary.
///
/// The builder itself handles any `S`; this bounds matrix dimensions
/// (3*(S+2) <= 198) against absurd requests.
pub const MAX_SPARES: u32 = 64;

/// Rejects spare counts beyond the supported bound.
///
/// Every entry point that turns a requested spare count into a matrix
/// goes through this check first.
pub fn check_spare_count(spares: u32) -> Result<()> {
    if spares > MAX_SPARES {
        return Err(Error::invalid_parameter(
            "spares",
            format!("spare count {spares} exceeds supported maximum {MAX_SPARES}"),
        ));
    }
    Ok(())
}

/// Full result for one spare level, unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpareLevelOutcome {
    /// Spare count this outcome was computed for.
    pub spares: u32,
    /// State space size, always `3 * (spares + 2)`.
    pub states: usize,
    /// Contingency band probabilities.
    pub bands: BandProbabilities,
    /// The stationary distribution itself, severity-ordered.
    pub stationary: Vec<f64>,
}

/// Runs the model for one spare level.
pub fn evaluate(params: &ModelParameters, spares: u32) -> Result<SpareLevelOutcome> {
    check_spare_count(spares)?;

    let matrix = build_transition_matrix(params, spares)?;
    debug!(
        spares,
        states = matrix.dim(),
        "transition matrix built"
    );

    let stationary = stationary_distribution(&matrix).map_err(|e| match e {
        sc_math::MathError::Singular { .. } => Error::SingularSystem(format!(
            "chain for spares={spares} is reducible: {e}"
        )),
        other => Error::SingularSystem(other.to_string()),
    })?;

    let bands = band_probabilities(&stationary, spares)?;
    debug!(
        spares,
        healthy = bands.healthy,
        within_spares = bands.within_spares,
        "bands aggregated"
    );

    Ok(SpareLevelOutcome {
        spares,
        states: stationary.len(),
        bands,
        stationary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ModelParameters {
        ModelParameters::new(0.004, 0.15, 0.09, 8).unwrap()
    }

    #[test]
    fn evaluate_rejects_oversized_spare_count() {
        let err = evaluate(&params(), MAX_SPARES + 1).unwrap_err();
        assert!(err.is_caller_error());
    }

    #[test]
    fn spare_count_guard_accepts_the_boundary() {
        assert!(check_spare_count(MAX_SPARES).is_ok());
        assert!(check_spare_count(u32::MAX).unwrap_err().is_caller_error());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let p = params();
        let first = evaluate(&p, 2).unwrap();
        let second = evaluate(&p, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_reports_state_count_invariant() {
        let p = params();
        for spares in 0..=6 {
            let outcome = evaluate(&p, spares).unwrap();
            assert_eq!(outcome.states, 3 * (spares as usize + 2));
            assert_eq!(outcome.stationary.len(), outcome.states);
        }
    }
}
