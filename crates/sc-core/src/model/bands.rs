//! Contingency-band aggregation.
//!
//! Because states are severity-ordered, each band is a prefix sum of
//! the stationary distribution. Boundaries as a function of spare
//! count:
//! - `healthy` covers the first `S+1` states: no unit currently failed.
//! - `within_spares` covers the first `3S+2` states: every failure so
//!   far is covered by the spare pool, no unfulfilled demand.
//! - `total` sums everything and must be 1; it is a self-check on the
//!   solve, not new information.
//!
//! No rounding happens here; presentation rounds at the boundary.

use serde::{Deserialize, Serialize};

use sc_common::{Error, Result};

/// Cumulative contingency probabilities for one spare level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandProbabilities {
    /// P(no failed-and-unreplaced unit).
    pub healthy: f64,
    /// P(demand fully covered by spares), includes `healthy`.
    pub within_spares: f64,
    /// Total probability mass; 1 within solver tolerance.
    pub total: f64,
}

/// First index past the "no unit down" band.
pub fn healthy_boundary(spares: u32) -> usize {
    spares as usize + 1
}

/// First index past the "covered by spares" band.
pub fn covered_boundary(spares: u32) -> usize {
    3 * spares as usize + 2
}

/// Aggregates a stationary distribution into contingency bands.
pub fn band_probabilities(stationary: &[f64], spares: u32) -> Result<BandProbabilities> {
    let expected = 3 * (spares as usize + 2);
    if stationary.len() != expected {
        return Err(Error::Construction(format!(
            "stationary vector has {} states, expected {expected} for {spares} spares",
            stationary.len()
        )));
    }

    let healthy: f64 = stationary[..healthy_boundary(spares)].iter().sum();
    let within_spares: f64 = stationary[..covered_boundary(spares)].iter().sum();
    let total: f64 = stationary.iter().sum();

    if (total - 1.0).abs() > 1e-6 {
        return Err(Error::SingularSystem(format!(
            "stationary mass {total} deviates from 1"
        )));
    }
    Ok(BandProbabilities {
        healthy,
        within_spares,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_generalize_the_fixed_cases() {
        assert_eq!(healthy_boundary(0), 1);
        assert_eq!(healthy_boundary(1), 2);
        assert_eq!(healthy_boundary(2), 3);
        assert_eq!(covered_boundary(1), 5);
        assert_eq!(covered_boundary(2), 8);
    }

    #[test]
    fn bands_are_prefix_sums() {
        // S=1: nine states with known mass.
        let pi = [0.4, 0.2, 0.1, 0.1, 0.05, 0.05, 0.04, 0.03, 0.03];
        let bands = band_probabilities(&pi, 1).unwrap();
        assert!((bands.healthy - 0.6).abs() < 1e-12);
        assert!((bands.within_spares - 0.85).abs() < 1e-12);
        assert!((bands.total - 1.0).abs() < 1e-12);
        assert!(bands.healthy <= bands.within_spares);
        assert!(bands.within_spares <= bands.total);
    }

    #[test]
    fn wrong_length_is_a_construction_defect() {
        let pi = [0.5, 0.5];
        assert!(matches!(
            band_probabilities(&pi, 1),
            Err(Error::Construction(_))
        ));
    }

    #[test]
    fn unnormalized_mass_is_rejected() {
        let pi = [0.5; 9];
        assert!(matches!(
            band_probabilities(&pi, 1),
            Err(Error::SingularSystem(_))
        ));
    }
}
