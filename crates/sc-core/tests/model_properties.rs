//! Property-based tests for the Markov model engine invariants.

use proptest::prelude::*;
use sc_core::model::{build_transition_matrix, evaluate, state_count};
use sc_core::ModelParameters;

/// Parameter ranges that keep every off-diagonal row sum below 1 for
/// spare counts up to 4 (worst case: sr + (S+1)*b + (n-1)*a).
fn valid_params() -> impl Strategy<Value = ModelParameters> {
    (
        2u32..=12,
        0.0005f64..0.005,
        0.01f64..0.2,
        0.01f64..0.12,
    )
        .prop_map(|(n, a, sr, b)| {
            ModelParameters::new(a, sr, b, n).expect("strategy yields valid parameters")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every row of the built matrix sums to 1 within 1e-9.
    #[test]
    fn rows_are_stochastic(params in valid_params(), spares in 0u32..=4) {
        let m = build_transition_matrix(&params, spares).unwrap();
        prop_assert_eq!(m.dim(), state_count(spares));
        for row in 0..m.dim() {
            let sum = m.row_sum(row);
            prop_assert!((sum - 1.0).abs() < 1e-9, "row {} sums to {}", row, sum);
        }
    }

    /// The stationary distribution is a valid probability vector.
    #[test]
    fn stationary_is_distribution(params in valid_params(), spares in 0u32..=3) {
        let outcome = evaluate(&params, spares).unwrap();
        for &v in &outcome.stationary {
            prop_assert!(v >= 0.0, "negative stationary entry {}", v);
        }
        let mass: f64 = outcome.stationary.iter().sum();
        prop_assert!((mass - 1.0).abs() < 1e-6, "mass {}", mass);
    }

    /// Band ordering: healthy <= within_spares <= total = 1.
    #[test]
    fn bands_are_ordered(params in valid_params(), spares in 0u32..=3) {
        let bands = evaluate(&params, spares).unwrap().bands;
        prop_assert!(bands.healthy <= bands.within_spares + 1e-12);
        prop_assert!(bands.within_spares <= bands.total + 1e-12);
        prop_assert!((bands.total - 1.0).abs() < 1e-6);
    }

    /// More spares never hurt: P(healthy) is non-decreasing in the
    /// spare count.
    #[test]
    fn healthy_probability_monotone_in_spares(params in valid_params()) {
        let mut previous = f64::NEG_INFINITY;
        for spares in 0..=2 {
            let bands = evaluate(&params, spares).unwrap().bands;
            prop_assert!(
                bands.healthy >= previous - 1e-9,
                "spares={} dropped healthy from {} to {}",
                spares, previous, bands.healthy
            );
            previous = bands.healthy;
        }
    }

    /// No hidden state: identical inputs give bit-identical outputs.
    #[test]
    fn pipeline_is_idempotent(params in valid_params(), spares in 0u32..=3) {
        let first = evaluate(&params, spares).unwrap();
        let second = evaluate(&params, spares).unwrap();
        prop_assert_eq!(first, second);
    }
}
