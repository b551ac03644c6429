//! Stationary distribution of a discrete-time Markov chain.
//!
//! Solves `pi P = pi` with `sum(pi) = 1` by constraint substitution:
//! form `(P^T - I) pi = 0`, replace the first (redundant) equation with
//! the normalization constraint, and solve the resulting square system
//! directly. For an irreducible chain the substituted system is
//! non-singular and the solution is the unique stationary vector.

use crate::linear::solve_in_place;
use crate::{DenseMatrix, MathError};

/// Tolerance for row-stochasticity of the input matrix.
pub const ROW_SUM_TOL: f64 = 1e-9;

/// Negative entries closer to zero than this are treated as roundoff.
const NEG_CLAMP_TOL: f64 = 1e-9;

/// Tolerance on the total probability mass of the solution.
const MASS_TOL: f64 = 1e-6;

/// Computes the stationary distribution of row-stochastic `p`.
///
/// Fails with `Singular` when the chain is reducible (the substituted
/// system has no unique solution) and with `Degenerate` when the solve
/// succeeds numerically but the result is not a probability vector.
/// Both indicate a defect in the chain handed in, not a transient
/// condition.
pub fn stationary_distribution(p: &DenseMatrix) -> Result<Vec<f64>, MathError> {
    p.check_row_stochastic(ROW_SUM_TOL)?;
    let dim = p.dim();

    // A = P^T - I, first equation replaced by sum(pi) = 1.
    let mut a = DenseMatrix::zeros(dim);
    for c in 0..dim {
        a.set(0, c, 1.0);
    }
    for r in 1..dim {
        for c in 0..dim {
            let mut v = p.get(c, r);
            if r == c {
                v -= 1.0;
            }
            a.set(r, c, v);
        }
    }
    let mut rhs = vec![0.0; dim];
    rhs[0] = 1.0;

    let mut pi = solve_in_place(&mut a, &mut rhs)?;

    for v in pi.iter_mut() {
        if !v.is_finite() {
            return Err(MathError::Degenerate(format!(
                "non-finite stationary entry {v}"
            )));
        }
        if *v < 0.0 {
            if *v < -NEG_CLAMP_TOL {
                return Err(MathError::Degenerate(format!(
                    "negative stationary entry {v:e}"
                )));
            }
            *v = 0.0;
        }
    }
    let mass: f64 = pi.iter().sum();
    if (mass - 1.0).abs() > MASS_TOL {
        return Err(MathError::Degenerate(format!(
            "stationary mass {mass} deviates from 1"
        )));
    }
    Ok(pi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_state_chain_has_closed_form_solution() {
        // P = [[1-p, p], [q, 1-q]] has pi = (q, p) / (p + q).
        let (p, q) = (0.3, 0.1);
        let m = DenseMatrix::from_rows(&[vec![1.0 - p, p], vec![q, 1.0 - q]]).unwrap();
        let pi = stationary_distribution(&m).unwrap();
        assert!((pi[0] - q / (p + q)).abs() < 1e-12);
        assert!((pi[1] - p / (p + q)).abs() < 1e-12);
    }

    #[test]
    fn identity_chain_is_reducible() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        match stationary_distribution(&m) {
            Err(MathError::Singular { .. }) => {}
            other => panic!("expected Singular for reducible chain, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_stochastic_input() {
        let m = DenseMatrix::from_rows(&[vec![0.9, 0.2], vec![0.1, 0.9]]).unwrap();
        assert!(matches!(
            stationary_distribution(&m),
            Err(MathError::NotRowStochastic { .. })
        ));
    }

    #[test]
    fn stationary_vector_is_fixed_point() {
        let m = DenseMatrix::from_rows(&[
            vec![0.80, 0.15, 0.05],
            vec![0.10, 0.80, 0.10],
            vec![0.25, 0.25, 0.50],
        ])
        .unwrap();
        let pi = stationary_distribution(&m).unwrap();
        let next = m.left_mul(&pi).unwrap();
        for (a, b) in pi.iter().zip(next.iter()) {
            assert!((a - b).abs() < 1e-12, "pi P deviates: {a} vs {b}");
        }
        let mass: f64 = pi.iter().sum();
        assert!((mass - 1.0).abs() < 1e-12);
    }
}
