//! Report shaping for the presentation boundary.
//!
//! This is the only place probabilities are rounded. Everything
//! upstream carries full precision so the rounding policy stays a
//! reporting concern, never a correctness one.

use serde::{Deserialize, Serialize};

use sc_common::Result;

use crate::model::{evaluate, SpareLevelOutcome};
use crate::params::{ModelInputs, ModelParameters};

/// Decimal digits reported for each probability.
const REPORT_DECIMALS: i32 = 3;

fn round_probability(value: f64) -> f64 {
    let scale = 10f64.powi(REPORT_DECIMALS);
    (value * scale).round() / scale
}

/// One reported row: contingency probabilities for a spare level,
/// rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpareLevelRecord {
    pub spares: u32,
    /// P(no failed-and-unreplaced unit), 3 decimals.
    pub healthy: f64,
    /// P(demand fully covered by spares), 3 decimals.
    pub within_spares: f64,
    /// Total mass self-check, 3 decimals (always 1.000).
    pub total: f64,
}

impl From<&SpareLevelOutcome> for SpareLevelRecord {
    fn from(outcome: &SpareLevelOutcome) -> Self {
        SpareLevelRecord {
            spares: outcome.spares,
            healthy: round_probability(outcome.bands.healthy),
            within_spares: round_probability(outcome.bands.within_spares),
            total: round_probability(outcome.bands.total),
        }
    }
}

/// A full evaluation report: the inputs echoed back plus one record per
/// requested spare level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub inputs: ModelInputs,
    pub parameters: ModelParameters,
    pub levels: Vec<SpareLevelRecord>,
}

impl Report {
    /// Runs the pipeline for each requested spare level.
    ///
    /// The legacy presentation requested levels 0, 1, 2; callers may
    /// request any supported set.
    pub fn compute(inputs: &ModelInputs, spare_levels: &[u32]) -> Result<Report> {
        let parameters = inputs.normalize()?;
        let mut levels = Vec::with_capacity(spare_levels.len());
        for &spares in spare_levels {
            let outcome = evaluate(&parameters, spares)?;
            levels.push(SpareLevelRecord::from(&outcome));
        }
        Ok(Report {
            inputs: inputs.clone(),
            parameters,
            levels,
        })
    }

    /// Aligned plain-text rendering for interactive use.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        out.push_str("spares  healthy  within_spares  total\n");
        for rec in &self.levels {
            out.push_str(&format!(
                "{:>6}  {:>7.3}  {:>13.3}  {:>5.3}\n",
                rec.spares, rec.healthy, rec.within_spares, rec.total
            ));
        }
        out
    }
}
