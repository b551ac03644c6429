//! Duration units and annualized-rate normalization.
//!
//! Lead time and installation time arrive in mixed units; the model
//! wants per-year rates. `annualized_rate` is the only conversion:
//! `rate = 1 / (value * years_per_unit)`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Units a time-to-event quantity may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Years,
    Months,
    Weeks,
    Days,
}

impl DurationUnit {
    /// Length of one unit in years.
    pub fn years_per_unit(self) -> f64 {
        match self {
            DurationUnit::Years => 1.0,
            DurationUnit::Months => 1.0 / 12.0,
            DurationUnit::Weeks => 1.0 / 52.0,
            DurationUnit::Days => 1.0 / 365.0,
        }
    }

    /// Lenient parser matching the legacy form spellings.
    ///
    /// Accepts `Year(s)`, `year`, `YEARS`, etc. Any unrecognized string
    /// maps to `Days` - the fallback the legacy input form shipped
    /// with, preserved here for callers that bypass the strict CLI
    /// surface. The clap `ValueEnum` surface rejects unknown units
    /// before this branch is reachable.
    pub fn parse_lossy(s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .trim_end_matches("(s)")
            .trim_end_matches('s');
        match stem {
            "year" => DurationUnit::Years,
            "month" => DurationUnit::Months,
            "week" => DurationUnit::Weeks,
            _ => DurationUnit::Days,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DurationUnit::Years => "years",
            DurationUnit::Months => "months",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Days => "days",
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Converts a time-to-event value into a per-year rate.
///
/// `value <= 0` is a caller contract violation; the validating input
/// layer rejects it with `InvalidParameter` before this is called.
pub fn annualized_rate(value: f64, unit: DurationUnit) -> f64 {
    1.0 / (value * unit.years_per_unit())
}
