//! Model input validation and normalized parameters.
//!
//! `ModelInputs` is what a caller (CLI, form, test) supplies verbatim;
//! `ModelParameters` is the validated, unit-normalized value the engine
//! consumes. Validation happens exactly once, in `normalize`; the
//! engine trusts its invariants afterwards.

use serde::{Deserialize, Serialize};

use sc_common::{Error, Result};

use crate::duration::{annualized_rate, DurationUnit};

/// Raw, unvalidated inputs as collected from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    /// Number of installed units in the fleet.
    pub unit_count: u32,
    /// Per-unit failures per year.
    pub failure_rate: f64,
    /// Spare-procurement lead time, in `lead_unit`s.
    pub lead_time: f64,
    pub lead_unit: DurationUnit,
    /// Spare installation time, in `install_unit`s.
    pub installation_time: f64,
    pub install_unit: DurationUnit,
}

impl ModelInputs {
    /// Validates the raw inputs and normalizes times into per-year
    /// rates.
    ///
    /// Mirrors the legacy form validators: `unit_count >= 2` (a single
    /// unit cannot exhibit the redundancy states the model assumes),
    /// all values strictly positive and finite.
    pub fn normalize(&self) -> Result<ModelParameters> {
        if self.unit_count < 2 {
            return Err(Error::invalid_parameter(
                "unit_count",
                format!("must be at least 2, got {}", self.unit_count),
            ));
        }
        check_positive("failure_rate", self.failure_rate)?;
        check_positive("lead_time", self.lead_time)?;
        check_positive("installation_time", self.installation_time)?;

        Ok(ModelParameters {
            failure_rate: self.failure_rate,
            installation_rate: annualized_rate(self.installation_time, self.install_unit),
            replacement_rate: annualized_rate(self.lead_time, self.lead_unit),
            unit_count: self.unit_count,
        })
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_parameter(
            field,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Validated, normalized model parameters. All rates are per-year.
///
/// Immutable once constructed; the engine never mutates or caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Per-unit failure rate `a`.
    pub failure_rate: f64,
    /// Installation completion rate `sr` (inverse installation time).
    pub installation_rate: f64,
    /// Procurement completion rate `b` (inverse lead time).
    pub replacement_rate: f64,
    /// Installed unit count `n`, at least 2.
    pub unit_count: u32,
}

impl ModelParameters {
    /// Builds parameters from already-normalized rates, applying the
    /// same validation as `ModelInputs::normalize`.
    pub fn new(
        failure_rate: f64,
        installation_rate: f64,
        replacement_rate: f64,
        unit_count: u32,
    ) -> Result<Self> {
        if unit_count < 2 {
            return Err(Error::invalid_parameter(
                "unit_count",
                format!("must be at least 2, got {unit_count}"),
            ));
        }
        check_positive("failure_rate", failure_rate)?;
        check_positive("installation_rate", installation_rate)?;
        check_positive("replacement_rate", replacement_rate)?;
        Ok(ModelParameters {
            failure_rate,
            installation_rate,
            replacement_rate,
            unit_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ModelInputs {
        ModelInputs {
            unit_count: 8,
            failure_rate: 0.004,
            lead_time: 2.0,
            lead_unit: DurationUnit::Years,
            installation_time: 3.0,
            install_unit: DurationUnit::Weeks,
        }
    }

    #[test]
    fn normalize_converts_times_to_rates() {
        let p = inputs().normalize().unwrap();
        assert_eq!(p.unit_count, 8);
        assert_eq!(p.failure_rate, 0.004);
        assert!((p.replacement_rate - 0.5).abs() < 1e-15);
        assert!((p.installation_rate - 52.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_unit_fleet_is_rejected() {
        let mut raw = inputs();
        raw.unit_count = 1;
        let err = raw.normalize().unwrap_err();
        assert!(err.is_caller_error(), "expected parameter error: {err}");
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for (field, mutate) in [
            ("failure_rate", Box::new(|i: &mut ModelInputs| i.failure_rate = 0.0) as Box<dyn Fn(&mut ModelInputs)>),
            ("lead_time", Box::new(|i: &mut ModelInputs| i.lead_time = -1.0)),
            ("installation_time", Box::new(|i: &mut ModelInputs| i.installation_time = f64::NAN)),
        ] {
            let mut raw = inputs();
            mutate(&mut raw);
            let err = raw.normalize().unwrap_err();
            assert!(
                err.to_string().contains(field),
                "error for {field} should name the field: {err}"
            );
        }
    }

    #[test]
    fn new_validates_like_normalize() {
        assert!(ModelParameters::new(0.01, 12.0, 0.5, 2).is_ok());
        assert!(ModelParameters::new(0.0, 12.0, 0.5, 2).is_err());
        assert!(ModelParameters::new(0.01, 12.0, 0.5, 1).is_err());
    }
}
