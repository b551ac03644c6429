//! Error types for sparecast.
//!
//! Structured error handling with stable numeric codes for machine
//! parsing and category classification for grouping. None of these
//! errors are retryable: every computation is a deterministic function
//! of its inputs, so retrying without changing the input cannot
//! succeed. The only error a caller can act on is `InvalidParameter`,
//! by rejecting or re-prompting for the offending input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sparecast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller-supplied input rejected before model construction.
    Parameter,
    /// Transition matrix construction violated a model invariant.
    Model,
    /// Stationary solve failed or produced a degenerate distribution.
    Solver,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Parameter => write!(f, "parameter"),
            ErrorCategory::Model => write!(f, "model"),
            ErrorCategory::Solver => write!(f, "solver"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for sparecast.
#[derive(Error, Debug)]
pub enum Error {
    // Parameter errors (10-19)
    #[error("invalid parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },

    // Model construction errors (20-29)
    #[error("transition matrix construction failed: {0}")]
    Construction(String),

    // Solver errors (30-39)
    #[error("stationary solve failed: {0}")]
    SingularSystem(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Convenience constructor for parameter validation failures.
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code for this error type.
    ///
    /// Codes are grouped by category:
    /// - 10-19: parameter errors
    /// - 20-29: model construction errors
    /// - 30-39: solver errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidParameter { .. } => 10,
            Error::Construction(_) => 20,
            Error::SingularSystem(_) => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidParameter { .. } => ErrorCategory::Parameter,
            Error::Construction(_) => ErrorCategory::Model,
            Error::SingularSystem(_) => ErrorCategory::Solver,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether the caller can resolve this error by fixing its input.
    ///
    /// `Construction` and `SingularSystem` indicate a formula or
    /// configuration defect, not a bad request; they should be reported,
    /// not re-prompted.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_category() {
        let param = Error::invalid_parameter("units", "must be >= 2");
        assert_eq!(param.code(), 10);
        assert_eq!(param.category(), ErrorCategory::Parameter);
        assert!(param.is_caller_error());

        let construction = Error::Construction("row 3 off-diagonal sum 1.05".into());
        assert_eq!(construction.code(), 20);
        assert_eq!(construction.category(), ErrorCategory::Model);
        assert!(!construction.is_caller_error());

        let singular = Error::SingularSystem("vanishing pivot at column 4".into());
        assert_eq!(singular.code(), 30);
        assert_eq!(singular.category(), ErrorCategory::Solver);
        assert!(!singular.is_caller_error());
    }

    #[test]
    fn display_includes_field_name() {
        let err = Error::invalid_parameter("failure_rate", "must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter failure_rate: must be > 0"
        );
    }
}
