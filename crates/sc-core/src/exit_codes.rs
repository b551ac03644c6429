//! Exit codes for the sparecast CLI.
//!
//! Stable contract for automation:
//! - 0: success
//! - 10-19: user/input errors (fix the input and rerun)
//! - 20-29: internal model defects (report, do not retry)

use sc_common::{Error, ErrorCategory};

/// Exit codes for sparecast operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean run, report produced.
    Clean = 0,

    /// Invalid arguments or parameters.
    ArgsError = 10,

    /// Model construction or solve defect.
    InternalError = 20,

    /// I/O failure writing output.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a workspace error to its exit code.
    pub fn from_error(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Parameter => ExitCode::ArgsError,
            ErrorCategory::Model | ErrorCategory::Solver => ExitCode::InternalError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_are_user_errors() {
        let err = Error::invalid_parameter("units", "must be >= 2");
        assert_eq!(ExitCode::from_error(&err), ExitCode::ArgsError);
        assert_eq!(ExitCode::from_error(&err).as_i32(), 10);
    }

    #[test]
    fn model_defects_are_internal() {
        let err = Error::Construction("row sum".into());
        assert_eq!(ExitCode::from_error(&err).as_i32(), 20);
        let err = Error::SingularSystem("pivot".into());
        assert_eq!(ExitCode::from_error(&err).as_i32(), 20);
    }
}
