//! Sparecast shared types and errors.
//!
//! This crate provides the foundational types shared across the
//! sparecast workspace:
//! - The workspace error taxonomy with stable codes
//! - Output format specifications for the CLI surface

pub mod error;
pub mod output;

pub use error::{Error, ErrorCategory, Result};
pub use output::OutputFormat;
