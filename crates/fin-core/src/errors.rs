//! Cross-cutting error types for finapp.
//!
//! Utility failures are synchronous and surface here. Provider failures live in
//! `fin-auth` (`AuthError`) and configuration failures in `fin-config`.

use thiserror::Error;

/// Errors raised by the utility layer and entity constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The input could not be parsed into a valid calendar date.
    #[error("Invalid date: '{input}'")]
    InvalidDate { input: String },

    /// The locale tag is not known to the locale engine.
    #[error("Unsupported locale: '{locale}'")]
    UnsupportedLocale { locale: String },

    /// A currency display string (or raw amount) is not a usable number.
    #[error("Invalid amount: '{input}'")]
    InvalidAmount { input: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
