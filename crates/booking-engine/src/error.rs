//! Error types for booking-engine operations.

use thiserror::Error;

/// Errors that can occur while validating or assembling a booking.
///
/// Validation verdicts are *values* ([`crate::types::Verdict`]), never
/// errors; this type covers the cases where no verdict could be produced
/// at all.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A data-access round trip (lookup or creation) failed.
    ///
    /// Means "the verdict could not be determined", not "the booking is
    /// invalid" — callers must never read this as an empty result.
    #[error("data access failed during {operation}: {message}")]
    DataAccess { operation: String, message: String },

    /// Raw form input was missing or unparseable where a value is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Build a [`EngineError::DataAccess`] with an operation label.
    pub fn data_access(operation: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::DataAccess {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
