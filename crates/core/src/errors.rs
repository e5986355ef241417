//! Core error types for the savings domain.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures surface through command handlers, which convert them into
//! [`Error::Handler`] when a publish call propagates them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings domain core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A command handler failed while applying a published command. The
    /// publishing aggregate already mutated its in-memory state, so logical
    /// and durable state may diverge until the handler is retried.
    #[error("Command handler failed: {0}")]
    Handler(String),

    #[error("Allocation calculation failed: {0}")]
    Calculation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for caller-supplied input and current aggregate state.
///
/// These are local, synchronous, and non-retryable: the caller must supply
/// corrected input. No state is mutated when one is returned.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
