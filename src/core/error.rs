use thiserror::Error;

use crate::core::validation::ValidationError;

/// Centralized error types for the engine
///
/// All library errors are converted to this enum for consistent handling.
/// Uses `thiserror` for automatic conversion and display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A metadata lookup failed (only reachable through injected
    /// resolver implementations; the built-in mock cannot fail)
    #[error("Lookup error: {0}")]
    Lookup(String),
}

/// Convenience alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Lookup(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Lookup(msg.to_string())
    }
}
