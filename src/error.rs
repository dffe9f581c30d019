//! Error types for rating calculations
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid scaling factor: {value} (must be positive and finite)")]
    InvalidScalingFactor { value: f64 },

    #[error("Invalid K-factor: {reason}")]
    InvalidKFactor { reason: String },

    #[error("Rating calculation produced a non-finite value: {value}")]
    NonFiniteRating { value: f64 },

    #[error("Rating {value} does not fit in a 64-bit integer")]
    RatingOutOfRange { value: f64 },

    #[error("Invalid match outcome: {value}")]
    InvalidOutcome { value: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
