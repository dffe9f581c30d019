//! Elo K-factor - Elo rating updates for two-player matches
//!
//! This crate computes a player's new rating after a match from the logistic
//! expected-score model and a K-factor chosen by ordered, first-match-wins
//! rules. It holds no state and performs no I/O.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{
    expected_score, new_rating, new_rating_with_defaults, resolve_k_factor, EloConfig,
    EloRatingCalculator, KFactorConditions, KFactorConfig, KFactorRule, RatingCalculator,
    DEFAULT_K_FACTOR_CONFIG,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
