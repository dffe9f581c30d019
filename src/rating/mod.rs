//! Elo rating calculations
//!
//! This module provides the expected-score model, rule-based K-factor
//! selection and the rating update that combines them.

pub mod calculator;
pub mod elo;
pub mod expected;
pub mod k_factor;

// Re-export commonly used types
pub use calculator::{RatingCalculationResult, RatingCalculator};
pub use elo::{new_rating, new_rating_with_defaults, EloConfig, EloRatingCalculator};
pub use expected::expected_score;
pub use k_factor::{
    resolve_k_factor, KFactorConditions, KFactorConfig, KFactorRule, DEFAULT_K_FACTOR_CONFIG,
};
