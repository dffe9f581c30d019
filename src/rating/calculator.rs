//! Rating calculator trait
//!
//! This module defines the interface host applications use to rate a
//! finished two-player match without caring how K-factors are chosen.

use crate::types::{Player, RatingChange};
use serde::{Deserialize, Serialize};

/// Result of a rating calculation for both sides of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    /// Change for the player whose score was supplied
    pub player: RatingChange,
    /// Change for the opponent, rated with the complementary score
    pub opponent: RatingChange,
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for both players based on the match score
    ///
    /// # Arguments
    /// * `player` - The side whose `score` is given
    /// * `opponent` - The other side
    /// * `score` - 1.0 for a win, 0.5 for a draw, 0.0 for a loss
    ///
    /// # Returns
    /// Result containing both rating changes
    fn calculate_rating_changes(
        &self,
        player: &Player,
        opponent: &Player,
        score: f64,
    ) -> crate::error::Result<RatingCalculationResult>;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}
