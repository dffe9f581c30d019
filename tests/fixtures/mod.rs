//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use elo_kfactor::error::Result;
use elo_kfactor::rating::{
    EloRatingCalculator, KFactorConditions, KFactorConfig, KFactorRule, RatingCalculationResult,
    RatingCalculator,
};
use elo_kfactor::types::Player;
use std::sync::Mutex;

/// The two-tier configuration used throughout the rating scenarios:
/// K=24 from 2100, K=16 from 2400 (never reached, the first rule wins), else 32.
pub fn tiered_k_factor_config() -> KFactorConfig {
    KFactorConfig::new(
        32.0,
        vec![
            KFactorRule::new(24.0, KFactorConditions::NONE.min_rating(2100.0)),
            KFactorRule::new(16.0, KFactorConditions::NONE.min_rating(2400.0)),
        ],
    )
}

/// Player with a known rating and game count
pub fn player(rating: f64, games_played: u32) -> Player {
    Player::new(rating, games_played)
}

/// Player with a known rating and no recorded games
pub fn rated(rating: f64) -> Player {
    Player::with_rating(rating)
}

/// Calculator wrapper that records every match it rates
#[derive(Debug, Default)]
pub struct RecordingRatingCalculator {
    inner: EloRatingCalculator,
    calls: Mutex<Vec<(Player, Player, f64)>>,
}

impl RecordingRatingCalculator {
    pub fn new(inner: EloRatingCalculator) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Get all calculation calls made
    pub fn get_calculation_calls(&self) -> Vec<(Player, Player, f64)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for RecordingRatingCalculator {
    fn calculate_rating_changes(
        &self,
        player: &Player,
        opponent: &Player,
        score: f64,
    ) -> Result<RatingCalculationResult> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((*player, *opponent, score));
        }
        self.inner.calculate_rating_changes(player, opponent, score)
    }

    fn initial_rating(&self) -> f64 {
        self.inner.initial_rating()
    }

    fn config(&self) -> serde_json::Value {
        self.inner.config()
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        self.inner.update_config(config)
    }
}
