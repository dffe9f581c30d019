//! Elo rating updates with rule-based K-factors
//!
//! [`new_rating`] is the pure update for one side of a match.
//! [`EloRatingCalculator`] bundles a K-factor configuration and scaling factor
//! and rates both sides at once.

use crate::error::{RatingError, Result};
use crate::rating::calculator::{RatingCalculationResult, RatingCalculator};
use crate::rating::expected::{expected_score, validate_scaling_factor};
use crate::rating::k_factor::{KFactorConfig, DEFAULT_K_FACTOR_CONFIG};
use crate::types::{Player, RatingChange, DEFAULT_RATING, DEFAULT_SCALING_FACTOR};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// New rating for `player` after scoring `score` against `opponent`.
///
/// Missing ratings default to 1000 and missing game counts to 0. The result is
/// `rating + K * (score - expected)` rounded half away from zero, so 999.5
/// becomes 1000 and -999.5 becomes -1000.
///
/// `score` is not validated. Fails only for an invalid scaling factor or when
/// the computed rating is not finite or does not fit in an `i64`.
pub fn new_rating(
    player: &Player,
    opponent: &Player,
    score: f64,
    k_factor_config: &KFactorConfig,
    scaling_factor: f64,
) -> Result<i64> {
    Ok(rate(player, opponent, score, k_factor_config, scaling_factor)?.new_rating)
}

/// [`new_rating`] with the default K-factor rules and a scaling factor of 400
pub fn new_rating_with_defaults(player: &Player, opponent: &Player, score: f64) -> Result<i64> {
    new_rating(
        player,
        opponent,
        score,
        &DEFAULT_K_FACTOR_CONFIG,
        DEFAULT_SCALING_FACTOR,
    )
}

fn rate(
    player: &Player,
    opponent: &Player,
    score: f64,
    k_factor_config: &KFactorConfig,
    scaling_factor: f64,
) -> Result<RatingChange> {
    let player_rating = player.rating();
    let games_played = player.games_played();

    let k_factor = k_factor_config.resolve(player_rating, games_played);
    let expected = expected_score(player_rating, opponent.rating(), scaling_factor)?;

    let raw = player_rating + k_factor * (score - expected);
    if !raw.is_finite() {
        return Err(RatingError::NonFiniteRating { value: raw }.into());
    }
    let rounded = raw.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(RatingError::RatingOutOfRange { value: rounded }.into());
    }
    let new_rating = rounded as i64;

    debug!(
        "Rated {} -> {} (score {}, expected {:.4}, K {})",
        player_rating, new_rating, score, expected, k_factor
    );

    Ok(RatingChange {
        old_rating: player_rating,
        new_rating,
        games_played,
        score,
        expected_score: expected,
        k_factor,
    })
}

/// Elo calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Ordered K-factor rules
    #[serde(default)]
    pub k_factor: KFactorConfig,
    /// Divisor turning rating gaps into win probabilities
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
}

fn default_scaling_factor() -> f64 {
    DEFAULT_SCALING_FACTOR
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: KFactorConfig::default(),
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

impl EloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        validate_scaling_factor(self.scaling_factor)?;
        self.k_factor.validate()
    }
}

/// Elo rating calculator implementation
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: EloConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn k_factor_config(&self) -> &KFactorConfig {
        &self.config.k_factor
    }

    pub fn scaling_factor(&self) -> f64 {
        self.config.scaling_factor
    }

    /// Probability that `player` beats `opponent`
    pub fn win_probability(&self, player: &Player, opponent: &Player) -> Result<f64> {
        expected_score(player.rating(), opponent.rating(), self.config.scaling_factor)
    }

    /// K-factor that would apply to `player` in their next match
    pub fn k_factor_for(&self, player: &Player) -> f64 {
        self.config
            .k_factor
            .resolve(player.rating(), player.games_played())
    }

    /// New rating for `player` only
    pub fn new_rating(&self, player: &Player, opponent: &Player, score: f64) -> Result<i64> {
        new_rating(
            player,
            opponent,
            score,
            &self.config.k_factor,
            self.config.scaling_factor,
        )
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_rating_changes(
        &self,
        player: &Player,
        opponent: &Player,
        score: f64,
    ) -> Result<RatingCalculationResult> {
        let k_factor = &self.config.k_factor;
        let scaling_factor = self.config.scaling_factor;

        Ok(RatingCalculationResult {
            player: rate(player, opponent, score, k_factor, scaling_factor)?,
            opponent: rate(opponent, player, 1.0 - score, k_factor, scaling_factor)?,
        })
    }

    fn initial_rating(&self) -> f64 {
        DEFAULT_RATING
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: EloConfig = serde_json::from_value(config).map_err(|e| {
            RatingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            }
        })?;

        if let Err(e) = new_config.validate() {
            warn!("Rejected Elo configuration update: {}", e);
            return Err(e);
        }
        self.config = new_config;
        Ok(())
    }
}
