//! Rule-based K-factor selection
//!
//! A [`KFactorConfig`] holds an ordered list of [`KFactorRule`]s. Rules are
//! scanned in order and the first one whose conditions all hold supplies the
//! K-factor; when none match, the configured default is used.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// K-factor used by the default configuration when no rule matches
pub const DEFAULT_K_FACTOR: f64 = 20.0;

/// Games below which a player is considered provisional
pub const PROVISIONAL_GAMES: f64 = 30.0;

/// Rating at or above which a player is considered established at the top
pub const HIGH_RATING_THRESHOLD: f64 = 2400.0;

/// Thresholds a rule may require. Every present threshold must hold.
///
/// `max_*` bounds are exclusive, `min_*` bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KFactorConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_games: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_games: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl KFactorConditions {
    pub const NONE: Self = Self {
        max_games: None,
        min_games: None,
        max_rating: None,
        min_rating: None,
    };

    pub const fn max_games(mut self, games: f64) -> Self {
        self.max_games = Some(games);
        self
    }

    pub const fn min_games(mut self, games: f64) -> Self {
        self.min_games = Some(games);
        self
    }

    pub const fn max_rating(mut self, rating: f64) -> Self {
        self.max_rating = Some(rating);
        self
    }

    pub const fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Check every present threshold against the player's state
    pub fn matches(&self, player_rating: f64, games_played: u32) -> bool {
        if let Some(max_games) = self.max_games {
            if games_played as f64 >= max_games {
                return false;
            }
        }
        if let Some(min_games) = self.min_games {
            if (games_played as f64) < min_games {
                return false;
            }
        }
        if let Some(max_rating) = self.max_rating {
            if player_rating >= max_rating {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if player_rating < min_rating {
                return false;
            }
        }
        true
    }
}

/// A single K-factor rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactorRule {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<KFactorConditions>,
}

impl KFactorRule {
    /// Rule that applies only when `conditions` hold
    pub const fn new(value: f64, conditions: KFactorConditions) -> Self {
        Self {
            value,
            conditions: Some(conditions),
        }
    }

    /// Rule that always applies
    pub const fn unconditional(value: f64) -> Self {
        Self {
            value,
            conditions: None,
        }
    }

    pub fn matches(&self, player_rating: f64, games_played: u32) -> bool {
        self.conditions
            .map_or(true, |c| c.matches(player_rating, games_played))
    }
}

/// Ordered K-factor rules with a fallback value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KFactorConfig {
    pub default: f64,
    #[serde(default)]
    pub rules: Cow<'static, [KFactorRule]>,
}

const DEFAULT_RULES: &[KFactorRule] = &[
    KFactorRule::new(40.0, KFactorConditions::NONE.max_games(PROVISIONAL_GAMES)),
    KFactorRule::new(
        10.0,
        KFactorConditions::NONE.min_rating(HIGH_RATING_THRESHOLD),
    ),
];

/// Provisional players (under 30 games) first, then players rated 2400+,
/// otherwise 20. A provisional player rated 2400+ still gets 40.
pub static DEFAULT_K_FACTOR_CONFIG: KFactorConfig = KFactorConfig {
    default: DEFAULT_K_FACTOR,
    rules: Cow::Borrowed(DEFAULT_RULES),
};

impl Default for KFactorConfig {
    fn default() -> Self {
        DEFAULT_K_FACTOR_CONFIG.clone()
    }
}

impl KFactorConfig {
    /// Create a configuration from a fallback value and ordered rules
    pub fn new(default: f64, rules: Vec<KFactorRule>) -> Self {
        Self {
            default,
            rules: Cow::Owned(rules),
        }
    }

    /// Configuration with no rules, always yielding `default`
    pub fn fixed(default: f64) -> Self {
        Self {
            default,
            rules: Cow::Borrowed(&[]),
        }
    }

    /// First rule matching the player's state, if any
    pub fn matching_rule(&self, player_rating: f64, games_played: u32) -> Option<&KFactorRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(player_rating, games_played))
    }

    /// Select the K-factor for a player, first match wins
    pub fn resolve(&self, player_rating: f64, games_played: u32) -> f64 {
        match self.matching_rule(player_rating, games_played) {
            Some(rule) => {
                debug!(
                    "K-factor {} from rule {:?} (rating {}, games {})",
                    rule.value, rule.conditions, player_rating, games_played
                );
                rule.value
            }
            None => {
                debug!(
                    "No K-factor rule matched (rating {}, games {}), using default {}",
                    player_rating, games_played, self.default
                );
                self.default
            }
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.default.is_finite() || self.default <= 0.0 {
            return Err(RatingError::InvalidKFactor {
                reason: format!("Default K-factor must be positive, got {}", self.default),
            }
            .into());
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.value.is_finite() || rule.value <= 0.0 {
                return Err(RatingError::InvalidKFactor {
                    reason: format!("Rule {} K-factor must be positive, got {}", index, rule.value),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Select the K-factor for `player_rating` / `games_played` from `config`
pub fn resolve_k_factor(config: &KFactorConfig, player_rating: f64, games_played: u32) -> f64 {
    config.resolve(player_rating, games_played)
}
