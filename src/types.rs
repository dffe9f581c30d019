//! Common types used throughout the rating crate

use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;
use skillratings::Outcomes;

/// Rating assumed for a player whose rating is unknown
pub const DEFAULT_RATING: f64 = 1000.0;

/// Games played assumed for a player whose history is unknown
pub const DEFAULT_GAMES_PLAYED: u32 = 0;

/// Default divisor turning a rating gap into a win probability
pub const DEFAULT_SCALING_FACTOR: f64 = 400.0;

/// A competitor as supplied by the host application.
///
/// Both fields are optional; missing values are substituted with
/// [`DEFAULT_RATING`] and [`DEFAULT_GAMES_PLAYED`] by the accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games_played: Option<u32>,
}

impl Player {
    /// Create a player with a known rating and game count
    pub fn new(rating: f64, games_played: u32) -> Self {
        Self {
            rating: Some(rating),
            games_played: Some(games_played),
        }
    }

    /// Create a player with a known rating and unknown game count
    pub fn with_rating(rating: f64) -> Self {
        Self {
            rating: Some(rating),
            games_played: None,
        }
    }

    /// Current rating, or [`DEFAULT_RATING`] when absent
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Games played, or [`DEFAULT_GAMES_PLAYED`] when absent
    pub fn games_played(&self) -> u32 {
        self.games_played.unwrap_or(DEFAULT_GAMES_PLAYED)
    }
}

impl From<EloRating> for Player {
    fn from(rating: EloRating) -> Self {
        Self::with_rating(rating.rating)
    }
}

impl From<Player> for EloRating {
    fn from(player: Player) -> Self {
        Self {
            rating: player.rating(),
        }
    }
}

/// Result of a single match from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Numeric score fed into the rating update
    pub fn score(self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Draw => 0.5,
            MatchOutcome::Loss => 0.0,
        }
    }

    /// The same match seen from the opponent's side
    pub fn reversed(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Draw => MatchOutcome::Draw,
            MatchOutcome::Loss => MatchOutcome::Win,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "win"),
            MatchOutcome::Draw => write!(f, "draw"),
            MatchOutcome::Loss => write!(f, "loss"),
        }
    }
}

impl std::str::FromStr for MatchOutcome {
    type Err = crate::error::RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "w" | "1" => Ok(MatchOutcome::Win),
            "draw" | "d" | "0.5" => Ok(MatchOutcome::Draw),
            "loss" | "l" | "0" => Ok(MatchOutcome::Loss),
            _ => Err(crate::error::RatingError::InvalidOutcome {
                value: s.to_string(),
            }),
        }
    }
}

impl From<MatchOutcome> for Outcomes {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => Outcomes::WIN,
            MatchOutcome::Draw => Outcomes::DRAW,
            MatchOutcome::Loss => Outcomes::LOSS,
        }
    }
}

/// Rating change information for one side of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: f64,
    pub new_rating: i64,
    pub games_played: u32,
    pub score: f64,
    pub expected_score: f64,
    pub k_factor: f64,
}

impl RatingChange {
    /// Signed difference between the new and old rating
    pub fn delta(&self) -> f64 {
        self.new_rating as f64 - self.old_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        assert_eq!(player.rating(), 1000.0);
        assert_eq!(player.games_played(), 0);

        let player = Player::with_rating(1850.0);
        assert_eq!(player.rating(), 1850.0);
        assert_eq!(player.games_played(), 0);
    }

    #[test]
    fn test_player_deserialize_partial() {
        let player: Player = serde_json::from_str(r#"{"gamesPlayed": 12}"#).unwrap();
        assert_eq!(player.rating, None);
        assert_eq!(player.games_played, Some(12));
        assert_eq!(player.rating(), DEFAULT_RATING);

        let empty: Player = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Player::default());
    }

    #[test]
    fn test_player_elo_rating_conversion() {
        let player: Player = EloRating { rating: 1420.0 }.into();
        assert_eq!(player.rating, Some(1420.0));
        assert_eq!(player.games_played, None);

        let elo: EloRating = Player::default().into();
        assert_eq!(elo.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_match_outcome_scores() {
        assert_eq!(MatchOutcome::Win.score(), 1.0);
        assert_eq!(MatchOutcome::Draw.score(), 0.5);
        assert_eq!(MatchOutcome::Loss.score(), 0.0);

        for outcome in [MatchOutcome::Win, MatchOutcome::Draw, MatchOutcome::Loss] {
            assert_eq!(outcome.score() + outcome.reversed().score(), 1.0);
            assert_eq!(outcome.reversed().reversed(), outcome);
        }
    }

    #[test]
    fn test_match_outcome_parse() {
        assert_eq!("win".parse::<MatchOutcome>().unwrap(), MatchOutcome::Win);
        assert_eq!("Draw".parse::<MatchOutcome>().unwrap(), MatchOutcome::Draw);
        assert_eq!("0".parse::<MatchOutcome>().unwrap(), MatchOutcome::Loss);
        assert_eq!(
            "forfeit".parse::<MatchOutcome>(),
            Err(crate::error::RatingError::InvalidOutcome {
                value: "forfeit".to_string()
            })
        );
    }

    #[test]
    fn test_rating_change_delta() {
        let change = RatingChange {
            old_rating: 1500.0,
            new_rating: 1510,
            games_played: 31,
            score: 1.0,
            expected_score: 0.5,
            k_factor: 20.0,
        };
        assert_eq!(change.delta(), 10.0);
    }
}
