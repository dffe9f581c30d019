//! Expected score from the logistic Elo model

use crate::error::{RatingError, Result};

/// Probability that a player rated `player_rating` beats one rated `opponent_rating`.
///
/// Computes `1 / (1 + 10^((opponent - player) / scaling_factor))`. Equal ratings
/// yield exactly 0.5. The scaling factor must be positive and finite, anything
/// else is rejected with [`RatingError::InvalidScalingFactor`].
pub fn expected_score(player_rating: f64, opponent_rating: f64, scaling_factor: f64) -> Result<f64> {
    validate_scaling_factor(scaling_factor)?;

    let exponent = (opponent_rating - player_rating) / scaling_factor;
    Ok(1.0 / (1.0 + 10f64.powf(exponent)))
}

/// Reject scaling factors that would divide by zero or flip the model
pub fn validate_scaling_factor(scaling_factor: f64) -> Result<()> {
    if !scaling_factor.is_finite() || scaling_factor <= 0.0 {
        return Err(RatingError::InvalidScalingFactor {
            value: scaling_factor,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_SCALING_FACTOR;

    #[test]
    fn test_equal_ratings_is_even() {
        assert_eq!(expected_score(1500.0, 1500.0, 400.0).unwrap(), 0.5);
        assert_eq!(expected_score(0.0, 0.0, 50.0).unwrap(), 0.5);
    }

    #[test]
    fn test_probable_win_and_loss() {
        let win = expected_score(1500.0, 1400.0, DEFAULT_SCALING_FACTOR).unwrap();
        assert!((win - 0.64).abs() < 0.005);

        let loss = expected_score(1500.0, 1600.0, DEFAULT_SCALING_FACTOR).unwrap();
        assert!((loss - 0.36).abs() < 0.005);
    }

    #[test]
    fn test_four_hundred_point_gap() {
        let underdog = expected_score(1200.0, 1600.0, 400.0).unwrap();
        assert!((underdog - 1.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_smaller_scaling_factor_sharpens_probability() {
        let wide = expected_score(1600.0, 1200.0, 400.0).unwrap();
        let sharp = expected_score(1600.0, 1200.0, 200.0).unwrap();
        assert!(sharp > wide);
        assert!(sharp < 1.0);
    }

    #[test]
    fn test_invalid_scaling_factor() {
        for bad in [0.0, -0.0, -400.0, f64::NAN, f64::INFINITY] {
            let err = expected_score(1500.0, 1500.0, bad).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<RatingError>(),
                Some(RatingError::InvalidScalingFactor { .. })
            ));
        }
    }
}
