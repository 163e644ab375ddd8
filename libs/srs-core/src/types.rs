//! Core types for the review scheduler.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SrsError;

/// Full review state, keyed by card id.
///
/// A `BTreeMap` keeps iteration (and therefore serialized output and
/// equal-`due` tie-breaks) deterministic regardless of insertion order.
pub type CardMap = BTreeMap<String, Card>;

/// User's self-assessed recall quality for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Rating name as used on the wire and the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Whether the review counts as a successful recall.
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Again)
    }
}

impl FromStr for Rating {
    type Err = SrsError;

    /// Parse a rating name. Unknown names are rejected, never coerced to a
    /// default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            other => Err(SrsError::UnknownRating(other.to_string())),
        }
    }
}

/// Review state of one card.
///
/// Serializes with exactly these five fields, numerics as JSON numbers and
/// `due` as epoch milliseconds, so a round trip reproduces identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Caller-supplied identifier, stable across sessions.
    pub id: String,
    /// Interval-growth multiplier, never below the scheduler's ease floor.
    pub ease: f64,
    /// Days until the next review. `0` means review now; fractional values
    /// are sub-day intervals.
    pub interval: f64,
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
    /// Epoch milliseconds at which the card becomes reviewable.
    pub due: i64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rating_round_trips_through_str() {
        for rating in [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy] {
            assert_eq!(rating.as_str().parse::<Rating>().unwrap(), rating);
        }
    }

    #[test]
    fn unknown_rating_is_rejected() {
        let err = "ok".parse::<Rating>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rating: ok");
    }

    #[test]
    fn only_again_is_a_lapse() {
        assert!(!Rating::Again.is_success());
        assert!(Rating::Hard.is_success());
        assert!(Rating::Good.is_success());
        assert!(Rating::Easy.is_success());
    }

    #[test]
    fn card_serializes_with_exactly_five_fields() {
        let card = Card {
            id: "c1".to_string(),
            ease: 2.5,
            interval: 0.5,
            repetitions: 3,
            due: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&card).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object["ease"].is_f64());
        assert_eq!(object["due"], serde_json::json!(1_700_000_000_000_i64));
    }

    #[test]
    fn card_round_trip_preserves_field_values() {
        let card = Card {
            id: "c1".to_string(),
            ease: 2.3499999999999996,
            interval: 0.5,
            repetitions: 0,
            due: 1_700_000_043_200_000,
        };
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
