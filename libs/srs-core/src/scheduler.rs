//! Rating-driven review scheduling.
//!
//! SM-2 style: a lapse resets the streak to a sub-day interval, successful
//! reviews walk fixed graduation steps and then grow multiplicatively by the
//! card's ease.

use chrono::{DateTime, Utc};

use crate::types::{Card, CardMap, Rating};

/// Milliseconds in one day; fractional-day intervals convert exactly.
const MS_PER_DAY: f64 = 86_400_000.0;

/// Default maximum number of ids returned by [`due_cards`].
pub const DEFAULT_DUE_LIMIT: usize = 100;

/// Scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval in days applied on a lapse.
    pub lapse_interval: f64,
    pub lapse_ease_penalty: f64,
    pub hard_ease_penalty: f64,
    pub easy_ease_bonus: f64,
    /// Interval after the first successful review (easy gets its own).
    pub graduating_interval: f64,
    pub easy_graduating_interval: f64,
    /// Interval after the second successful review (easy gets its own).
    pub second_interval: f64,
    pub easy_second_interval: f64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            lapse_interval: 0.5,
            lapse_ease_penalty: 0.2,
            hard_ease_penalty: 0.15,
            easy_ease_bonus: 0.15,
            graduating_interval: 1.0,
            easy_graduating_interval: 3.0,
            second_interval: 4.0,
            easy_second_interval: 6.0,
        }
    }
}

impl Scheduler {
    /// State for a card reviewed for the first time: due immediately.
    pub fn create_card(&self, id: impl Into<String>, now: DateTime<Utc>) -> Card {
        Card {
            id: id.into(),
            ease: self.initial_ease,
            interval: 0.0,
            repetitions: 0,
            due: now.timestamp_millis(),
        }
    }

    /// Compute the card's next state for a rating.
    ///
    /// Pure over its inputs; the caller replaces the stored state with the
    /// returned value and persists the map.
    pub fn schedule(&self, card: &Card, rating: Rating, now: DateTime<Utc>) -> Card {
        let (ease, interval, repetitions) = match rating {
            Rating::Again => (
                (card.ease - self.lapse_ease_penalty).max(self.minimum_ease),
                self.lapse_interval,
                0,
            ),
            Rating::Hard | Rating::Good | Rating::Easy => {
                let ease = match rating {
                    Rating::Hard => (card.ease - self.hard_ease_penalty).max(self.minimum_ease),
                    Rating::Easy => card.ease + self.easy_ease_bonus,
                    _ => card.ease,
                };
                let repetitions = card.repetitions + 1;
                let interval = self.success_interval(card.interval, ease, repetitions, rating);
                (ease, interval, repetitions)
            }
        };

        Card {
            id: card.id.clone(),
            ease,
            interval,
            repetitions,
            due: now.timestamp_millis() + (interval * MS_PER_DAY).round() as i64,
        }
    }

    /// Interval growth for a successful review, using the post-increment
    /// repetition count and the already-adjusted ease.
    fn success_interval(
        &self,
        prev_interval: f64,
        ease: f64,
        repetitions: u32,
        rating: Rating,
    ) -> f64 {
        match repetitions {
            1 if rating == Rating::Easy => self.easy_graduating_interval,
            1 => self.graduating_interval,
            2 if rating == Rating::Easy => self.easy_second_interval,
            2 => self.second_interval,
            _ => (prev_interval * ease).round().max(1.0),
        }
    }
}

/// Ids of cards due at `now`, most overdue first, truncated to `limit`.
///
/// Idempotent; a `limit` of zero (or an empty map) yields an empty vec.
/// Cards sharing a `due` timestamp keep the map's id order.
pub fn due_cards(cards: &CardMap, limit: usize, now: DateTime<Utc>) -> Vec<String> {
    let now_ms = now.timestamp_millis();
    let mut due: Vec<&Card> = cards.values().filter(|c| c.due <= now_ms).collect();
    due.sort_by_key(|c| c.due);
    due.truncate(limit);
    due.into_iter().map(|c| c.id.clone()).collect()
}
