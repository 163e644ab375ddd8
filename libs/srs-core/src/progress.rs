//! Study-progress accounting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Rating;

/// Aggregate review statistics for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total_reviews: u32,
    /// Reviews rated hard, good or easy.
    pub correct_reviews: u32,
    /// Consecutive UTC calendar days with at least one review.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_review_day: Option<NaiveDate>,
}

impl StudyStats {
    /// Fold one review into the totals and the day streak.
    ///
    /// Several reviews on the same day keep the streak unchanged; a review on
    /// the following day extends it; any gap starts over at 1.
    pub fn record_review(&mut self, rating: Rating, now: DateTime<Utc>) {
        self.total_reviews += 1;
        if rating.is_success() {
            self.correct_reviews += 1;
        }

        let today = now.date_naive();
        self.current_streak = match self.last_review_day {
            Some(last) if last == today => self.current_streak,
            Some(last) if last.succ_opt() == Some(today) => self.current_streak + 1,
            _ => 1,
        };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_review_day = Some(today);
    }

    /// Fraction of reviews recalled successfully, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        f64::from(self.correct_reviews) / f64::from(self.total_reviews)
    }
}
