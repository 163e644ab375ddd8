use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use srs_core::{Card, Rating, Scheduler, StateStore};

use crate::store::{self, JsonFileStore};

/// Applies a review rating to a card and persists the updated box.
pub fn rate(path: &Path, id: &str, rating: &str) -> Result<()> {
    let rating: Rating = rating.parse()?;
    let updated = apply_rating(path, id, rating, Utc::now())?;

    let next_review = DateTime::<Utc>::from_timestamp_millis(updated.due)
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| updated.due.to_string());
    println!(
        "{}: interval {} day{}, next review {}",
        id,
        updated.interval,
        if updated.interval == 1.0 { "" } else { "s" },
        next_review
    );
    Ok(())
}

/// Load, schedule and save; the card's state is created on first review.
pub fn apply_rating(path: &Path, id: &str, rating: Rating, now: DateTime<Utc>) -> Result<Card> {
    let scheduler = Scheduler::default();
    let store = JsonFileStore::new(path);

    let mut cards = store.load();
    let current = cards
        .get(id)
        .cloned()
        .unwrap_or_else(|| scheduler.create_card(id, now));
    let updated = scheduler.schedule(&current, rating, now);
    tracing::debug!(id, rating = rating.as_str(), interval = updated.interval, "scheduled");
    cards.insert(id.to_string(), updated.clone());
    store.save(&cards)?;

    let stats_path = store::stats_path(path);
    let mut stats = store::load_stats(&stats_path);
    stats.record_review(rating, now);
    store::save_stats(&stats_path, &stats)?;

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    const T0: i64 = 1_700_000_000_000;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn first_review_creates_and_graduates_the_card() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.json");

        let card = apply_rating(&path, "c1", Rating::Good, at(T0)).unwrap();
        assert_eq!(card.interval, 1.0);
        assert_eq!(card.repetitions, 1);
        assert_eq!(card.due, T0 + 86_400_000);

        let cards = JsonFileStore::new(&path).load();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards["c1"], card);
    }

    #[test]
    fn later_reviews_pick_up_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.json");

        apply_rating(&path, "c1", Rating::Good, at(T0)).unwrap();
        let card = apply_rating(&path, "c1", Rating::Good, at(T0 + 90_000_000)).unwrap();
        assert_eq!(card.repetitions, 2);
        assert_eq!(card.interval, 4.0);
    }

    #[test]
    fn reviews_update_the_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.json");

        apply_rating(&path, "c1", Rating::Good, at(T0)).unwrap();
        apply_rating(&path, "c2", Rating::Again, at(T0)).unwrap();

        let stats = store::load_stats(&store::stats_path(&path));
        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.correct_reviews, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn unknown_rating_string_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.json");
        assert!(rate(&path, "c1", "ok").is_err());
        assert!(JsonFileStore::new(&path).load().is_empty());
    }
}
