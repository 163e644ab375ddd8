//! Next-card selection for a review session.

use chrono::{DateTime, Utc};

use crate::scheduler::{due_cards, DEFAULT_DUE_LIMIT};
use crate::types::CardMap;

/// Pick the next card to show from `pool`, the caller's ordered list of
/// content ids.
///
/// The most overdue due card that appears in the pool wins. When nothing is
/// due, falls back to the first pool id with no recorded state (a card never
/// reviewed). Returns `None` when every pool card is scheduled in the future.
pub fn next_card<'a>(cards: &CardMap, pool: &'a [String], now: DateTime<Utc>) -> Option<&'a str> {
    let due = due_cards(cards, DEFAULT_DUE_LIMIT, now);
    for id in &due {
        if let Some(found) = pool.iter().find(|p| *p == id) {
            return Some(found.as_str());
        }
    }
    pool.iter()
        .find(|p| !cards.contains_key(p.as_str()))
        .map(String::as_str)
}
