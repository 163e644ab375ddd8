use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use srs_core::{due_cards, StateStore};

use crate::store::JsonFileStore;

/// Prints due card ids, most overdue first.
pub fn due(path: &Path, limit: usize) -> Result<()> {
    let cards = JsonFileStore::new(path).load();
    let due = due_cards(&cards, limit, Utc::now());
    if due.is_empty() {
        println!("No cards due for review in {:?}", path);
        return Ok(());
    }
    for id in due {
        println!("{id}");
    }
    Ok(())
}
