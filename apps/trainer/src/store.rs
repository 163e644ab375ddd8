//! JSON file storage for the card box and study statistics.

use std::fs;
use std::path::{Path, PathBuf};

use srs_core::{CardMap, StateStore, StudyStats};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Card box persisted as a single JSON object keyed by card id.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonFileStore {
    type Error = StoreError;

    /// Fails open: a missing or unparsable card box loads as empty.
    fn load(&self) -> CardMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), %error, "unreadable card box, starting empty");
                }
                return CardMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(cards) => cards,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unparsable card box, starting empty");
                CardMap::new()
            }
        }
    }

    fn save(&self, cards: &CardMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Path of the study-statistics file kept beside the card box.
pub fn stats_path(box_path: &Path) -> PathBuf {
    let stem = box_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("box");
    box_path.with_file_name(format!("{stem}-stats.json"))
}

/// Load study statistics, failing open to the empty value.
pub fn load_stats(path: &Path) -> StudyStats {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return StudyStats::default(),
    };
    serde_json::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!(path = %path.display(), %error, "unparsable stats file, starting empty");
        StudyStats::default()
    })
}

/// Persist study statistics beside the card box.
pub fn save_stats(path: &Path, stats: &StudyStats) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json)?;
    Ok(())
}
