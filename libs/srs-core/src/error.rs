//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using SrsError.
pub type Result<T> = std::result::Result<T, SrsError>;

/// Errors surfaced by the scheduler library.
#[derive(Debug, Error)]
pub enum SrsError {
    #[error("unknown rating: {0}")]
    UnknownRating(String),
}
