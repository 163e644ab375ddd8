//! Spaced-repetition scheduling core shared by the study applications.
//!
//! Provides:
//! - Rating-driven card state transitions (SM-2 style)
//! - Due-card query and next-card selection
//! - Study-progress accounting (accuracy, day streaks)
//! - The persistence adapter contract (`StateStore`)
//!
//! Every operation is a pure computation over explicit inputs including the
//! current time; persistence and clocks belong to the host.

pub mod error;
pub mod progress;
pub mod queue;
pub mod scheduler;
pub mod store;
pub mod types;

pub use error::{Result, SrsError};
pub use progress::StudyStats;
pub use queue::next_card;
pub use scheduler::{due_cards, Scheduler, DEFAULT_DUE_LIMIT};
pub use store::StateStore;
pub use types::{Card, CardMap, Rating};
