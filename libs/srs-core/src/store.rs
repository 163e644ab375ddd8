//! Persistence adapter contract.

use crate::types::CardMap;

/// Storage boundary for the card-state map.
///
/// The scheduler never performs I/O itself; hosts implement this trait over
/// whatever medium they have (a file, browser storage, a database row) and
/// call [`save`](StateStore::save) with the full map after every scheduling
/// decision so no progress is lost on exit.
pub trait StateStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full card-state map.
    ///
    /// Fails open: a missing or unparsable payload is "no cards yet", never
    /// an error. Corrupt stored state must not take the caller down.
    fn load(&self) -> CardMap;

    /// Persist the full map, replacing whatever was stored before.
    fn save(&self, cards: &CardMap) -> Result<(), Self::Error>;
}
