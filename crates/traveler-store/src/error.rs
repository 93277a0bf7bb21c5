//! Error types for traveler storage

use traveler_core::{EntryId, TravelerId};

/// Storage errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Traveler document not found
    #[error("traveler not found: {0}")]
    TravelerNotFound(TravelerId),

    /// Entry document not found
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    /// Backend failure
    #[error("storage backend error: {0}")]
    Backend(String),
}
