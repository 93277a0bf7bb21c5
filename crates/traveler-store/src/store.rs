//! The document store seam
//!
//! Storage mechanics are an external collaborator: this core only assumes
//! identifier lookup and atomic single-document writes. The one
//! non-obvious obligation is on `save_traveler`: it must report which
//! top-level fields actually changed versus the prior persisted state,
//! because the post-commit cascade keys off that set.

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::BTreeSet;
use traveler_core::{DataEntry, EntryId, NoteEntry, Status, Traveler, TravelerField, TravelerId};

/// Outcome of a durable traveler commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Committed traveler
    pub traveler_id: TravelerId,
    /// Top-level fields that differ from the prior persisted document.
    /// A first insert reports every tracked field.
    pub changed: BTreeSet<TravelerField>,
}

impl SaveReceipt {
    /// Whether the changed set intersects the cascade trigger fields
    /// (status, total input, finished input).
    #[inline]
    #[must_use]
    pub fn triggers_cascade(&self) -> bool {
        TravelerField::CASCADE_TRIGGERS
            .iter()
            .any(|f| self.changed.contains(f))
    }
}

/// Conjunctive traveler filter for `find_many`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelerFilter {
    /// Match travelers with this status
    pub status: Option<Status>,
    /// Match travelers with this archived flag
    pub archived: Option<bool>,
    /// Match travelers created by this user id
    pub created_by: Option<String>,
}

impl TravelerFilter {
    /// Empty filter (matches everything)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by archived flag
    #[inline]
    #[must_use]
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Filter by creator user id
    #[inline]
    #[must_use]
    pub fn with_created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }

    /// Whether a traveler matches every set predicate
    #[must_use]
    pub fn matches(&self, traveler: &Traveler) -> bool {
        if let Some(status) = self.status {
            if traveler.status() != status {
                return false;
            }
        }
        if let Some(archived) = self.archived {
            if traveler.archived() != archived {
                return false;
            }
        }
        if let Some(created_by) = &self.created_by {
            if &traveler.created_by.id != created_by {
                return false;
            }
        }
        true
    }
}

/// Document store with document-level atomicity.
///
/// Concurrent writers to the same traveler are serialized per document by
/// the implementation (last-writer-wins is acceptable); nothing larger
/// than one document is ever atomic.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up a traveler by id
    async fn find_by_id(&self, id: TravelerId) -> Result<Traveler, StoreError>;

    /// Find travelers matching a filter
    async fn find_many(&self, filter: &TravelerFilter) -> Result<Vec<Traveler>, StoreError>;

    /// Atomically commit a traveler document.
    ///
    /// The receipt reports the fields changed versus the prior persisted
    /// state; the caller feeds that set into the cascade step.
    async fn save_traveler(&self, traveler: Traveler) -> Result<SaveReceipt, StoreError>;

    /// Persist a data entry under a caller-assigned id.
    ///
    /// The caller picks the id so it can wire the reference into the
    /// traveler document before any entry write happens.
    async fn save_data_entry(&self, id: EntryId, entry: DataEntry) -> Result<(), StoreError>;

    /// Persist a note entry under a caller-assigned id
    async fn save_note_entry(&self, id: EntryId, note: NoteEntry) -> Result<(), StoreError>;

    /// Look up a data entry by id
    async fn find_data_entry(&self, id: EntryId) -> Result<DataEntry, StoreError>;

    /// Look up a note entry by id
    async fn find_note_entry(&self, id: EntryId) -> Result<NoteEntry, StoreError>;
}
