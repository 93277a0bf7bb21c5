//! In-memory reference store
//!
//! DashMap-backed implementation of `DocumentStore`. Writes to one
//! traveler are serialized under the map's per-entry lock, which gives the
//! document-level atomicity the domain assumes; last writer wins.

use crate::error::StoreError;
use crate::store::{DocumentStore, SaveReceipt, TravelerFilter};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::BTreeSet;
use traveler_core::{DataEntry, EntryId, NoteEntry, Traveler, TravelerField, TravelerId};

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    travelers: DashMap<TravelerId, Traveler>,
    data_entries: DashMap<EntryId, DataEntry>,
    note_entries: DashMap<EntryId, NoteEntry>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted travelers
    #[inline]
    #[must_use]
    pub fn traveler_count(&self) -> usize {
        self.travelers.len()
    }

    /// Number of persisted data entries
    #[inline]
    #[must_use]
    pub fn data_entry_count(&self) -> usize {
        self.data_entries.len()
    }

    /// Number of persisted note entries
    #[inline]
    #[must_use]
    pub fn note_entry_count(&self) -> usize {
        self.note_entries.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_by_id(&self, id: TravelerId) -> Result<Traveler, StoreError> {
        self.travelers
            .get(&id)
            .map(|doc| doc.clone())
            .ok_or(StoreError::TravelerNotFound(id))
    }

    async fn find_many(&self, filter: &TravelerFilter) -> Result<Vec<Traveler>, StoreError> {
        Ok(self
            .travelers
            .iter()
            .filter(|doc| filter.matches(doc.value()))
            .map(|doc| doc.value().clone())
            .collect())
    }

    async fn save_traveler(&self, traveler: Traveler) -> Result<SaveReceipt, StoreError> {
        let traveler_id = traveler.id;
        // The entry lock holds across diff and swap, so the diff is always
        // against the document this write replaces.
        let changed = match self.travelers.entry(traveler_id) {
            Entry::Occupied(mut slot) => {
                let changed = traveler.diff_fields(slot.get());
                slot.insert(traveler);
                changed
            }
            Entry::Vacant(slot) => {
                slot.insert(traveler);
                BTreeSet::from(TravelerField::ALL)
            }
        };
        tracing::debug!(traveler = %traveler_id, changed = changed.len(), "traveler committed");
        Ok(SaveReceipt {
            traveler_id,
            changed,
        })
    }

    async fn save_data_entry(&self, id: EntryId, entry: DataEntry) -> Result<(), StoreError> {
        self.data_entries.insert(id, entry);
        Ok(())
    }

    async fn save_note_entry(&self, id: EntryId, note: NoteEntry) -> Result<(), StoreError> {
        self.note_entries.insert(id, note);
        Ok(())
    }

    async fn find_data_entry(&self, id: EntryId) -> Result<DataEntry, StoreError> {
        self.data_entries
            .get(&id)
            .map(|doc| doc.clone())
            .ok_or(StoreError::EntryNotFound(id))
    }

    async fn find_note_entry(&self, id: EntryId) -> Result<NoteEntry, StoreError> {
        self.note_entries
            .get(&id)
            .map(|doc| doc.clone())
            .ok_or(StoreError::EntryNotFound(id))
    }
}
