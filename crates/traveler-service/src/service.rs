//! The traveler service
//!
//! Public operation surface over the domain: each operation loads the
//! traveler, applies the mutation, commits it through the document store
//! and hands the receipt's changed-field set to the cascade. Domain and
//! validation failures abort before anything is written; the cascade runs
//! detached after a successful commit and can never undo it.

use crate::binder::BinderDirectory;
use crate::cascade;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use traveler_core::{
    DataEntry, EntryId, EntryKind, FileMetadata, FormId, FormSlot, FormSnapshot, NoteEntry, Status,
    Traveler, TravelerId, UserRef,
};
use traveler_store::{DocumentStore, SaveReceipt, TravelerFilter};

/// Orchestrates traveler mutations against the store and binder
/// collaborators.
pub struct TravelerService {
    store: Arc<dyn DocumentStore>,
    binders: Arc<dyn BinderDirectory>,
    config: ServiceConfig,
}

impl TravelerService {
    /// Create a new service
    #[inline]
    #[must_use]
    pub fn new(
        store: Arc<dyn DocumentStore>,
        binders: Arc<dyn BinderDirectory>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            store,
            binders,
            config,
        }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Create a traveler in status 0 from a template copy.
    ///
    /// The snapshot is produced by the external template collaborator;
    /// `snapshot.source_template_id` records which template it came from.
    pub async fn create_traveler(
        &self,
        snapshot: FormSnapshot,
        creator: UserRef,
    ) -> Result<Traveler, ServiceError> {
        let traveler = Traveler::new(
            snapshot,
            creator,
            self.config.default_public_access,
            Utc::now(),
        );
        tracing::info!(traveler = %traveler.id, "creating traveler");
        self.commit(traveler).await
    }

    /// Clone an existing traveler; the clone starts at status 0.
    pub async fn clone_traveler(
        &self,
        source_id: TravelerId,
        cloned_by: UserRef,
    ) -> Result<Traveler, ServiceError> {
        let source = self.store.find_by_id(source_id).await?;
        let clone = Traveler::clone_from(&source, cloned_by, Utc::now());
        tracing::info!(source = %source_id, clone = %clone.id, "cloning traveler");
        self.commit(clone).await
    }

    /// Change a traveler's lifecycle status.
    ///
    /// # Errors
    /// `InvalidTransition` (verbatim, with both endpoints) for any pair
    /// not in the transition table; nothing is written on rejection.
    pub async fn change_status(
        &self,
        id: TravelerId,
        to: Status,
        by: UserRef,
    ) -> Result<Traveler, ServiceError> {
        let mut traveler = self.store.find_by_id(id).await?;
        let from = traveler.status();
        traveler.change_status(to, by, Utc::now())?;
        tracing::info!(traveler = %id, from = %from, to = %to, "status change");
        self.commit(traveler).await
    }

    /// Attach a form snapshot to a traveler's historical collection.
    ///
    /// Does not flip the active form; activation is a separate operation.
    pub async fn attach_form(
        &self,
        id: TravelerId,
        snapshot: FormSnapshot,
        slot: FormSlot,
    ) -> Result<Traveler, ServiceError> {
        let mut traveler = self.store.find_by_id(id).await?;
        tracing::debug!(traveler = %id, form = %snapshot.id, ?slot, "attaching form");
        traveler.attach_form(snapshot, slot);
        self.commit(traveler).await
    }

    /// Activate an attached form snapshot.
    pub async fn activate_form(
        &self,
        id: TravelerId,
        form_id: FormId,
    ) -> Result<Traveler, ServiceError> {
        let mut traveler = self.store.find_by_id(id).await?;
        traveler.activate_form(form_id, Utc::now())?;
        tracing::info!(traveler = %id, form = %form_id, "form activated");
        self.commit(traveler).await
    }

    /// Record a typed data entry.
    ///
    /// Validation and the aggregate mutation both happen before anything
    /// is persisted: a rejected entry leaves counters, the touched set and
    /// storage untouched. The entry document lands immediately before the
    /// traveler commit; with document-level atomicity only, a traveler
    /// commit that fails at the store can still leave the entry behind as
    /// an unreferenced document.
    pub async fn record_data_entry(
        &self,
        id: TravelerId,
        field_name: impl Into<String>,
        value: Value,
        kind: EntryKind,
        file_metadata: Option<FileMetadata>,
        by: UserRef,
    ) -> Result<(Traveler, EntryId), ServiceError> {
        let now = Utc::now();
        let entry = DataEntry::new(id, field_name, value, kind, file_metadata, by, now)?;
        let mut traveler = self.store.find_by_id(id).await?;

        let entry_id = EntryId::new();
        traveler.apply_data_entry(&entry, entry_id, now)?;
        tracing::debug!(
            traveler = %id,
            field = %entry.field_name,
            kind = entry.kind.as_str(),
            "data entry recorded"
        );
        self.store.save_data_entry(entry_id, entry).await?;
        let traveler = self.commit(traveler).await?;
        Ok((traveler, entry_id))
    }

    /// Record a free-text note. Notes never touch the progress machinery.
    pub async fn record_note(
        &self,
        id: TravelerId,
        field_name: impl Into<String>,
        value: impl Into<String>,
        by: UserRef,
    ) -> Result<(Traveler, EntryId), ServiceError> {
        let now = Utc::now();
        let note = NoteEntry::new(id, field_name, value, by, now);
        let mut traveler = self.store.find_by_id(id).await?;

        let entry_id = EntryId::new();
        traveler.apply_note(&note, entry_id, now)?;
        self.store.save_note_entry(entry_id, note).await?;
        let traveler = self.commit(traveler).await?;
        Ok((traveler, entry_id))
    }

    /// Add a participating user to a traveler's roster
    pub async fn add_man_power(
        &self,
        id: TravelerId,
        user: UserRef,
    ) -> Result<Traveler, ServiceError> {
        let mut traveler = self.store.find_by_id(id).await?;
        traveler.add_man_power(user, Utc::now());
        self.commit(traveler).await
    }

    /// Look up a traveler by id
    pub async fn get(&self, id: TravelerId) -> Result<Traveler, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Find travelers matching a filter
    pub async fn find(&self, filter: &TravelerFilter) -> Result<Vec<Traveler>, ServiceError> {
        Ok(self.store.find_many(filter).await?)
    }

    /// Commit, then detach the cascade.
    ///
    /// The suspension point of the triggering operation ends at the store
    /// commit; the cascade task runs on its own and its outcome never
    /// reaches this caller.
    async fn commit(&self, traveler: Traveler) -> Result<Traveler, ServiceError> {
        let receipt: SaveReceipt = self.store.save_traveler(traveler.clone()).await?;
        let _detached = cascade::spawn(self.binders.clone(), traveler.clone(), receipt.changed);
        Ok(traveler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::EmptyBinderDirectory;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    use traveler_core::{AccessLevel, TemplateId, TravelerError};
    use traveler_store::{MemoryStore, StoreError};

    fn snapshot(alias: &str, fields: &[&str]) -> FormSnapshot {
        let map: BTreeMap<String, String> = fields
            .iter()
            .map(|f| ((*f).to_string(), (*f).to_string()))
            .collect();
        FormSnapshot::new(
            alias,
            json!({}),
            TemplateId(uuid::Uuid::new_v4()),
            map.clone(),
            map,
        )
    }

    fn creator() -> UserRef {
        UserRef::new("u-1", "Creator")
    }

    fn service() -> TravelerService {
        TravelerService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(EmptyBinderDirectory),
            ServiceConfig::new().with_default_public_access(AccessLevel::Read),
        )
    }

    /// Store double whose reads hand back a fixed decoy document, so the
    /// aggregate's owner check rejects the entry after the load.
    struct DecoyReadStore {
        inner: Arc<MemoryStore>,
        decoy: Traveler,
    }

    #[async_trait::async_trait]
    impl DocumentStore for DecoyReadStore {
        async fn find_by_id(&self, _id: TravelerId) -> Result<Traveler, StoreError> {
            Ok(self.decoy.clone())
        }

        async fn find_many(&self, filter: &TravelerFilter) -> Result<Vec<Traveler>, StoreError> {
            self.inner.find_many(filter).await
        }

        async fn save_traveler(&self, traveler: Traveler) -> Result<SaveReceipt, StoreError> {
            self.inner.save_traveler(traveler).await
        }

        async fn save_data_entry(&self, id: EntryId, entry: DataEntry) -> Result<(), StoreError> {
            self.inner.save_data_entry(id, entry).await
        }

        async fn save_note_entry(&self, id: EntryId, note: NoteEntry) -> Result<(), StoreError> {
            self.inner.save_note_entry(id, note).await
        }

        async fn find_data_entry(&self, id: EntryId) -> Result<DataEntry, StoreError> {
            self.inner.find_data_entry(id).await
        }

        async fn find_note_entry(&self, id: EntryId) -> Result<NoteEntry, StoreError> {
            self.inner.find_note_entry(id).await
        }
    }

    #[tokio::test]
    async fn create_applies_configured_public_access() {
        let service = service();
        let traveler = service
            .create_traveler(snapshot("rev-a", &["a"]), creator())
            .await
            .unwrap();
        assert_eq!(traveler.status(), Status::Initialized);
        assert_eq!(traveler.public_access, AccessLevel::Read);

        let stored = service.get(traveler.id).await.unwrap();
        assert_eq!(stored, traveler);
    }

    #[tokio::test]
    async fn invalid_transition_writes_nothing() {
        let service = service();
        let traveler = service
            .create_traveler(snapshot("rev-a", &["a"]), creator())
            .await
            .unwrap();

        let err = service
            .change_status(traveler.id, Status::Completed, creator())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(TravelerError::InvalidTransition {
                from: Status::Initialized,
                to: Status::Completed,
            })
        ));

        let stored = service.get(traveler.id).await.unwrap();
        assert_eq!(stored.status(), Status::Initialized);
    }

    #[tokio::test]
    async fn rejected_entry_persists_nothing() {
        let service = service();
        let traveler = service
            .create_traveler(snapshot("rev-a", &["weight"]), creator())
            .await
            .unwrap();

        let err = service
            .record_data_entry(
                traveler.id,
                "weight",
                json!("not a number"),
                EntryKind::Number,
                None,
                creator(),
            )
            .await
            .unwrap_err();
        assert!(err.is_client_error());

        let stored = service.get(traveler.id).await.unwrap();
        assert_eq!(stored.finished_input(), 0);
        assert!(stored.touched_inputs().is_empty());
        assert!(stored.data_entry_ids().is_empty());
    }

    #[tokio::test]
    async fn entry_rejected_after_load_persists_no_entry_document() {
        let inner = Arc::new(MemoryStore::new());
        let decoy = Traveler::new(snapshot("rev-a", &["a"]), creator(), AccessLevel::None, Utc::now());
        let service = TravelerService::new(
            Arc::new(DecoyReadStore {
                inner: inner.clone(),
                decoy,
            }),
            Arc::new(EmptyBinderDirectory),
            ServiceConfig::new(),
        );

        let requested = TravelerId::new();
        let err = service
            .record_data_entry(
                requested,
                "a",
                json!("value"),
                EntryKind::Text,
                None,
                creator(),
            )
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(inner.data_entry_count(), 0);

        let err = service
            .record_note(requested, "a", "stray note", creator())
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(inner.note_entry_count(), 0);
    }

    #[tokio::test]
    async fn missing_traveler_surfaces_store_error() {
        let service = service();
        let id = TravelerId::new();
        let err = service.get(id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Store(StoreError::TravelerNotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn clone_via_service_starts_fresh() {
        let service = service();
        let source = service
            .create_traveler(snapshot("rev-a", &["a"]), creator())
            .await
            .unwrap();
        service
            .change_status(source.id, Status::Active, creator())
            .await
            .unwrap();

        let clone = service
            .clone_traveler(source.id, UserRef::new("u-9", "Cloner"))
            .await
            .unwrap();
        assert_eq!(clone.status(), Status::Initialized);
        assert_eq!(clone.cloned_from, Some(source.id));
        assert!(service.get(clone.id).await.is_ok());
    }
}
