//! The traveler aggregate root
//!
//! A traveler is a work-order document moving through the fixed lifecycle,
//! carrying one active form snapshot, the roster of data/note entry
//! references and the derived progress counters. All mutations run through
//! the methods here so the status state machine and the progress invariants
//! hold at every commit point.

use crate::entry::{DataEntry, NoteEntry};
use crate::error::TravelerError;
use crate::form::FormSnapshot;
use crate::progress;
use crate::state_machine;
use crate::types::{AccessLevel, EntryId, FormId, Status, TravelerField, TravelerId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which historical collection a form snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormSlot {
    /// Regular work form
    Primary,
    /// Discrepancy form
    Discrepancy,
}

/// The aggregate root.
///
/// Invariant-bearing fields (status, active form ids, live field maps,
/// touched set, counters) are private; sharing and audit data are plain
/// stored values consumed by external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    /// Opaque unique id
    pub id: TravelerId,
    status: Status,
    active_form: Option<FormId>,
    active_discrepancy_form: Option<FormId>,
    forms: Vec<FormSnapshot>,
    discrepancy_forms: Vec<FormSnapshot>,
    field_key_to_name: BTreeMap<String, String>,
    name_to_label: BTreeMap<String, String>,
    touched_inputs: BTreeSet<String>,
    total_input: u32,
    finished_input: u32,
    data_entry_ids: Vec<EntryId>,
    note_entry_ids: Vec<EntryId>,
    man_power: Vec<UserRef>,
    /// Per-user share level; stored only, evaluated externally
    pub shared_with: AccessLevel,
    /// Per-group share level; stored only, evaluated externally
    pub shared_group: AccessLevel,
    /// Public access level; stored only, evaluated externally
    pub public_access: AccessLevel,
    /// Creator
    pub created_by: UserRef,
    /// Creation time
    pub created_on: DateTime<Utc>,
    /// Last writer
    pub updated_by: UserRef,
    /// Last write time
    pub updated_on: DateTime<Utc>,
    /// Set when the traveler reaches status 4
    pub archived_on: Option<DateTime<Utc>>,
    /// Set by an external transfer flow
    pub transferred_on: Option<DateTime<Utc>>,
    /// Who cloned this traveler, if it is a clone
    pub cloned_by: Option<UserRef>,
    /// Source traveler, if this one is a clone
    pub cloned_from: Option<TravelerId>,
    archived: bool,
}

impl Traveler {
    /// Create a traveler in status 0 with an activated form snapshot.
    ///
    /// The snapshot is the external collaborator's copy of a canonical
    /// template; it lands in `forms` and becomes active immediately.
    #[must_use]
    pub fn new(
        snapshot: FormSnapshot,
        created_by: UserRef,
        public_access: AccessLevel,
        now: DateTime<Utc>,
    ) -> Self {
        let mut traveler = Self {
            id: TravelerId::new(),
            status: Status::Initialized,
            active_form: None,
            active_discrepancy_form: None,
            forms: Vec::new(),
            discrepancy_forms: Vec::new(),
            field_key_to_name: BTreeMap::new(),
            name_to_label: BTreeMap::new(),
            touched_inputs: BTreeSet::new(),
            total_input: 0,
            finished_input: 0,
            data_entry_ids: Vec::new(),
            note_entry_ids: Vec::new(),
            man_power: Vec::new(),
            shared_with: AccessLevel::None,
            shared_group: AccessLevel::None,
            public_access,
            created_by: created_by.clone(),
            created_on: now,
            updated_by: created_by,
            updated_on: now,
            archived_on: None,
            transferred_on: None,
            cloned_by: None,
            cloned_from: None,
            archived: false,
        };
        traveler.attach_form(snapshot, FormSlot::Primary);
        traveler.activate_index(FormSlot::Primary, 0, now);
        traveler
    }

    /// Clone a traveler.
    ///
    /// The clone starts at status 0 regardless of the source status, with
    /// fresh identity and empty entry roster. Form snapshots, live field
    /// maps, man power and sharing carry over.
    #[must_use]
    pub fn clone_from(source: &Traveler, cloned_by: UserRef, now: DateTime<Utc>) -> Self {
        let mut clone = Self {
            id: TravelerId::new(),
            status: Status::Initialized,
            active_form: source.active_form,
            active_discrepancy_form: source.active_discrepancy_form,
            forms: source.forms.clone(),
            discrepancy_forms: source.discrepancy_forms.clone(),
            field_key_to_name: source.field_key_to_name.clone(),
            name_to_label: source.name_to_label.clone(),
            touched_inputs: BTreeSet::new(),
            total_input: 0,
            finished_input: 0,
            data_entry_ids: Vec::new(),
            note_entry_ids: Vec::new(),
            man_power: source.man_power.clone(),
            shared_with: source.shared_with,
            shared_group: source.shared_group,
            public_access: source.public_access,
            created_by: cloned_by.clone(),
            created_on: now,
            updated_by: cloned_by.clone(),
            updated_on: now,
            archived_on: None,
            transferred_on: None,
            cloned_by: Some(cloned_by),
            cloned_from: Some(source.id),
            archived: false,
        };
        if let Some(active) = clone.active_form {
            if let Some(index) = clone.forms.iter().position(|s| s.id == active) {
                clone.activate_index(FormSlot::Primary, index, now);
            }
        }
        clone
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Active form snapshot id, if any
    #[inline]
    #[must_use]
    pub fn active_form(&self) -> Option<FormId> {
        self.active_form
    }

    /// Active discrepancy form snapshot id, if any
    #[inline]
    #[must_use]
    pub fn active_discrepancy_form(&self) -> Option<FormId> {
        self.active_discrepancy_form
    }

    /// Historical form snapshots
    #[inline]
    #[must_use]
    pub fn forms(&self) -> &[FormSnapshot] {
        &self.forms
    }

    /// Historical discrepancy form snapshots
    #[inline]
    #[must_use]
    pub fn discrepancy_forms(&self) -> &[FormSnapshot] {
        &self.discrepancy_forms
    }

    /// Look up an attached snapshot by id, either slot
    #[must_use]
    pub fn form(&self, form_id: FormId) -> Option<&FormSnapshot> {
        self.forms
            .iter()
            .chain(self.discrepancy_forms.iter())
            .find(|s| s.id == form_id)
    }

    /// Live key-to-name copy, seeded from the active snapshot
    #[inline]
    #[must_use]
    pub fn field_key_to_name(&self) -> &BTreeMap<String, String> {
        &self.field_key_to_name
    }

    /// Live name-to-label copy, seeded from the active snapshot
    #[inline]
    #[must_use]
    pub fn name_to_label(&self) -> &BTreeMap<String, String> {
        &self.name_to_label
    }

    /// Fields that have ever received a data entry (append-only history)
    #[inline]
    #[must_use]
    pub fn touched_inputs(&self) -> &BTreeSet<String> {
        &self.touched_inputs
    }

    /// Fields defined by the active form
    #[inline]
    #[must_use]
    pub fn total_input(&self) -> u32 {
        self.total_input
    }

    /// Touched fields counted against the active form
    #[inline]
    #[must_use]
    pub fn finished_input(&self) -> u32 {
        self.finished_input
    }

    /// Ordered data entry references
    #[inline]
    #[must_use]
    pub fn data_entry_ids(&self) -> &[EntryId] {
        &self.data_entry_ids
    }

    /// Ordered note entry references
    #[inline]
    #[must_use]
    pub fn note_entry_ids(&self) -> &[EntryId] {
        &self.note_entry_ids
    }

    /// Participating users
    #[inline]
    #[must_use]
    pub fn man_power(&self) -> &[UserRef] {
        &self.man_power
    }

    /// Whether the traveler is archived
    #[inline]
    #[must_use]
    pub fn archived(&self) -> bool {
        self.archived
    }

    /// Append a snapshot to the historical collection for `slot`.
    ///
    /// This is the seam the external template-copy collaborator uses; it
    /// never flips the active form.
    pub fn attach_form(&mut self, snapshot: FormSnapshot, slot: FormSlot) {
        match slot {
            FormSlot::Primary => self.forms.push(snapshot),
            FormSlot::Discrepancy => self.discrepancy_forms.push(snapshot),
        }
    }

    /// Flip the active form to an already-attached snapshot.
    ///
    /// Copies the snapshot's field maps into the live fields, stamps a new
    /// activation date on the snapshot and recomputes progress against the
    /// new field set. Recorded entries are never mutated; entries tied to
    /// fields absent from the new form simply stop counting.
    ///
    /// # Errors
    /// `FormNotAttached` if the snapshot is in neither historical
    /// collection.
    pub fn activate_form(
        &mut self,
        form_id: FormId,
        now: DateTime<Utc>,
    ) -> Result<(), TravelerError> {
        if let Some(index) = self.forms.iter().position(|s| s.id == form_id) {
            self.activate_index(FormSlot::Primary, index, now);
        } else if let Some(index) = self.discrepancy_forms.iter().position(|s| s.id == form_id) {
            self.activate_index(FormSlot::Discrepancy, index, now);
        } else {
            return Err(TravelerError::FormNotAttached(form_id));
        }
        Ok(())
    }

    /// Activate the snapshot at `index` in the collection for `slot`.
    /// Callers resolve the index first, so this path cannot miss.
    fn activate_index(&mut self, slot: FormSlot, index: usize, now: DateTime<Utc>) {
        let snapshot = match slot {
            FormSlot::Primary => &mut self.forms[index],
            FormSlot::Discrepancy => &mut self.discrepancy_forms[index],
        };
        snapshot.record_activation(now);
        let form_id = snapshot.id;
        self.field_key_to_name = snapshot.field_key_to_name().clone();
        self.name_to_label = snapshot.name_to_label().clone();
        match slot {
            FormSlot::Primary => self.active_form = Some(form_id),
            FormSlot::Discrepancy => self.active_discrepancy_form = Some(form_id),
        }
        self.recompute_progress();
    }

    /// Request a status change.
    ///
    /// # Errors
    /// `InvalidTransition` for any pair not in the transition table.
    pub fn change_status(
        &mut self,
        to: Status,
        by: UserRef,
        now: DateTime<Utc>,
    ) -> Result<(), TravelerError> {
        state_machine::validate_transition(self.status, to)?;
        self.status = to;
        if to == Status::Archived {
            self.archived = true;
            self.archived_on = Some(now);
        }
        self.touch_audit(by, now);
        Ok(())
    }

    /// Accept an already-validated data entry.
    ///
    /// Appends the reference and, when the field is defined by the active
    /// form, marks it touched. A second entry for the same field does not
    /// increment `finished_input` again.
    ///
    /// # Errors
    /// `Validation` if the entry belongs to a different traveler.
    pub fn apply_data_entry(
        &mut self,
        entry: &DataEntry,
        entry_id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), TravelerError> {
        if entry.owner_traveler_id != self.id {
            return Err(TravelerError::Validation {
                field: entry.field_name.clone(),
                reason: format!(
                    "entry owner {} does not match traveler {}",
                    entry.owner_traveler_id, self.id
                ),
            });
        }
        self.data_entry_ids.push(entry_id);
        if self.name_to_label.contains_key(&entry.field_name) {
            self.touched_inputs.insert(entry.field_name.clone());
            self.recompute_progress();
        }
        self.touch_audit(entry.entered_by.clone(), now);
        Ok(())
    }

    /// Accept a note entry. Notes never touch the progress machinery.
    ///
    /// # Errors
    /// `Validation` if the note belongs to a different traveler.
    pub fn apply_note(
        &mut self,
        note: &NoteEntry,
        entry_id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<(), TravelerError> {
        if note.owner_traveler_id != self.id {
            return Err(TravelerError::Validation {
                field: note.field_name.clone(),
                reason: format!(
                    "note owner {} does not match traveler {}",
                    note.owner_traveler_id, self.id
                ),
            });
        }
        self.note_entry_ids.push(entry_id);
        self.touch_audit(note.entered_by.clone(), now);
        Ok(())
    }

    /// Add a participating user; set semantics keyed by user id
    pub fn add_man_power(&mut self, user: UserRef, now: DateTime<Utc>) {
        if !self.man_power.iter().any(|u| u.id == user.id) {
            self.man_power.push(user.clone());
        }
        self.touch_audit(user, now);
    }

    /// Compare against the prior persisted document, field by field.
    ///
    /// The store passes the result into the post-commit cascade step, so
    /// the cascade sees exactly which fields the commit changed rather
    /// than "something changed".
    #[must_use]
    pub fn diff_fields(&self, prior: &Traveler) -> BTreeSet<TravelerField> {
        let mut changed = BTreeSet::new();
        let mut track = |differs: bool, field: TravelerField| {
            if differs {
                changed.insert(field);
            }
        };
        track(self.status != prior.status, TravelerField::Status);
        track(self.total_input != prior.total_input, TravelerField::TotalInput);
        track(
            self.finished_input != prior.finished_input,
            TravelerField::FinishedInput,
        );
        track(
            self.touched_inputs != prior.touched_inputs,
            TravelerField::TouchedInputs,
        );
        track(self.active_form != prior.active_form, TravelerField::ActiveForm);
        track(
            self.active_discrepancy_form != prior.active_discrepancy_form,
            TravelerField::ActiveDiscrepancyForm,
        );
        track(self.forms != prior.forms, TravelerField::Forms);
        track(
            self.discrepancy_forms != prior.discrepancy_forms,
            TravelerField::DiscrepancyForms,
        );
        track(
            self.data_entry_ids != prior.data_entry_ids,
            TravelerField::DataEntries,
        );
        track(
            self.note_entry_ids != prior.note_entry_ids,
            TravelerField::NoteEntries,
        );
        track(self.man_power != prior.man_power, TravelerField::ManPower);
        track(
            self.shared_with != prior.shared_with
                || self.shared_group != prior.shared_group
                || self.public_access != prior.public_access,
            TravelerField::Shared,
        );
        track(self.archived != prior.archived, TravelerField::Archived);
        track(self.archived_on != prior.archived_on, TravelerField::ArchivedOn);
        track(
            self.transferred_on != prior.transferred_on,
            TravelerField::TransferredOn,
        );
        track(self.updated_by != prior.updated_by, TravelerField::UpdatedBy);
        track(self.updated_on != prior.updated_on, TravelerField::UpdatedOn);
        changed
    }

    fn recompute_progress(&mut self) {
        let counters = progress::recompute(&self.name_to_label, &self.touched_inputs);
        self.total_input = counters.total_input;
        self.finished_input = counters.finished_input;
    }

    fn touch_audit(&mut self, by: UserRef, now: DateTime<Utc>) {
        self.updated_by = by;
        self.updated_on = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;
    use crate::form::test_support::snapshot_with_fields;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn creator() -> UserRef {
        UserRef::new("u-1", "Creator")
    }

    fn worker() -> UserRef {
        UserRef::new("u-2", "Worker")
    }

    fn new_traveler(fields: &[&str]) -> Traveler {
        Traveler::new(
            snapshot_with_fields("rev-a", fields),
            creator(),
            AccessLevel::None,
            Utc::now(),
        )
    }

    fn entry_for(traveler: &Traveler, field: &str) -> DataEntry {
        DataEntry::new(
            traveler.id,
            field,
            json!("value"),
            EntryKind::Text,
            None,
            worker(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn new_traveler_starts_initialized_with_active_form() {
        let traveler = new_traveler(&["a", "b", "c"]);
        assert_eq!(traveler.status(), Status::Initialized);
        assert_eq!(traveler.forms().len(), 1);
        assert_eq!(traveler.active_form(), Some(traveler.forms()[0].id));
        assert_eq!(traveler.total_input(), 3);
        assert_eq!(traveler.finished_input(), 0);
        assert_eq!(traveler.forms()[0].activated_dates().len(), 1);
        assert!(!traveler.archived());
    }

    #[test]
    fn change_status_walks_the_table() {
        let mut t = new_traveler(&["a"]);
        let now = Utc::now();
        t.change_status(Status::Active, worker(), now).unwrap();
        t.change_status(Status::SubmittedForCompletion, worker(), now)
            .unwrap();
        t.change_status(Status::Completed, worker(), now).unwrap();
        t.change_status(Status::Archived, worker(), now).unwrap();
        assert_eq!(t.status(), Status::Archived);
        assert!(t.archived());
        assert!(t.archived_on.is_some());
    }

    #[test]
    fn change_status_rejects_pairs_outside_the_table() {
        let mut t = new_traveler(&["a"]);
        let err = t
            .change_status(Status::Completed, worker(), Utc::now())
            .unwrap_err();
        assert_eq!(
            err,
            TravelerError::InvalidTransition {
                from: Status::Initialized,
                to: Status::Completed,
            }
        );
        // Nothing mutated on rejection.
        assert_eq!(t.status(), Status::Initialized);
        assert!(!t.archived());
    }

    #[test]
    fn data_entry_touches_defined_field_once() {
        let mut t = new_traveler(&["a", "b", "c"]);
        let entry = entry_for(&t, "a");

        t.apply_data_entry(&entry, EntryId::new(), Utc::now()).unwrap();
        assert_eq!(t.touched_inputs().len(), 1);
        assert!(t.touched_inputs().contains("a"));
        assert_eq!(t.finished_input(), 1);
        assert_eq!(t.total_input(), 3);

        // Idempotent touch: a second entry for the same field.
        t.apply_data_entry(&entry, EntryId::new(), Utc::now()).unwrap();
        assert_eq!(t.finished_input(), 1);
        assert_eq!(t.data_entry_ids().len(), 2);
    }

    #[test]
    fn entry_for_undefined_field_is_kept_but_not_counted() {
        let mut t = new_traveler(&["a"]);
        let entry = entry_for(&t, "zz");
        t.apply_data_entry(&entry, EntryId::new(), Utc::now()).unwrap();
        assert_eq!(t.finished_input(), 0);
        assert_eq!(t.data_entry_ids().len(), 1);
        assert!(t.touched_inputs().is_empty());
    }

    #[test]
    fn entry_owned_by_other_traveler_is_rejected() {
        let mut t = new_traveler(&["a"]);
        let other = new_traveler(&["a"]);
        let entry = entry_for(&other, "a");
        let err = t.apply_data_entry(&entry, EntryId::new(), Utc::now()).unwrap_err();
        assert!(err.is_validation());
        assert!(t.data_entry_ids().is_empty());
    }

    #[test]
    fn notes_never_move_progress() {
        let mut t = new_traveler(&["a"]);
        let note = NoteEntry::new(t.id, "a", "looks fine", worker(), Utc::now());
        t.apply_note(&note, EntryId::new(), Utc::now()).unwrap();
        assert_eq!(t.note_entry_ids().len(), 1);
        assert_eq!(t.finished_input(), 0);
        assert!(t.touched_inputs().is_empty());
    }

    #[test]
    fn reactivation_recomputes_against_new_field_set() {
        // Active form {a, b, c}; touch a and b.
        let mut t = new_traveler(&["a", "b", "c"]);
        for field in ["a", "b"] {
            let entry = entry_for(&t, field);
            t.apply_data_entry(&entry, EntryId::new(), Utc::now()).unwrap();
        }
        assert_eq!(t.finished_input(), 2);

        // Switch to a form defining {a, d}.
        let next = snapshot_with_fields("rev-b", &["a", "d"]);
        let next_id = next.id;
        t.attach_form(next, FormSlot::Primary);
        t.activate_form(next_id, Utc::now()).unwrap();

        assert_eq!(t.total_input(), 2);
        assert_eq!(t.finished_input(), 1);
        // History preserved: b stays touched, entries untouched.
        assert!(t.touched_inputs().contains("b"));
        assert_eq!(t.data_entry_ids().len(), 2);

        // Old field reappears: it counts again.
        let back = snapshot_with_fields("rev-a2", &["a", "b"]);
        let back_id = back.id;
        t.attach_form(back, FormSlot::Primary);
        t.activate_form(back_id, Utc::now()).unwrap();
        assert_eq!(t.finished_input(), 2);
    }

    #[test]
    fn activate_unattached_form_fails() {
        let mut t = new_traveler(&["a"]);
        let stray = FormId::new();
        assert_eq!(
            t.activate_form(stray, Utc::now()),
            Err(TravelerError::FormNotAttached(stray))
        );
    }

    #[test]
    fn discrepancy_form_activation_uses_its_own_slot() {
        let mut t = new_traveler(&["a"]);
        let disc = snapshot_with_fields("disc-a", &["x", "y"]);
        let disc_id = disc.id;
        t.attach_form(disc, FormSlot::Discrepancy);
        t.activate_form(disc_id, Utc::now()).unwrap();

        assert_eq!(t.active_discrepancy_form(), Some(disc_id));
        // Primary active form id is untouched.
        assert_eq!(t.active_form(), Some(t.forms()[0].id));
        assert_eq!(t.total_input(), 2);
    }

    #[test]
    fn clone_starts_at_status_zero() {
        let mut source = new_traveler(&["a", "b"]);
        let now = Utc::now();
        source.change_status(Status::Active, worker(), now).unwrap();
        let entry = entry_for(&source, "a");
        source.apply_data_entry(&entry, EntryId::new(), now).unwrap();
        source
            .change_status(Status::SubmittedForCompletion, worker(), now)
            .unwrap();

        let clone = Traveler::clone_from(&source, worker(), now);
        assert_eq!(clone.status(), Status::Initialized);
        assert_eq!(clone.cloned_from, Some(source.id));
        assert_eq!(clone.cloned_by.as_ref().map(|u| u.id.as_str()), Some("u-2"));
        assert_ne!(clone.id, source.id);
        assert!(clone.data_entry_ids().is_empty());
        assert!(clone.touched_inputs().is_empty());
        assert_eq!(clone.finished_input(), 0);
        assert_eq!(clone.total_input(), 2);
        assert_eq!(clone.forms().len(), 1);
        assert!(!clone.archived());
    }

    #[test]
    fn clone_reactivation_stamps_a_fresh_date() {
        let source = new_traveler(&["a"]);
        let clone = Traveler::clone_from(&source, worker(), Utc::now());

        assert_eq!(clone.active_form(), source.active_form());
        assert_eq!(clone.total_input(), 1);
        // The clone's copy of the snapshot gains an activation date; the
        // source snapshot keeps its own history.
        assert_eq!(clone.forms()[0].activated_dates().len(), 2);
        assert_eq!(source.forms()[0].activated_dates().len(), 1);
    }

    #[test]
    fn man_power_is_a_set_by_user_id() {
        let mut t = new_traveler(&["a"]);
        t.add_man_power(worker(), Utc::now());
        t.add_man_power(UserRef::new("u-2", "Worker Renamed"), Utc::now());
        assert_eq!(t.man_power().len(), 1);
    }

    #[test]
    fn diff_fields_reports_exactly_what_changed() {
        let t = new_traveler(&["a", "b"]);
        let prior = t.clone();

        let mut updated = t.clone();
        let later = Utc::now() + chrono::Duration::seconds(1);
        updated
            .change_status(Status::Active, worker(), later)
            .unwrap();

        let changed = updated.diff_fields(&prior);
        assert!(changed.contains(&TravelerField::Status));
        assert!(changed.contains(&TravelerField::UpdatedOn));
        assert!(!changed.contains(&TravelerField::TotalInput));
        assert!(!changed.contains(&TravelerField::FinishedInput));
        assert!(!changed.contains(&TravelerField::Archived));

        // Audit-only change reports no cascade trigger.
        let mut audit_only = prior.clone();
        audit_only.touch_audit(worker(), later);
        let changed = audit_only.diff_fields(&prior);
        assert!(TravelerField::CASCADE_TRIGGERS
            .iter()
            .all(|f| !changed.contains(f)));
        assert!(changed.contains(&TravelerField::UpdatedOn));
    }

    #[test]
    fn traveler_serde_round_trip() {
        let mut t = new_traveler(&["a"]);
        t.change_status(Status::Active, worker(), Utc::now()).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Traveler = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.status(), Status::Active);
    }
}
