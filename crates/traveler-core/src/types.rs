//! Core identifier and vocabulary types
//!
//! Defines the fundamental types shared across the traveler domain:
//! - Opaque ids for travelers, forms, templates and entries
//! - The fixed status vocabulary and its numeric wire codes
//! - Access levels and participant references
//! - The changed-field enumeration used by save receipts

use crate::error::TravelerError;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;
use uuid::Uuid;

/// Unique traveler identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TravelerId(pub Uuid);

impl TravelerId {
    /// Generate new traveler ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TravelerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique form snapshot identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormId(pub Uuid);

impl FormId {
    /// Generate new form ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the canonical template a snapshot was copied from.
///
/// Audit only: never dereferenced for live structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique entry identifier (ULID for sortability; entries are ordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Ulid);

impl EntryId {
    /// Generate new entry ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participating user: id plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Stable user identifier
    pub id: String,
    /// Display name as rendered in rosters
    pub display_name: String,
}

impl UserRef {
    /// Create new user reference
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Access level for sharing fields.
///
/// Stored by this core, evaluated by an external authorization collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    /// -1: no access
    None,
    /// 0: read access
    Read,
    /// 1: write access
    Write,
}

impl AccessLevel {
    /// Numeric wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            AccessLevel::None => -1,
            AccessLevel::Read => 0,
            AccessLevel::Write => 1,
        }
    }

    /// Parse wire code; anything outside {-1, 0, 1} fails fast
    pub fn from_code(code: i8) -> Result<Self, TravelerError> {
        match code {
            -1 => Ok(AccessLevel::None),
            0 => Ok(AccessLevel::Read),
            1 => Ok(AccessLevel::Write),
            other => Err(TravelerError::UnknownAccessCode(other)),
        }
    }
}

impl Default for AccessLevel {
    fn default() -> Self {
        AccessLevel::None
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i8::deserialize(deserializer)?;
        AccessLevel::from_code(code).map_err(de::Error::custom)
    }
}

/// Traveler lifecycle status.
///
/// The numeric codes and human labels are part of the public contract;
/// consumers render them verbatim. The set is fixed by design: no dynamic
/// registration of new states is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 0: created, no work started
    Initialized,
    /// 1: work in progress
    Active,
    /// 1.5: submitted for completion review
    SubmittedForCompletion,
    /// 2: completed
    Completed,
    /// 3: frozen, no edits accepted
    Frozen,
    /// 4: archived (terminal)
    Archived,
}

impl Status {
    /// All states, in wire-code order
    pub const ALL: [Status; 6] = [
        Status::Initialized,
        Status::Active,
        Status::SubmittedForCompletion,
        Status::Completed,
        Status::Frozen,
        Status::Archived,
    ];

    /// Numeric wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> f64 {
        match self {
            Status::Initialized => 0.0,
            Status::Active => 1.0,
            Status::SubmittedForCompletion => 1.5,
            Status::Completed => 2.0,
            Status::Frozen => 3.0,
            Status::Archived => 4.0,
        }
    }

    /// Human label, rendered verbatim by consumers
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Initialized => "initialized",
            Status::Active => "active",
            Status::SubmittedForCompletion => "submitted for completion",
            Status::Completed => "completed",
            Status::Frozen => "frozen",
            Status::Archived => "archived",
        }
    }

    /// Parse wire code; any value outside the six codes fails fast
    pub fn from_code(code: f64) -> Result<Self, TravelerError> {
        Status::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(TravelerError::UnknownStatusCode(code))
    }

    /// Whether this status is terminal (no outgoing transitions)
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        crate::state_machine::allowed_transitions(self).is_empty()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Initialized
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.code())
    }
}

struct StatusVisitor;

impl Visitor<'_> for StatusVisitor {
    type Value = Status;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a numeric status code in {{0, 1, 1.5, 2, 3, 4}}")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Status, E> {
        Status::from_code(v).map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Status, E> {
        Status::from_code(v as f64).map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Status, E> {
        Status::from_code(v as f64).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_f64(StatusVisitor)
    }
}

/// Top-level persisted traveler fields, as reported by save receipts.
///
/// The store compares these field by field against the prior persisted
/// document; the cascade step consumes the resulting set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TravelerField {
    Status,
    TotalInput,
    FinishedInput,
    TouchedInputs,
    ActiveForm,
    ActiveDiscrepancyForm,
    Forms,
    DiscrepancyForms,
    DataEntries,
    NoteEntries,
    ManPower,
    Shared,
    Archived,
    ArchivedOn,
    TransferredOn,
    UpdatedBy,
    UpdatedOn,
}

impl TravelerField {
    /// Fields whose change triggers the binder cascade
    pub const CASCADE_TRIGGERS: [TravelerField; 3] = [
        TravelerField::Status,
        TravelerField::TotalInput,
        TravelerField::FinishedInput,
    ];

    /// Every tracked field; a first insert reports all of them as changed
    pub const ALL: [TravelerField; 17] = [
        TravelerField::Status,
        TravelerField::TotalInput,
        TravelerField::FinishedInput,
        TravelerField::TouchedInputs,
        TravelerField::ActiveForm,
        TravelerField::ActiveDiscrepancyForm,
        TravelerField::Forms,
        TravelerField::DiscrepancyForms,
        TravelerField::DataEntries,
        TravelerField::NoteEntries,
        TravelerField::ManPower,
        TravelerField::Shared,
        TravelerField::Archived,
        TravelerField::ArchivedOn,
        TravelerField::TransferredOn,
        TravelerField::UpdatedBy,
        TravelerField::UpdatedOn,
    ];
}
