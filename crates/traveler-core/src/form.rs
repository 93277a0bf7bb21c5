//! Immutable form snapshots
//!
//! A snapshot freezes the structure a traveler was created (or re-bound)
//! with: the rendered template blob, the key-to-name mapping and the
//! name-to-label mapping. Travelers embed snapshots rather than referencing
//! the canonical template, so template edits never retroactively alter
//! historical travelers.

use crate::types::{FormId, TemplateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time copy of a form template's structure.
///
/// `field_key_to_name` and `name_to_label` are fixed at construction; only
/// `activated_dates` grows, one timestamp per activation as a traveler's
/// active form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Snapshot identity
    pub id: FormId,
    /// Human-readable short name; unique by convention only, not identity
    pub alias: String,
    /// Opaque structural/rendering description, treated as a blob
    pub template: serde_json::Value,
    /// Canonical template this snapshot was copied from (audit only)
    pub source_template_id: TemplateId,
    field_key_to_name: BTreeMap<String, String>,
    name_to_label: BTreeMap<String, String>,
    activated_dates: Vec<DateTime<Utc>>,
}

impl FormSnapshot {
    /// Create a new snapshot from a template copy.
    ///
    /// The field mappings are frozen here and never mutated afterwards.
    #[must_use]
    pub fn new(
        alias: impl Into<String>,
        template: serde_json::Value,
        source_template_id: TemplateId,
        field_key_to_name: BTreeMap<String, String>,
        name_to_label: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id: FormId::new(),
            alias: alias.into(),
            template,
            source_template_id,
            field_key_to_name,
            name_to_label,
            activated_dates: Vec::new(),
        }
    }

    /// Internal field name for a user-facing key
    #[inline]
    #[must_use]
    pub fn field_name(&self, key: &str) -> Option<&str> {
        self.field_key_to_name.get(key).map(String::as_str)
    }

    /// Display label for an internal field name
    #[inline]
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&str> {
        self.name_to_label.get(name).map(String::as_str)
    }

    /// Key-to-name mapping, read-only
    #[inline]
    #[must_use]
    pub fn field_key_to_name(&self) -> &BTreeMap<String, String> {
        &self.field_key_to_name
    }

    /// Name-to-label mapping, read-only.
    ///
    /// The key set of this map defines the fields the form counts toward
    /// progress.
    #[inline]
    #[must_use]
    pub fn name_to_label(&self) -> &BTreeMap<String, String> {
        &self.name_to_label
    }

    /// Distinct field names defined by this snapshot
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.name_to_label.len()
    }

    /// Timestamps of each activation, oldest first
    #[inline]
    #[must_use]
    pub fn activated_dates(&self) -> &[DateTime<Utc>] {
        &self.activated_dates
    }

    /// Stamp a new activation
    pub fn record_activation(&mut self, now: DateTime<Utc>) {
        self.activated_dates.push(now);
    }
}
