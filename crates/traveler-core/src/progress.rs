//! Progress aggregation
//!
//! Keeps `total_input` / `finished_input` consistent with the cross product
//! of the active form's field set and the set of fields that have received
//! at least one typed data entry.
//!
//! Touched semantics are append-only: once a field has been answered it is
//! counted as touched for as long as it stays in the traveler's history,
//! matching "has ever been answered" rather than "is currently answered".
//! Fields touched under a retired form stop counting toward
//! `finished_input` until the field reappears in the active form.

use std::collections::{BTreeMap, BTreeSet};

/// Derived progress counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressCounters {
    /// Distinct field names defined by the active form
    pub total_input: u32,
    /// Touched fields that the active form defines
    pub finished_input: u32,
}

/// Recompute counters from the active field set and the touched history.
///
/// `name_to_label` is the traveler's live copy of the active snapshot's
/// field map; its key set defines which fields count.
#[must_use]
pub fn recompute(
    name_to_label: &BTreeMap<String, String>,
    touched_inputs: &BTreeSet<String>,
) -> ProgressCounters {
    let finished = touched_inputs
        .iter()
        .filter(|field| name_to_label.contains_key(*field))
        .count();
    ProgressCounters {
        total_input: name_to_label.len() as u32,
        finished_input: finished as u32,
    }
}
