//! Status transition legality
//!
//! The transition table is static and exhaustive: queried by value, built
//! into the binary, with no dynamic registration of new states.

use crate::error::TravelerError;
use crate::types::Status;

/// Successor set for a status.
///
/// Archived has no outgoing edges (terminal); Initialized has no incoming
/// edges (initial-only). No self-loops.
#[must_use]
pub fn allowed_transitions(from: Status) -> &'static [Status] {
    use Status::*;
    match from {
        Initialized => &[Active, Archived],
        Active => &[SubmittedForCompletion, Frozen, Archived],
        SubmittedForCompletion => &[Active, Completed],
        Completed => &[Archived],
        Frozen => &[Active],
        Archived => &[],
    }
}

/// True iff `to` is in the successor set of `from`
#[inline]
#[must_use]
pub fn can_transition(from: Status, to: Status) -> bool {
    allowed_transitions(from).contains(&to)
}

/// Validates a status transition.
///
/// Any pair not present in the table fails with `InvalidTransition`
/// identifying both endpoints.
pub fn validate_transition(from: Status, to: Status) -> Result<(), TravelerError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(TravelerError::InvalidTransition { from, to })
    }
}
