//! Error types for the traveler domain
//!
//! Covers:
//! - Illegal status transitions
//! - Typed data entry validation failures
//! - Unknown wire codes for status, access level and entry kind
//! - Form binding preconditions

use crate::types::{FormId, Status};

/// Main traveler domain error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TravelerError {
    /// Requested status change not present in the transition table.
    ///
    /// Surfaced to the caller verbatim with both endpoints; never
    /// auto-retried.
    #[error("invalid transition: {from} ({from_code}) -> {to} ({to_code})", from_code = from.code(), to_code = to.code())]
    InvalidTransition {
        /// Current status
        from: Status,
        /// Requested status
        to: Status,
    },

    /// A typed data entry failed its kind-specific check (400-equivalent).
    ///
    /// The offending write is rejected before persistence; no counters
    /// are mutated.
    #[error("validation failed for field '{field}': {reason}")]
    Validation {
        /// Field the entry targeted
        field: String,
        /// What the check rejected
        reason: String,
    },

    /// Status wire code outside the enumerated set
    #[error("unknown status code: {0}")]
    UnknownStatusCode(f64),

    /// Access level wire code outside {-1, 0, 1}
    #[error("unknown access level code: {0}")]
    UnknownAccessCode(i8),

    /// Entry kind string outside the enumerated set
    #[error("unknown entry kind: {0}")]
    UnknownEntryKind(String),

    /// Form activation requested for a snapshot not attached to the traveler
    #[error("form {0} is not attached to this traveler")]
    FormNotAttached(FormId),
}

impl TravelerError {
    /// Validation failures map to a client error (HTTP 400 equivalent);
    /// everything else is a programmer/client contract violation.
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, TravelerError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_both_endpoints() {
        let err = TravelerError::InvalidTransition {
            from: Status::Completed,
            to: Status::Active,
        };
        let msg = err.to_string();
        assert!(msg.contains("completed"));
        assert!(msg.contains("active"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn validation_classification() {
        let err = TravelerError::Validation {
            field: "weight".to_string(),
            reason: "expected a number".to_string(),
        };
        assert!(err.is_validation());
        assert!(!TravelerError::UnknownStatusCode(9.0).is_validation());
    }
}
