//! Error types for the service layer
//!
//! Everything here occurs before the persistence commit point and aborts
//! the whole operation; cascade failures are deliberately absent (they are
//! logged and swallowed, never surfaced to the original caller).

use traveler_core::TravelerError;
use traveler_store::StoreError;

/// Service operation errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation (invalid transition, validation failure, ...)
    #[error("domain error: {0}")]
    Domain(#[from] TravelerError),

    /// Storage failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// 400-equivalent client errors
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_validation())
    }
}

/// Failure while locating or updating owning binders after a successful
/// traveler commit. Logged, never retried, never propagated to the caller
/// that triggered the write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CascadeError {
    /// Binder lookup failed
    #[error("binder lookup failed: {0}")]
    Lookup(String),

    /// A binder rejected its update
    #[error("binder update failed: {0}")]
    Update(String),
}
