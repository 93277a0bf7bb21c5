//! Traveler domain core
//!
//! The lifecycle and consistency engine for work-order travelers:
//! - Fixed status state machine gating permitted transitions
//! - Immutable form snapshots frozen at creation
//! - Typed data entries validated against their input kind
//! - The traveler aggregate root and its progress counters
//! - Changed-field diffing consumed by the post-commit cascade
//!
//! This crate is pure domain logic: no I/O, no async, no storage. The
//! storage and cascade seams live in `traveler-store` and
//! `traveler-service`.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use std::collections::BTreeMap;
//! use traveler_core::{AccessLevel, FormSnapshot, Status, TemplateId, Traveler, UserRef};
//!
//! let fields: BTreeMap<_, _> = [("weight".to_string(), "Weight (kg)".to_string())]
//!     .into_iter()
//!     .collect();
//! let snapshot = FormSnapshot::new(
//!     "assembly-rev-a",
//!     serde_json::json!({}),
//!     TemplateId(uuid::Uuid::new_v4()),
//!     fields.clone(),
//!     fields,
//! );
//!
//! let mut traveler = Traveler::new(
//!     snapshot,
//!     UserRef::new("u-1", "Creator"),
//!     AccessLevel::None,
//!     Utc::now(),
//! );
//! assert_eq!(traveler.status(), Status::Initialized);
//! traveler
//!     .change_status(Status::Active, UserRef::new("u-1", "Creator"), Utc::now())
//!     .unwrap();
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod entry;
pub mod error;
pub mod form;
pub mod progress;
pub mod state_machine;
pub mod traveler;
pub mod types;

// Re-exports for convenience
pub use entry::{DataEntry, EntryKind, FileMetadata, NoteEntry};
pub use error::TravelerError;
pub use form::FormSnapshot;
pub use progress::ProgressCounters;
pub use state_machine::{allowed_transitions, can_transition, validate_transition};
pub use traveler::{FormSlot, Traveler};
pub use types::{
    AccessLevel, EntryId, FormId, Status, TemplateId, TravelerField, TravelerId, UserRef,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the traveler domain
    pub use crate::{
        AccessLevel, DataEntry, EntryId, EntryKind, FormId, FormSlot, FormSnapshot, NoteEntry,
        Status, Traveler, TravelerError, TravelerField, TravelerId, UserRef,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
