//! Traveler orchestration layer
//!
//! Ties the domain core to its collaborators:
//! - `TravelerService`: the public operation surface (create, clone,
//!   status change, form binding, data/note entries, reads)
//! - `Binder`/`BinderDirectory`: the owning-binder collaborator seam
//! - The post-commit cascade that propagates status/progress changes to
//!   owning binders, best-effort and detached from the triggering write
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use traveler_service::{EmptyBinderDirectory, ServiceConfig, TravelerService};
//! use traveler_store::MemoryStore;
//!
//! # async fn example(snapshot: traveler_core::FormSnapshot) {
//! let service = TravelerService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(EmptyBinderDirectory),
//!     ServiceConfig::new(),
//! );
//! let traveler = service
//!     .create_traveler(snapshot, traveler_core::UserRef::new("u-1", "Creator"))
//!     .await
//!     .unwrap();
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod binder;
pub mod cascade;
pub mod config;
pub mod error;
pub mod service;

pub use binder::{Binder, BinderDirectory, EmptyBinderDirectory};
pub use config::ServiceConfig;
pub use error::{CascadeError, ServiceError};
pub use service::TravelerService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
