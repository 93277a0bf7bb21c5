//! Traveler storage seam
//!
//! Defines the `DocumentStore` trait the lifecycle engine writes through,
//! plus an in-memory reference implementation:
//! - Identifier lookup and filtered queries
//! - Atomic single-document commits with changed-field receipts
//! - Entry persistence under sortable ids

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{DocumentStore, SaveReceipt, TravelerFilter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
