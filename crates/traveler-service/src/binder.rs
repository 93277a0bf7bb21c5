//! Binder collaborator seam
//!
//! Binders are higher-level aggregates grouping many travelers and rolling
//! up their progress. Their internal rollup algorithm is a black box to
//! this core: after a relevant traveler commit each owning binder receives
//! `update_work_progress(snapshot)` followed by `update_progress()`, both
//! side-effecting, with no return value consumed beyond logging.

use crate::error::CascadeError;
use async_trait::async_trait;
use std::sync::Arc;
use traveler_core::{Traveler, TravelerId};

/// One owning binder
#[async_trait]
pub trait Binder: Send + Sync {
    /// Stable identifier, used only for logging
    fn id(&self) -> &str;

    /// Refresh this binder's view of one traveler
    async fn update_work_progress(&self, traveler: &Traveler) -> Result<(), CascadeError>;

    /// Refresh this binder's own rollups
    async fn update_progress(&self) -> Result<(), CascadeError>;
}

/// Locates binders by traveler membership
#[async_trait]
pub trait BinderDirectory: Send + Sync {
    /// Every binder whose membership includes `traveler_id`.
    ///
    /// `exclude_archived` drops archived binders; the cascade always sets
    /// it.
    async fn binders_containing(
        &self,
        traveler_id: TravelerId,
        exclude_archived: bool,
    ) -> Result<Vec<Arc<dyn Binder>>, CascadeError>;
}

/// Directory that knows no binders; the cascade becomes a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBinderDirectory;

#[async_trait]
impl BinderDirectory for EmptyBinderDirectory {
    async fn binders_containing(
        &self,
        _traveler_id: TravelerId,
        _exclude_archived: bool,
    ) -> Result<Vec<Arc<dyn Binder>>, CascadeError> {
        Ok(Vec::new())
    }
}
