//! Post-commit cascade to owning binders
//!
//! Commit-then-cascade: the traveler write has already succeeded by the
//! time this runs, and nothing here may fail, retry or roll back that
//! write. Binder updates are independent best-effort tasks with no shared
//! transaction and no ordering guarantee between binders; failures are
//! logged and swallowed.

use crate::binder::BinderDirectory;
use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::task::JoinHandle;
use traveler_core::{Traveler, TravelerField};

/// Whether a changed-field set warrants a cascade
#[inline]
#[must_use]
pub fn should_cascade(changed: &BTreeSet<TravelerField>) -> bool {
    TravelerField::CASCADE_TRIGGERS
        .iter()
        .any(|f| changed.contains(f))
}

/// Run the cascade for one committed traveler.
///
/// No-op unless the changed set intersects {status, total input, finished
/// input}. A lookup failure is terminal for this attempt: logged, not
/// retried, not surfaced.
pub async fn run(
    directory: Arc<dyn BinderDirectory>,
    snapshot: Traveler,
    changed: BTreeSet<TravelerField>,
) {
    if !should_cascade(&changed) {
        return;
    }

    let binders = match directory.binders_containing(snapshot.id, true).await {
        Ok(binders) => binders,
        Err(e) => {
            tracing::warn!(traveler = %snapshot.id, error = %e, "binder lookup failed, cascade dropped");
            return;
        }
    };
    if binders.is_empty() {
        return;
    }

    tracing::debug!(
        traveler = %snapshot.id,
        binders = binders.len(),
        "cascading progress update"
    );

    let updates = binders.into_iter().map(|binder| {
        let snapshot = snapshot.clone();
        async move {
            if let Err(e) = binder.update_work_progress(&snapshot).await {
                tracing::warn!(binder = binder.id(), error = %e, "update_work_progress failed");
                return;
            }
            if let Err(e) = binder.update_progress().await {
                tracing::warn!(binder = binder.id(), error = %e, "update_progress failed");
            }
        }
    });
    join_all(updates).await;
}

/// Detach the cascade from the triggering write.
///
/// The caller's suspension point ends at traveler commit; the returned
/// handle is for tests and shutdown hooks, never awaited by the write
/// path. Returns `None` when the changed set triggers nothing.
pub fn spawn(
    directory: Arc<dyn BinderDirectory>,
    snapshot: Traveler,
    changed: BTreeSet<TravelerField>,
) -> Option<JoinHandle<()>> {
    if !should_cascade(&changed) {
        return None;
    }
    Some(tokio::spawn(run(directory, snapshot, changed)))
}
