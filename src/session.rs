//! Per-page trigger policy.
//!
//! A [`Session`] ties one document to the profile source and owns the
//! three entry points that start a fill pass:
//!
//! ```text
//! page ready ─────────► handle_ready ──┐
//! fillLinks message ──► handle_message ┼──► fresh profile snapshot
//! DOM mutations ──────► MutationWatcher┘         │
//!                        (one rescan per batch)  ▼
//!                                          one full scan
//! ```
//!
//! Every trigger re-reads the profile, so overlapping triggers simply run
//! redundant, idempotent passes; there is no coordination lock. A scan is
//! internally atomic: once started it runs to completion and cannot be
//! cancelled.
//!
//! The mutation watcher is a page-lifetime singleton: started once,
//! watching until the page unloads. The explicit [`MutationWatcher::stop`]
//! exists for tests; production pages never call it.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::api;
use crate::dom::DocumentHandle;
use crate::messaging::{FillReply, Request};
use crate::storage::ProfileSource;

/// Long-lived per-page component wiring triggers to fill passes.
pub struct Session {
    document: Box<dyn DocumentHandle>,
    profiles: ProfileSource,
}

impl Session {
    pub fn new(document: Box<dyn DocumentHandle>, profiles: ProfileSource) -> Self {
        Session { document, profiles }
    }

    /// One scan with a fresh profile snapshot.
    async fn scan(&self) -> usize {
        let profile = self.profiles.snapshot().await;
        api::fill_fields(self.document.as_ref(), &profile)
    }

    /// Initial pass, run when the document's structural parse completes.
    pub async fn handle_ready(&self) -> usize {
        info!("document ready; running initial fill pass");
        self.scan().await
    }

    /// Serve one cross-context request.
    ///
    /// Only `fillLinks` is answered from the page context; storage relay
    /// requests are the privileged intermediary's job and get no reply
    /// here.
    pub async fn handle_message(&self, request: &Request) -> Option<FillReply> {
        match request {
            Request::FillLinks => {
                let filled = self.scan().await;
                debug!(filled, "fillLinks request served");
                Some(FillReply { success: true })
            }
            Request::GetStorageData { .. } => None,
        }
    }
}

/// One observed DOM mutation record, as delivered by the host observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationRecord {
    pub added_nodes: usize,
    pub removed_nodes: usize,
}

/// Page-lifetime watcher over DOM mutations.
///
/// The host observes the page body subtree and pushes each mutation batch
/// into [`deliver`](MutationWatcher::deliver). Batches coalesce: however
/// many records a batch holds, at most one rescan runs, and only when some
/// record added nodes. Watching continues indefinitely; teardown is
/// implicit with the page.
pub struct MutationWatcher {
    active: AtomicBool,
}

impl MutationWatcher {
    pub fn new() -> Self {
        MutationWatcher { active: AtomicBool::new(false) }
    }

    /// Begin watching. Idempotent.
    pub fn start(&self) {
        if !self.active.swap(true, Ordering::SeqCst) {
            info!("mutation watcher started");
        }
    }

    /// Stop watching. Test seam; pages rely on unload teardown.
    pub fn stop(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            info!("mutation watcher stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Deliver one mutation batch. Returns the fill count when a rescan
    /// ran, `None` when the batch was ignored.
    pub async fn deliver(&self, session: &Session, batch: &[MutationRecord]) -> Option<usize> {
        if !self.is_active() {
            return None;
        }
        if !batch.iter().any(|record| record.added_nodes > 0) {
            return None;
        }
        debug!(records = batch.len(), "mutation batch added nodes; rescanning");
        Some(session.scan().await)
    }
}

impl Default for MutationWatcher {
    fn default() -> Self {
        Self::new()
    }
}
