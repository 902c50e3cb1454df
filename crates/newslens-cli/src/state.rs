//! Shared dashboard state for the `watch` loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use newslens_classifier::DashboardSnapshot;

struct Published {
    ticket: u64,
    snapshot: Arc<DashboardSnapshot>,
}

/// Latest dashboard snapshot, written by overlapping refreshes.
///
/// Every refresh takes a ticket when it starts. A finished refresh only
/// replaces the stored snapshot if no refresh with a later ticket has
/// already published, so a slow refresh can never overwrite newer data.
#[derive(Default)]
pub(crate) struct DashboardState {
    next_ticket: AtomicU64,
    latest: Mutex<Option<Published>>,
}

impl DashboardState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Ticket for a refresh that is about to start. Tickets strictly increase.
    pub(crate) fn begin_refresh(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store `snapshot` unless a later refresh already published.
    ///
    /// Returns `true` when the snapshot was stored.
    pub(crate) fn publish(&self, ticket: u64, snapshot: Arc<DashboardSnapshot>) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if latest.as_ref().is_some_and(|p| p.ticket > ticket) {
            return false;
        }
        *latest = Some(Published { ticket, snapshot });
        true
    }

    pub(crate) fn latest(&self) -> Option<Arc<DashboardSnapshot>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|p| Arc::clone(&p.snapshot))
    }
}
