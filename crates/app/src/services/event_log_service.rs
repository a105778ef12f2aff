//! Event log service: paginated history of system events.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use homewatch_domain::error::DashboardError;
use homewatch_domain::event_log::{EventCursor, EventPage};

use super::{PollOutcome, sequenced};
use crate::ports::DashboardApi;
use crate::sequencer::{Endpoint, RequestSequencer};

/// Confirmation prompt shown before clearing the log.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all event logs?";
/// Shown after a successful clear.
pub const CLEARED_MESSAGE: &str = "All events cleared";

/// A fetched page together with the page number that was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub page: u32,
    pub data: EventPage,
}

impl LoadedPage {
    /// Move `cursor` onto this page.
    pub fn record(&self, cursor: &mut EventCursor) {
        cursor.record(self.page, self.data.pagination);
    }
}

/// Counts one user navigation for as long as it is in flight.
struct Navigating<'a>(&'a AtomicUsize);

impl<'a> Navigating<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for Navigating<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct EventLogService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
    per_page: u32,
    navigating: AtomicUsize,
}

impl<A: DashboardApi> EventLogService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>, per_page: u32) -> Self {
        Self {
            api,
            sequencer,
            per_page,
            navigating: AtomicUsize::new(0),
        }
    }

    /// Fetch one page of events on the user's behalf. Periodic polls are
    /// skipped until it settles.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails.
    pub async fn load(&self, page: u32) -> Result<PollOutcome<LoadedPage>, DashboardError> {
        let _navigating = Navigating::start(&self.navigating);
        self.fetch(page).await
    }

    /// Periodic refresh of the page on display. Resolves to
    /// [`PollOutcome::Superseded`] without a request while a navigation is
    /// in flight, and is superseded by any navigation issued after it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails.
    pub async fn poll(&self, page: u32) -> Result<PollOutcome<LoadedPage>, DashboardError> {
        if self.navigating.load(Ordering::SeqCst) > 0 {
            tracing::debug!(page, "navigation in flight, skipping event log poll");
            return Ok(PollOutcome::Superseded);
        }
        self.fetch(page).await
    }

    async fn fetch(&self, page: u32) -> Result<PollOutcome<LoadedPage>, DashboardError> {
        let outcome = sequenced(
            &self.sequencer,
            Endpoint::Events,
            self.api.events(page, self.per_page),
        )
        .await?;
        Ok(outcome.map(|data| LoadedPage { page, data }))
    }

    /// Load the page before the cursor's, or `None` when the server said
    /// there is none. No request is issued in that case.
    pub async fn previous(
        &self,
        cursor: &EventCursor,
    ) -> Option<Result<PollOutcome<LoadedPage>, DashboardError>> {
        let page = cursor.previous_page()?;
        Some(self.load(page).await)
    }

    /// Load the page after the cursor's, or `None` when there is none.
    pub async fn next(
        &self,
        cursor: &EventCursor,
    ) -> Option<Result<PollOutcome<LoadedPage>, DashboardError>> {
        let page = cursor.next_page()?;
        Some(self.load(page).await)
    }

    /// Delete every event. The caller reloads the first page with
    /// [`load`](Self::load) so a failed reload is told apart from a failed
    /// delete.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the delete fails.
    pub async fn clear(&self) -> Result<(), DashboardError> {
        self.api.clear_events().await?;
        tracing::info!("event log cleared");
        Ok(())
    }
}
