//! History service: recent motion, door and fire events.

use homewatch_domain::error::DashboardError;
use homewatch_domain::history::{HistoryItem, HistoryKind};

use crate::ports::DashboardApi;

pub struct HistoryService<A> {
    api: A,
    limit: u32,
}

impl<A: DashboardApi> HistoryService<A> {
    pub fn new(api: A, limit: u32) -> Self {
        Self { api, limit }
    }

    /// Load the most recent entries of one sensor history.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails.
    pub async fn load(&self, kind: HistoryKind) -> Result<Vec<HistoryItem>, DashboardError> {
        let items = self.api.history(kind, self.limit).await?;
        tracing::debug!(kind = kind.slug(), count = items.len(), "history loaded");
        Ok(items)
    }
}
