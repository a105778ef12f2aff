//! Notification service: recent alerts, read receipts and clearing.

use std::sync::Arc;

use homewatch_domain::error::DashboardError;
use homewatch_domain::notification::NotificationPanel;

use super::{PollOutcome, sequenced};
use crate::ports::DashboardApi;
use crate::sequencer::{Endpoint, RequestSequencer};

/// Confirmation prompt shown before clearing all notifications.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all notifications?";
/// Shown after a successful clear.
pub const CLEARED_MESSAGE: &str = "All notifications cleared";

pub struct NotificationService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
    limit: u32,
}

impl<A: DashboardApi> NotificationService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>, limit: u32) -> Self {
        Self {
            api,
            sequencer,
            limit,
        }
    }

    /// Fetch the most recent notifications.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails.
    pub async fn refresh(&self) -> Result<PollOutcome<NotificationPanel>, DashboardError> {
        let outcome = sequenced(
            &self.sequencer,
            Endpoint::Notifications,
            self.api.notifications(self.limit),
        )
        .await?;
        Ok(outcome.map(NotificationPanel::new))
    }

    /// Mark one notification read, then re-fetch the whole list.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when either request fails.
    pub async fn mark_read(&self, id: i64) -> Result<PollOutcome<NotificationPanel>, DashboardError> {
        self.api.mark_notification_read(id).await?;
        self.refresh().await
    }

    /// Delete every notification, then re-fetch the (now empty) list.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] carrying the server's message when the
    /// delete fails.
    pub async fn clear(&self) -> Result<PollOutcome<NotificationPanel>, DashboardError> {
        self.api.clear_notifications().await?;
        tracing::info!("notifications cleared");
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;
    use homewatch_domain::error::ApiError;
    use homewatch_domain::notification::Notification;

    fn notification(id: i64, read: bool) -> Notification {
        Notification {
            id,
            title: format!("Alert {id}"),
            message: "Motion detected".to_string(),
            kind: Some("warning".to_string()),
            timestamp: Some("2024-03-05 14:07:09".to_string()),
            read,
        }
    }

    fn service(api: &FakeApi) -> NotificationService<FakeApi> {
        NotificationService::new(api.clone(), Arc::new(RequestSequencer::new()), 10)
    }

    #[tokio::test]
    async fn should_count_unread_notifications() {
        let api = FakeApi::with(|s| {
            s.notifications = vec![
                notification(1, false),
                notification(2, true),
                notification(3, false),
            ];
        });

        let panel = service(&api).refresh().await.unwrap().fresh().unwrap();

        assert_eq!(panel.badge_text(), "2");
        assert!(panel.badge_visible());
        assert_eq!(api.calls(), ["GET /notifications?limit=10"]);
    }

    #[tokio::test]
    async fn should_hide_badge_once_all_read() {
        let api = FakeApi::with(|s| s.notifications = vec![notification(7, false)]);

        let panel = service(&api).mark_read(7).await.unwrap().fresh().unwrap();

        assert!(!panel.badge_visible());
        assert_eq!(
            api.calls(),
            ["PUT /notifications/7/read", "GET /notifications?limit=10"]
        );
    }

    #[tokio::test]
    async fn should_clear_and_reload() {
        let api = FakeApi::with(|s| s.notifications = vec![notification(1, false)]);

        let panel = service(&api).clear().await.unwrap().fresh().unwrap();

        assert!(panel.is_empty());
        assert_eq!(api.calls()[0], "DELETE /notifications/clear");
    }

    #[tokio::test]
    async fn should_report_server_error_when_clear_fails() {
        let api = FakeApi::default();
        api.fail_with(ApiError::status(500, Some("Database locked".to_string())));

        let err = service(&api).clear().await.unwrap_err();

        assert_eq!(err.user_message(), "Database locked");
        assert_eq!(api.calls().len(), 1);
    }
}
