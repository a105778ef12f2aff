//! Control-board service: the server URL the control board reports to.

use std::sync::Arc;

use homewatch_domain::error::DashboardError;
use homewatch_domain::settings::{ServerUrlStatus, ServerUrlUpdate};

use super::{PollOutcome, sequenced};
use crate::ports::DashboardApi;
use crate::sequencer::{Endpoint, RequestSequencer};

pub struct ControlBoardService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
}

impl<A: DashboardApi> ControlBoardService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>) -> Self {
        Self { api, sequencer }
    }

    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails.
    pub async fn load(&self) -> Result<PollOutcome<ServerUrlStatus>, DashboardError> {
        let outcome = sequenced(
            &self.sequencer,
            Endpoint::ControlBoardUrl,
            self.api.control_board_server_url(),
        )
        .await?;
        Ok(outcome.map(ServerUrlStatus::from_url))
    }

    /// Validate and store a new URL. The caller shows
    /// [`ServerUrlUpdate::saved_text`] and reloads after a short delay.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for a blank URL, or
    /// [`DashboardError::Api`] when the save fails.
    pub async fn save(&self, raw: &str) -> Result<ServerUrlUpdate, DashboardError> {
        let update = ServerUrlUpdate::parse(raw)?;
        self.api.set_control_board_server_url(&update).await?;
        tracing::info!(url = %update.server_url, "control board url saved");
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;

    fn service(api: &FakeApi) -> ControlBoardService<FakeApi> {
        ControlBoardService::new(api.clone(), Arc::new(RequestSequencer::new()))
    }

    #[tokio::test]
    async fn should_show_configured_url() {
        let api = FakeApi::with(|s| s.server_url = Some("http://hub:5000".to_string()));

        let status = service(&api).load().await.unwrap().fresh().unwrap();

        assert_eq!(status.text(), "Currently configured: http://hub:5000");
    }

    #[tokio::test]
    async fn should_show_not_configured() {
        let api = FakeApi::default();

        let status = service(&api).load().await.unwrap().fresh().unwrap();

        assert_eq!(status, ServerUrlStatus::NotConfigured);
        assert_eq!(status.text(), "Not configured");
    }

    #[tokio::test]
    async fn should_save_trimmed_url() {
        let api = FakeApi::default();
        let service = service(&api);

        let update = service.save("  http://hub:5000 ").await.unwrap();

        assert_eq!(update.saved_text(), "URL saved successfully: http://hub:5000");
        assert_eq!(
            service.load().await.unwrap().fresh().unwrap().url(),
            Some("http://hub:5000")
        );
    }

    #[tokio::test]
    async fn should_reject_blank_url_without_request() {
        let api = FakeApi::default();

        let err = service(&api).save("   ").await.unwrap_err();

        assert_eq!(err.user_message(), "Please enter a server URL");
        assert!(api.calls().is_empty());
    }
}
