//! System state service: live sensor readings and actuator control.

use std::sync::Arc;

use homewatch_domain::command::ControlCommand;
use homewatch_domain::error::{ApiError, DashboardError};
use homewatch_domain::system::{SystemFlags, SystemSnapshot};

use super::{PollOutcome, sequenced};
use crate::ports::DashboardApi;
use crate::sequencer::{Endpoint, RequestSequencer};

/// Polls `/system-state` and sends `/control/*` commands.
pub struct SystemStateService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
    login_path: String,
}

impl<A: DashboardApi> SystemStateService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>, login_path: String) -> Self {
        Self {
            api,
            sequencer,
            login_path,
        }
    }

    /// Fetch the latest snapshot.
    ///
    /// An expired session yields [`PollOutcome::Redirect`] to the login page
    /// instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] for any other failure.
    pub async fn refresh(&self) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        match sequenced(&self.sequencer, Endpoint::SystemState, self.api.system_state()).await {
            Ok(outcome) => Ok(outcome),
            Err(ApiError::Unauthorized) => {
                tracing::warn!("system state request unauthorized, redirecting to login");
                Ok(PollOutcome::Redirect(self.login_path.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Send `command`, then re-fetch the snapshot it changed.
    ///
    /// # Errors
    ///
    /// Returns the command's failure; the snapshot is not re-fetched then.
    pub async fn apply(
        &self,
        command: &ControlCommand,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        tracing::debug!(path = command.path(), "sending control command");
        self.api.send_control(command).await?;
        self.refresh().await
    }

    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn toggle_light(
        &self,
        flags: &SystemFlags,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        self.apply(&ControlCommand::toggle_light(flags)).await
    }

    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn toggle_buzzer(
        &self,
        flags: &SystemFlags,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        self.apply(&ControlCommand::toggle_buzzer(flags)).await
    }

    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn toggle_mode(
        &self,
        flags: &SystemFlags,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        self.apply(&ControlCommand::toggle_mode(flags)).await
    }

    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn toggle_home_mode(
        &self,
        flags: &SystemFlags,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        self.apply(&ControlCommand::toggle_home_mode(flags)).await
    }

    /// Pass a slider value straight through; one request per input event.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when `value` is outside
    /// 0–100, without contacting the server.
    pub async fn set_brightness(
        &self,
        value: i64,
    ) -> Result<PollOutcome<SystemSnapshot>, DashboardError> {
        let command = ControlCommand::brightness(value)?;
        self.apply(&command).await
    }
}
