//! Sensor-board service: monitoring, encryption, upload interval and Wi-Fi.

use std::sync::Arc;

use homewatch_domain::command::BoardCommand;
use homewatch_domain::error::{ApiError, DashboardError};
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::settings::{WIFI_SAVED_FALLBACK, WifiForm};

use super::{PollOutcome, sequenced};
use crate::ports::DashboardApi;
use crate::sequencer::{Endpoint, RequestSequencer};

pub struct SensorBoardService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
    login_path: String,
}

impl<A: DashboardApi> SensorBoardService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>, login_path: String) -> Self {
        Self {
            api,
            sequencer,
            login_path,
        }
    }

    /// Fetch the board status. An expired session redirects like the
    /// system state does.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] for any failure other than 401.
    pub async fn refresh(&self) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        match sequenced(
            &self.sequencer,
            Endpoint::SensorBoard,
            self.api.sensor_board_info(),
        )
        .await
        {
            Ok(outcome) => Ok(outcome),
            Err(ApiError::Unauthorized) => {
                tracing::warn!("sensor board request unauthorized, redirecting to login");
                Ok(PollOutcome::Redirect(self.login_path.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Send `command`, then re-fetch the board status.
    ///
    /// # Errors
    ///
    /// Returns the command's failure; the status is not re-fetched then.
    pub async fn apply(
        &self,
        command: &BoardCommand,
    ) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        tracing::debug!(path = command.path(), "sending sensor board command");
        self.api.send_board_command(command).await?;
        self.refresh().await
    }

    /// Read the board's status straight from the server. Not sequenced:
    /// a toggle must never be dropped in favour of a poll.
    async fn current(&self) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        match self.api.sensor_board_info().await {
            Ok(status) => Ok(PollOutcome::Fresh(status)),
            Err(ApiError::Unauthorized) => Ok(PollOutcome::Redirect(self.login_path.clone())),
            Err(err) => Err(err.into()),
        }
    }

    /// Invert monitoring against the board's current status, not the one
    /// last shown.
    ///
    /// # Errors
    ///
    /// Returns the status read's failure, or see [`apply`](Self::apply).
    pub async fn toggle_monitoring(&self) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        match self.current().await? {
            PollOutcome::Fresh(status) => {
                self.apply(&BoardCommand::toggle_monitoring(&status)).await
            }
            other => Ok(other),
        }
    }

    /// Invert encryption against the board's current status.
    ///
    /// # Errors
    ///
    /// Returns the status read's failure, or see [`apply`](Self::apply).
    pub async fn toggle_encryption(&self) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        match self.current().await? {
            PollOutcome::Fresh(status) => {
                self.apply(&BoardCommand::toggle_encryption(&status)).await
            }
            other => Ok(other),
        }
    }

    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for values outside
    /// 1000–10000 ms, without contacting the server.
    pub async fn set_upload_interval(
        &self,
        value: i64,
    ) -> Result<PollOutcome<SensorBoardStatus>, DashboardError> {
        let command = BoardCommand::upload_interval(value)?;
        self.apply(&command).await
    }

    /// Load the Wi-Fi modal's initial contents. The password field always
    /// starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the board info cannot be read.
    pub async fn wifi_form(&self) -> Result<WifiForm, DashboardError> {
        let status = self.api.sensor_board_info().await?;
        Ok(WifiForm::from_status(&status))
    }

    /// Validate and save the Wi-Fi form, returning the confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for an empty SSID or server
    /// URL, or [`DashboardError::Api`] when the save fails.
    pub async fn save_wifi(&self, form: &WifiForm) -> Result<String, DashboardError> {
        let settings = form.validate()?;
        let message = self.api.save_wifi(&settings).await?;
        tracing::info!(ssid = %settings.ssid, "wifi settings saved");
        Ok(message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| WIFI_SAVED_FALLBACK.to_string()))
    }
}
