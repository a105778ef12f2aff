//! Application services: one per dashboard panel.
//!
//! Each service struct accepts a [`DashboardApi`] implementation via a
//! generic parameter (constructor injection), keeping this layer decoupled
//! from the browser HTTP client. Poll requests go through a shared
//! [`RequestSequencer`] so a late response never overwrites a newer one.

pub mod control_board_service;
pub mod event_log_service;
pub mod history_service;
pub mod notification_service;
pub mod sensor_board_service;
pub mod sensor_events_service;
pub mod system_state_service;

#[cfg(test)]
pub(crate) mod fake_api;

use std::future::Future;
use std::sync::Arc;

use homewatch_domain::error::ApiError;

use crate::config::DashboardConfig;
use crate::ports::DashboardApi;
use crate::schedule::PollSchedule;
use crate::sequencer::{Endpoint, RequestSequencer};

use control_board_service::ControlBoardService;
use event_log_service::EventLogService;
use history_service::HistoryService;
use notification_service::NotificationService;
use sensor_board_service::SensorBoardService;
use sensor_events_service::SensorEventsService;
use system_state_service::SystemStateService;

/// Result of a sequenced poll request.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome<T> {
    /// The latest response for its endpoint: render it.
    Fresh(T),
    /// A newer request for the same endpoint was issued meanwhile.
    Superseded,
    /// The session expired; send the browser to this path.
    Redirect(String),
}

impl<T> PollOutcome<T> {
    /// The fresh value, if any.
    pub fn fresh(self) -> Option<T> {
        match self {
            Self::Fresh(value) => Some(value),
            Self::Superseded | Self::Redirect(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PollOutcome<U> {
        match self {
            Self::Fresh(value) => PollOutcome::Fresh(f(value)),
            Self::Superseded => PollOutcome::Superseded,
            Self::Redirect(path) => PollOutcome::Redirect(path),
        }
    }
}

/// Await `request` under a fresh ticket for `endpoint`.
///
/// A superseded response is dropped whether it succeeded or failed, except
/// for [`ApiError::Unauthorized`], which always propagates.
pub(crate) async fn sequenced<T>(
    sequencer: &RequestSequencer,
    endpoint: Endpoint,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<PollOutcome<T>, ApiError> {
    let ticket = sequencer.issue(endpoint);
    let result = request.await;
    if sequencer.is_latest(&ticket) {
        return result.map(PollOutcome::Fresh);
    }
    match result {
        Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
        _ => {
            tracing::warn!(?endpoint, seq = ticket.seq(), "discarding superseded response");
            Ok(PollOutcome::Superseded)
        }
    }
}

/// Every panel service over one API client and one sequencer.
pub struct DashboardServices<A> {
    pub system_state: SystemStateService<A>,
    pub sensor_board: SensorBoardService<A>,
    pub event_log: EventLogService<A>,
    pub sensor_events: SensorEventsService<A>,
    pub notifications: NotificationService<A>,
    pub control_board: ControlBoardService<A>,
    pub history: HistoryService<A>,
    pub schedule: PollSchedule,
}

impl<A: DashboardApi + Clone> DashboardServices<A> {
    /// Wire all services to `api` using the given configuration.
    pub fn new(api: A, config: &DashboardConfig) -> Self {
        let sequencer = Arc::new(RequestSequencer::new());
        let login_path = config.api.login_path.clone();
        Self {
            system_state: SystemStateService::new(
                api.clone(),
                Arc::clone(&sequencer),
                login_path.clone(),
            ),
            sensor_board: SensorBoardService::new(
                api.clone(),
                Arc::clone(&sequencer),
                login_path,
            ),
            event_log: EventLogService::new(
                api.clone(),
                Arc::clone(&sequencer),
                config.display.events_per_page,
            ),
            sensor_events: SensorEventsService::new(
                api.clone(),
                Arc::clone(&sequencer),
                config.polling.sensor_log_interval_ms,
            ),
            notifications: NotificationService::new(
                api.clone(),
                Arc::clone(&sequencer),
                config.display.notifications_limit,
            ),
            control_board: ControlBoardService::new(api.clone(), sequencer),
            history: HistoryService::new(api, config.display.history_limit),
            schedule: PollSchedule::from_config(&config.polling),
        }
    }
}
