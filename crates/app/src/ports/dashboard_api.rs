//! Backend API port: one method per REST endpoint the dashboard uses.

use std::future::Future;

use homewatch_domain::command::{BoardCommand, ControlCommand};
use homewatch_domain::error::ApiError;
use homewatch_domain::event_log::EventPage;
use homewatch_domain::history::{HistoryItem, HistoryKind};
use homewatch_domain::notification::Notification;
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::sensor_event::{SensorEventRow, SensorToggleRequest};
use homewatch_domain::settings::{ServerUrlUpdate, WifiSettings};
use homewatch_domain::system::SystemSnapshot;
use homewatch_domain::time::Timestamp;

/// Query parameters that defeat HTTP caching of the live sensor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBuster {
    /// Milliseconds since the Unix epoch at request time.
    pub t: i64,
    /// Random per-request token.
    pub nonce: String,
}

impl CacheBuster {
    /// Build a fresh buster for `now`.
    #[must_use]
    pub fn new(now: Timestamp) -> Self {
        Self {
            t: now.timestamp_millis(),
            nonce: uuid::Uuid::new_v4().simple().to_string(),
        }
    }

    /// `t=<ms>&_=<nonce>`
    #[must_use]
    pub fn query(&self) -> String {
        format!("t={}&_={}", self.t, self.nonce)
    }
}

/// Client for the dashboard's backend REST API.
///
/// Paths are relative to the configured API root. Implementations map
/// HTTP 401 to [`ApiError::Unauthorized`] and other non-2xx responses to
/// [`ApiError::Status`] carrying the body's `error` field.
///
/// The returned futures are not required to be `Send`: the dashboard runs
/// on the browser's single-threaded executor.
pub trait DashboardApi {
    /// `GET /system-state`
    fn system_state(&self) -> impl Future<Output = Result<SystemSnapshot, ApiError>>;

    /// `GET /sensor-board/info`
    fn sensor_board_info(&self) -> impl Future<Output = Result<SensorBoardStatus, ApiError>>;

    /// `GET /events?page=&per_page=`
    fn events(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<EventPage, ApiError>>;

    /// `GET /sensor-events?t=&_=` with no-cache request headers.
    fn sensor_events(
        &self,
        cache_buster: &CacheBuster,
    ) -> impl Future<Output = Result<Vec<SensorEventRow>, ApiError>>;

    /// `GET /notifications?limit=`
    fn notifications(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Notification>, ApiError>>;

    /// `GET /history/{kind}?limit=`
    fn history(
        &self,
        kind: HistoryKind,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<HistoryItem>, ApiError>>;

    /// `GET /control-board/server-url`
    fn control_board_server_url(&self) -> impl Future<Output = Result<Option<String>, ApiError>>;

    /// `PUT /control-board/server-url`
    fn set_control_board_server_url(
        &self,
        update: &ServerUrlUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /control/{light,buzzer,mode,brightness,home-mode}`
    fn send_control(&self, command: &ControlCommand) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /sensor-board/{monitoring,encryption,upload-interval}`
    fn send_board_command(
        &self,
        command: &BoardCommand,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /sensor-board/wifi`, returning the server's message if any.
    fn save_wifi(
        &self,
        settings: &WifiSettings,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;

    /// `POST /sensor-control/toggle`
    fn toggle_sensor_control(
        &self,
        request: &SensorToggleRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /notifications/{id}/read`
    fn mark_notification_read(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /notifications/clear`
    fn clear_notifications(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /events/clear`
    fn clear_events(&self) -> impl Future<Output = Result<(), ApiError>>;
}
