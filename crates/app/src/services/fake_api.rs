//! In-memory [`DashboardApi`] for service tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use homewatch_domain::command::{BoardCommand, ControlCommand, OperatingMode};
use homewatch_domain::error::ApiError;
use homewatch_domain::event_log::{EventLogEntry, EventPage, Pagination};
use homewatch_domain::history::{HistoryItem, HistoryKind};
use homewatch_domain::notification::Notification;
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::sensor_event::{ControlKind, SensorEventRow, SensorToggleRequest};
use homewatch_domain::settings::{ServerUrlUpdate, WifiSettings};
use homewatch_domain::system::SystemSnapshot;
use tokio::sync::oneshot;

use crate::ports::{CacheBuster, DashboardApi};

#[derive(Default)]
pub(crate) struct FakeState {
    pub snapshot: SystemSnapshot,
    pub board: SensorBoardStatus,
    pub events: Vec<EventLogEntry>,
    pub sensor_rows: Vec<SensorEventRow>,
    pub notifications: Vec<Notification>,
    pub history: Vec<HistoryItem>,
    pub server_url: Option<String>,
    pub wifi_message: Option<String>,
    pub saved_wifi: Option<WifiSettings>,
    /// When set, every call fails with this error.
    pub failure: Option<ApiError>,
    /// `METHOD path [body]` for every call, in order.
    pub calls: Vec<String>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    pub state: Arc<Mutex<FakeState>>,
    gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
}

impl FakeApi {
    pub fn with(configure: impl FnOnce(&mut FakeState)) -> Self {
        let api = Self::default();
        configure(&mut api.state.lock().unwrap());
        api
    }

    /// Hold the next request until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fail_with(&self, err: ApiError) {
        self.state.lock().unwrap().failure = Some(err);
    }

    fn respond<T>(
        &self,
        call: String,
        handle: impl FnOnce(&mut FakeState) -> T,
    ) -> impl Future<Output = Result<T, ApiError>> {
        let gate = self.gate.lock().unwrap().take();
        let result = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            match state.failure.clone() {
                Some(err) => Err(err),
                None => Ok(handle(&mut state)),
            }
        };
        async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            result
        }
    }
}

fn body(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap()
}

impl DashboardApi for FakeApi {
    fn system_state(&self) -> impl Future<Output = Result<SystemSnapshot, ApiError>> {
        self.respond("GET /system-state".to_string(), |s| s.snapshot.clone())
    }

    fn sensor_board_info(&self) -> impl Future<Output = Result<SensorBoardStatus, ApiError>> {
        self.respond("GET /sensor-board/info".to_string(), |s| s.board.clone())
    }

    fn events(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<EventPage, ApiError>> {
        let call = format!("GET /events?page={page}&per_page={per_page}");
        self.respond(call, move |s| {
            let total = s.events.len() as u64;
            let total_pages = s.events.len().div_ceil(per_page as usize).max(1) as u32;
            let start = ((page.saturating_sub(1)) * per_page) as usize;
            let events = s
                .events
                .iter()
                .skip(start)
                .take(per_page as usize)
                .cloned()
                .collect();
            EventPage {
                events,
                pagination: Pagination {
                    page,
                    per_page,
                    total,
                    total_pages,
                    has_prev: page > 1,
                    has_next: page < total_pages,
                },
            }
        })
    }

    fn sensor_events(
        &self,
        cache_buster: &CacheBuster,
    ) -> impl Future<Output = Result<Vec<SensorEventRow>, ApiError>> {
        let call = format!("GET /sensor-events?{}", cache_buster.query());
        self.respond(call, |s| s.sensor_rows.clone())
    }

    fn notifications(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Notification>, ApiError>> {
        let call = format!("GET /notifications?limit={limit}");
        self.respond(call, move |s| {
            s.notifications
                .iter()
                .take(limit as usize)
                .cloned()
                .collect()
        })
    }

    fn history(
        &self,
        kind: HistoryKind,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<HistoryItem>, ApiError>> {
        let call = format!("GET /history/{}?limit={limit}", kind.slug());
        self.respond(call, move |s| {
            s.history.iter().take(limit as usize).cloned().collect()
        })
    }

    fn control_board_server_url(&self) -> impl Future<Output = Result<Option<String>, ApiError>> {
        self.respond("GET /control-board/server-url".to_string(), |s| {
            s.server_url.clone()
        })
    }

    fn set_control_board_server_url(
        &self,
        update: &ServerUrlUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let call = format!("PUT /control-board/server-url {}", body(update));
        let url = update.server_url.clone();
        self.respond(call, move |s| s.server_url = Some(url))
    }

    fn send_control(&self, command: &ControlCommand) -> impl Future<Output = Result<(), ApiError>> {
        let call = format!("PUT {} {}", command.path(), body(command));
        let command = command.clone();
        self.respond(call, move |s| {
            let flags = &mut s.snapshot.system;
            match command {
                ControlCommand::Light { state } => flags.light_on = state,
                ControlCommand::Buzzer { state } => flags.buzzer_on = state,
                ControlCommand::Mode { mode } => flags.manual_mode = mode == OperatingMode::Manual,
                ControlCommand::Brightness { brightness } => flags.brightness_level = brightness,
                ControlCommand::HomeMode { home_mode } => flags.home_mode = home_mode,
            }
        })
    }

    fn send_board_command(
        &self,
        command: &BoardCommand,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let call = format!("PUT {} {}", command.path(), body(command));
        let command = command.clone();
        self.respond(call, move |s| match command {
            BoardCommand::Monitoring { monitoring } => s.board.monitoring = monitoring,
            BoardCommand::Encryption { encryption_enabled } => {
                s.board.encryption_enabled = encryption_enabled;
            }
            BoardCommand::UploadInterval { upload_interval } => {
                s.board.upload_interval = upload_interval;
            }
        })
    }

    fn save_wifi(
        &self,
        settings: &WifiSettings,
    ) -> impl Future<Output = Result<Option<String>, ApiError>> {
        let call = format!("PUT /sensor-board/wifi {}", body(settings));
        let settings = settings.clone();
        self.respond(call, move |s| {
            s.saved_wifi = Some(settings);
            s.wifi_message.clone()
        })
    }

    fn toggle_sensor_control(
        &self,
        request: &SensorToggleRequest,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let call = format!("POST /sensor-control/toggle {}", body(request));
        let request = request.clone();
        self.respond(call, move |s| {
            if let Some(row) = s
                .sensor_rows
                .iter_mut()
                .find(|row| row.sensor_name == request.sensor_name)
            {
                match request.control_type {
                    ControlKind::Light => {
                        row.light_enabled = request.enabled;
                    }
                    ControlKind::Buzzer => {
                        row.buzzer_enabled = request.enabled;
                    }
                }
            }
        })
    }

    fn mark_notification_read(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> {
        self.respond(format!("PUT /notifications/{id}/read"), move |s| {
            for notification in s.notifications.iter_mut().filter(|n| n.id == id) {
                notification.read = true;
            }
        })
    }

    fn clear_notifications(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.respond("DELETE /notifications/clear".to_string(), |s| {
            s.notifications.clear();
        })
    }

    fn clear_events(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.respond("DELETE /events/clear".to_string(), |s| s.events.clear())
    }
}
