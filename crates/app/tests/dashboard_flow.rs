//! End-to-end flows through the fully-wired service bundle.
//!
//! Each test builds [`DashboardServices`] from configuration over a scripted
//! in-memory backend and walks a user flow the way the dashboard does.

use std::future::{Future, ready};
use std::sync::{Arc, Mutex};

use homewatch_app::config::DashboardConfig;
use homewatch_app::ports::reporter::failure_message;
use homewatch_app::ports::{CacheBuster, DashboardApi, ErrorReporter};
use homewatch_app::schedule::RefreshTask;
use homewatch_app::services::{DashboardServices, PollOutcome};
use homewatch_domain::command::{BoardCommand, ControlCommand};
use homewatch_domain::error::{ApiError, DashboardError};
use homewatch_domain::event_log::{EventCursor, EventLogEntry, EventPage, Pagination};
use homewatch_domain::history::{HistoryItem, HistoryKind};
use homewatch_domain::notification::Notification;
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::sensor_event::{ControlKind, ControlToggle, SensorEventRow, SensorToggleRequest};
use homewatch_domain::settings::{ServerUrlUpdate, WifiSettings};
use homewatch_domain::system::{SystemSnapshot, SystemView};

#[derive(Default)]
struct Backend {
    snapshot: SystemSnapshot,
    session_expired: bool,
    reject_toggles: bool,
    notifications: Vec<Notification>,
    sensor_rows: Vec<SensorEventRow>,
}

#[derive(Clone, Default)]
struct ScriptedApi(Arc<Mutex<Backend>>);

impl ScriptedApi {
    fn guard(&self) -> Result<(), ApiError> {
        if self.0.lock().unwrap().session_expired {
            Err(ApiError::Unauthorized)
        } else {
            Ok(())
        }
    }
}

impl DashboardApi for ScriptedApi {
    fn system_state(&self) -> impl Future<Output = Result<SystemSnapshot, ApiError>> {
        let result = self.guard().map(|()| self.0.lock().unwrap().snapshot.clone());
        ready(result)
    }

    fn sensor_board_info(&self) -> impl Future<Output = Result<SensorBoardStatus, ApiError>> {
        ready(self.guard().map(|()| SensorBoardStatus {
            monitoring: true,
            upload_interval: 2000,
            ..SensorBoardStatus::default()
        }))
    }

    fn events(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<EventPage, ApiError>> {
        ready(Ok(EventPage {
            events: vec![EventLogEntry {
                timestamp: "2024-03-05 14:07:09".to_string(),
                kind: "ALERT".to_string(),
                message: "Door opened".to_string(),
            }],
            pagination: Pagination {
                page,
                per_page,
                total: 21,
                total_pages: 3,
                has_prev: page > 1,
                has_next: page < 3,
            },
        }))
    }

    fn sensor_events(
        &self,
        _cache_buster: &CacheBuster,
    ) -> impl Future<Output = Result<Vec<SensorEventRow>, ApiError>> {
        ready(Ok(self.0.lock().unwrap().sensor_rows.clone()))
    }

    fn notifications(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Notification>, ApiError>> {
        let backend = self.0.lock().unwrap();
        ready(Ok(backend
            .notifications
            .iter()
            .take(limit as usize)
            .cloned()
            .collect()))
    }

    fn history(
        &self,
        _kind: HistoryKind,
        _limit: u32,
    ) -> impl Future<Output = Result<Vec<HistoryItem>, ApiError>> {
        ready(Ok(Vec::new()))
    }

    fn control_board_server_url(&self) -> impl Future<Output = Result<Option<String>, ApiError>> {
        ready(Ok(None))
    }

    fn set_control_board_server_url(
        &self,
        _update: &ServerUrlUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> {
        ready(Ok(()))
    }

    fn send_control(&self, command: &ControlCommand) -> impl Future<Output = Result<(), ApiError>> {
        if let ControlCommand::Light { state } = command {
            self.0.lock().unwrap().snapshot.system.light_on = *state;
        }
        ready(Ok(()))
    }

    fn send_board_command(
        &self,
        _command: &BoardCommand,
    ) -> impl Future<Output = Result<(), ApiError>> {
        ready(Ok(()))
    }

    fn save_wifi(
        &self,
        _settings: &WifiSettings,
    ) -> impl Future<Output = Result<Option<String>, ApiError>> {
        ready(Ok(None))
    }

    fn toggle_sensor_control(
        &self,
        _request: &SensorToggleRequest,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let result = if self.0.lock().unwrap().reject_toggles {
            Err(ApiError::status(503, None))
        } else {
            Ok(())
        };
        ready(result)
    }

    fn mark_notification_read(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> {
        let mut backend = self.0.lock().unwrap();
        for notification in backend.notifications.iter_mut().filter(|n| n.id == id) {
            notification.read = true;
        }
        ready(Ok(()))
    }

    fn clear_notifications(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.0.lock().unwrap().notifications.clear();
        ready(Ok(()))
    }

    fn clear_events(&self) -> impl Future<Output = Result<(), ApiError>> {
        ready(Ok(()))
    }
}

#[derive(Default)]
struct Banners(Mutex<Vec<String>>);

impl ErrorReporter for Banners {
    fn error(&self, message: String) {
        self.0.lock().unwrap().push(message);
    }

    fn info(&self, message: String) {
        self.0.lock().unwrap().push(message);
    }
}

fn services(api: &ScriptedApi) -> DashboardServices<ScriptedApi> {
    DashboardServices::new(api.clone(), &DashboardConfig::default())
}

#[tokio::test]
async fn should_schedule_every_panel_at_load() {
    let services = services(&ScriptedApi::default());

    assert_eq!(services.schedule.on_load().len(), 6);
    assert!(services.schedule.fast().contains(&RefreshTask::SystemState));
    assert_eq!(services.schedule.slow(), [RefreshTask::EventLog]);
}

#[tokio::test]
async fn should_toggle_light_and_render_new_state() {
    let api = ScriptedApi::default();
    let services = services(&api);

    let before = services.system_state.refresh().await.unwrap().fresh().unwrap();
    assert_eq!(SystemView::project(&before).light_button.label, "Turn On");

    let after = services
        .system_state
        .toggle_light(&before.system)
        .await
        .unwrap()
        .fresh()
        .unwrap();

    let view = SystemView::project(&after);
    assert_eq!(view.light_status, "Light: ON");
    assert_eq!(view.light_button.label, "Turn Off");
    assert_eq!(view.light_button.class, "btn-control active");
}

#[tokio::test]
async fn should_redirect_both_status_panels_when_session_expires() {
    let api = ScriptedApi::default();
    api.0.lock().unwrap().session_expired = true;
    let services = services(&api);

    assert_eq!(
        services.system_state.refresh().await.unwrap(),
        PollOutcome::Redirect("/login".to_string())
    );
    assert_eq!(
        services.sensor_board.refresh().await.unwrap(),
        PollOutcome::Redirect("/login".to_string())
    );
}

#[tokio::test]
async fn should_page_through_event_log() {
    let services = services(&ScriptedApi::default());
    let mut cursor = EventCursor::default();

    services
        .event_log
        .load(cursor.page())
        .await
        .unwrap()
        .fresh()
        .unwrap()
        .record(&mut cursor);
    assert!(cursor.prev_disabled());
    assert!(services.event_log.previous(&cursor).await.is_none());

    services
        .event_log
        .next(&cursor)
        .await
        .unwrap()
        .unwrap()
        .fresh()
        .unwrap()
        .record(&mut cursor);
    assert_eq!(cursor.page_info(), "Page 2 of 3");
    assert!(!cursor.prev_disabled());
    assert!(!cursor.next_disabled());
}

#[tokio::test]
async fn should_roll_back_rejected_sensor_toggle_and_report_it() {
    let api = ScriptedApi::default();
    api.0.lock().unwrap().reject_toggles = true;
    let services = services(&api);
    let banners = Banners::default();

    let toggle = ControlToggle::begin("PIR Motion", ControlKind::Light, true, false);
    assert_eq!(toggle.applied().label, "OFF");

    let err = services.sensor_events.toggle(&toggle).await.unwrap_err();
    banners.report("update light control", &err);

    assert_eq!(toggle.rollback().label, "ON");
    assert!(toggle.rollback().checked);
    assert_eq!(
        banners.0.lock().unwrap().as_slice(),
        ["Failed to update light control: HTTP 503"]
    );
}

#[tokio::test]
async fn should_read_then_clear_notifications() {
    let api = ScriptedApi::default();
    api.0.lock().unwrap().notifications = vec![
        Notification {
            id: 1,
            title: "Motion".to_string(),
            read: false,
            ..Notification::default()
        },
        Notification {
            id: 2,
            title: "Door".to_string(),
            read: false,
            ..Notification::default()
        },
    ];
    let services = services(&api);

    let panel = services.notifications.mark_read(1).await.unwrap().fresh().unwrap();
    assert_eq!(panel.badge_text(), "1");

    let panel = services.notifications.clear().await.unwrap().fresh().unwrap();
    assert!(panel.is_empty());
    assert!(!panel.badge_visible());
}

#[test]
fn should_format_unknown_failures() {
    let err = DashboardError::from(ApiError::status(500, None));
    assert_eq!(failure_message("toggle buzzer", &err), "Failed to toggle buzzer: HTTP 500");
}
