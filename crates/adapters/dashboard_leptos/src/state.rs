//! Dashboard state container and the refresh/action plumbing around it.
//!
//! Every panel reads from signals owned by one [`DashboardContext`]; the
//! poller and the user's clicks write to them through the application
//! services. Poll failures leave the previous state visible and are only
//! logged; failures of user actions are reported as toasts.

use std::sync::Arc;

use homewatch_app::config::DashboardConfig;
use homewatch_app::ports::ErrorReporter;
use homewatch_app::schedule::RefreshTask;
use homewatch_app::services::event_log_service::LoadedPage;
use homewatch_app::services::{DashboardServices, PollOutcome};
use homewatch_domain::error::DashboardError;
use homewatch_domain::event_log::{EventCursor, EventLogEntry};
use homewatch_domain::notification::NotificationPanel;
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::sensor_event::SensorEventRow;
use homewatch_domain::settings::ServerUrlStatus;
use homewatch_domain::system::SystemSnapshot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::browser;
use crate::components::ToastProvider;

/// What the live sensor table currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorTable {
    Loading,
    Rows(Vec<SensorEventRow>),
    /// The last refresh failed; the table shows this instead of rows.
    Failed(String),
}

/// An action on the control board, resolved against the last snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    ToggleLight,
    ToggleBuzzer,
    ToggleMode,
    ToggleHomeMode,
    SetBrightness(i64),
}

impl SystemAction {
    fn label(self) -> &'static str {
        match self {
            Self::ToggleLight => "toggle light",
            Self::ToggleBuzzer => "toggle buzzer",
            Self::ToggleMode => "toggle mode",
            Self::ToggleHomeMode => "toggle home mode",
            Self::SetBrightness(_) => "set brightness",
        }
    }
}

/// An action on the sensor board, resolved against the last status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    ToggleMonitoring,
    ToggleEncryption,
    SetUploadInterval(i64),
}

impl BoardAction {
    fn label(self) -> &'static str {
        match self {
            Self::ToggleMonitoring => "toggle monitoring",
            Self::ToggleEncryption => "toggle encryption",
            Self::SetUploadInterval(_) => "set upload interval",
        }
    }
}

/// Shared dashboard state, provided once at the page root.
#[derive(Clone)]
pub struct DashboardContext {
    pub services: Arc<DashboardServices<HttpApi>>,
    pub config: Arc<DashboardConfig>,
    pub toasts: ToastProvider,
    pub snapshot: RwSignal<Option<SystemSnapshot>>,
    pub board: RwSignal<Option<SensorBoardStatus>>,
    pub cursor: RwSignal<EventCursor>,
    pub events: RwSignal<Option<Vec<EventLogEntry>>>,
    pub sensor_table: RwSignal<SensorTable>,
    /// Time of the last successful sensor refresh, `HH:MM:SS`.
    pub sensor_updated: RwSignal<Option<String>>,
    /// Whether the refresh acknowledgement pulse is showing.
    pub sensor_pulse: RwSignal<bool>,
    pub notifications: RwSignal<NotificationPanel>,
    pub control_board_url: RwSignal<Option<ServerUrlStatus>>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig, toasts: ToastProvider) -> Self {
        let api = HttpApi::new(config.api.base_url.clone());
        Self {
            services: Arc::new(DashboardServices::new(api, &config)),
            config: Arc::new(config),
            toasts,
            snapshot: RwSignal::new(None),
            board: RwSignal::new(None),
            cursor: RwSignal::new(EventCursor::default()),
            events: RwSignal::new(None),
            sensor_table: RwSignal::new(SensorTable::Loading),
            sensor_updated: RwSignal::new(None),
            sensor_pulse: RwSignal::new(false),
            notifications: RwSignal::new(NotificationPanel::default()),
            control_board_url: RwSignal::new(None),
        }
    }

    /// Apply a poll result: render fresh data, drop superseded data, follow
    /// redirects, log failures.
    fn settle<T>(
        &self,
        what: &str,
        result: Result<PollOutcome<T>, DashboardError>,
        render: impl FnOnce(T),
    ) {
        match result {
            Ok(PollOutcome::Fresh(value)) => render(value),
            Ok(PollOutcome::Superseded) => {}
            Ok(PollOutcome::Redirect(path)) => browser::redirect(&path),
            Err(err) => leptos::logging::warn!("{what} refresh failed: {err}"),
        }
    }

    /// Like [`settle`](Self::settle), but failures are shown to the user.
    fn settle_action<T>(
        &self,
        action: &str,
        result: Result<PollOutcome<T>, DashboardError>,
        render: impl FnOnce(T),
    ) {
        match result {
            Err(err) => self.toasts.report(action, &err),
            ok => self.settle(action, ok, render),
        }
    }

    /// Start one failure-isolated refresh.
    pub fn refresh(&self, task: RefreshTask) {
        let ctx = self.clone();
        match task {
            RefreshTask::SystemState => spawn_local(async move {
                let result = ctx.services.system_state.refresh().await;
                ctx.settle("system state", result, |s| ctx.snapshot.set(Some(s)));
            }),
            RefreshTask::SensorBoard => spawn_local(async move {
                let result = ctx.services.sensor_board.refresh().await;
                ctx.settle("sensor board", result, |s| ctx.board.set(Some(s)));
            }),
            RefreshTask::SensorEvents => spawn_local(async move {
                let result = ctx.services.sensor_events.refresh().await;
                ctx.render_sensor_events(result);
            }),
            RefreshTask::EventLog => {
                let page = self.cursor.get_untracked().page();
                spawn_local(async move {
                    let result = ctx.services.event_log.poll(page).await;
                    ctx.settle("event log", result, |loaded| ctx.show_events(&loaded));
                });
            }
            RefreshTask::Notifications => spawn_local(async move {
                let result = ctx.services.notifications.refresh().await;
                ctx.settle("notifications", result, |p| ctx.notifications.set(p));
            }),
            RefreshTask::ControlBoardUrl => spawn_local(async move {
                let result = ctx.services.control_board.load().await;
                ctx.settle("control board url", result, |s| {
                    ctx.control_board_url.set(Some(s));
                });
            }),
        }
    }

    fn render_sensor_events(&self, result: Result<PollOutcome<Vec<SensorEventRow>>, DashboardError>) {
        match result {
            Ok(PollOutcome::Fresh(rows)) => {
                self.sensor_table.set(SensorTable::Rows(rows));
                self.sensor_updated.set(Some(browser::clock_time()));
                self.sensor_pulse.set(true);
                let pulse = self.sensor_pulse;
                let ack_ms = self.config.display.refresh_ack_ms;
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(ack_ms).await;
                    pulse.set(false);
                });
            }
            Ok(PollOutcome::Superseded) => {}
            Ok(PollOutcome::Redirect(path)) => browser::redirect(&path),
            Err(err) => {
                leptos::logging::warn!("sensor events refresh failed: {err}");
                self.sensor_table.set(SensorTable::Failed(err.user_message()));
            }
        }
    }

    fn show_events(&self, loaded: &LoadedPage) {
        self.cursor.update(|cursor| loaded.record(cursor));
        self.events.set(Some(loaded.data.events.clone()));
    }

    /// Go one page back. Does nothing unless the server reported a
    /// previous page.
    pub fn previous_events(&self) {
        let cursor = self.cursor.get_untracked();
        let ctx = self.clone();
        spawn_local(async move {
            if let Some(result) = ctx.services.event_log.previous(&cursor).await {
                ctx.settle_action("load events", result, |loaded| ctx.show_events(&loaded));
            }
        });
    }

    /// Go one page forward. Does nothing unless the server reported a next
    /// page.
    pub fn next_events(&self) {
        let cursor = self.cursor.get_untracked();
        let ctx = self.clone();
        spawn_local(async move {
            if let Some(result) = ctx.services.event_log.next(&cursor).await {
                ctx.settle_action("load events", result, |loaded| ctx.show_events(&loaded));
            }
        });
    }

    pub fn clear_events(&self) {
        use homewatch_app::services::event_log_service::{CLEAR_PROMPT, CLEARED_MESSAGE};

        if !browser::confirm(CLEAR_PROMPT) {
            return;
        }
        let ctx = self.clone();
        spawn_local(async move {
            if let Err(err) = ctx.services.event_log.clear().await {
                ctx.toasts.report("clear events", &err);
                return;
            }
            ctx.toasts.info(CLEARED_MESSAGE.to_string());
            let result = ctx.services.event_log.load(1).await;
            ctx.settle_action("load events", result, |loaded| ctx.show_events(&loaded));
        });
    }

    /// Run a control-board action derived from the last snapshot. Ignored
    /// until a snapshot has been loaded.
    pub fn system_action(&self, action: SystemAction) {
        let Some(flags) = self
            .snapshot
            .with_untracked(|s| s.as_ref().map(|s| s.system.clone()))
        else {
            return;
        };
        let ctx = self.clone();
        spawn_local(async move {
            let service = &ctx.services.system_state;
            let result = match action {
                SystemAction::ToggleLight => service.toggle_light(&flags).await,
                SystemAction::ToggleBuzzer => service.toggle_buzzer(&flags).await,
                SystemAction::ToggleMode => service.toggle_mode(&flags).await,
                SystemAction::ToggleHomeMode => service.toggle_home_mode(&flags).await,
                SystemAction::SetBrightness(value) => service.set_brightness(value).await,
            };
            ctx.settle_action(action.label(), result, |s| ctx.snapshot.set(Some(s)));
        });
    }

    /// Run a sensor-board action. Toggles invert the board's current
    /// status as read from the server.
    pub fn board_action(&self, action: BoardAction) {
        let ctx = self.clone();
        spawn_local(async move {
            let service = &ctx.services.sensor_board;
            let result = match action {
                BoardAction::ToggleMonitoring => service.toggle_monitoring().await,
                BoardAction::ToggleEncryption => service.toggle_encryption().await,
                BoardAction::SetUploadInterval(value) => service.set_upload_interval(value).await,
            };
            ctx.settle_action(action.label(), result, |s| ctx.board.set(Some(s)));
        });
    }

    pub fn mark_notification_read(&self, id: i64) {
        let ctx = self.clone();
        spawn_local(async move {
            let result = ctx.services.notifications.mark_read(id).await;
            ctx.settle_action("mark notification read", result, |p| {
                ctx.notifications.set(p);
            });
        });
    }

    pub fn clear_notifications(&self) {
        use homewatch_app::services::notification_service::{CLEAR_PROMPT, CLEARED_MESSAGE};

        if !browser::confirm(CLEAR_PROMPT) {
            return;
        }
        let ctx = self.clone();
        spawn_local(async move {
            let result = ctx.services.notifications.clear().await;
            if result.is_ok() {
                ctx.toasts.info(CLEARED_MESSAGE.to_string());
            }
            ctx.settle_action("clear notifications", result, |p| {
                ctx.notifications.set(p);
            });
        });
    }
}

/// Access the dashboard state from Leptos context.
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not found in context")
}
