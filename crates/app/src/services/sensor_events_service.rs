//! Sensor events service: the live per-sensor table and its toggles.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use homewatch_domain::error::DashboardError;
use homewatch_domain::sensor_event::{ControlToggle, SensorEventRow, sort_rows};
use homewatch_domain::time::{self, Timestamp};

use super::{PollOutcome, sequenced};
use crate::ports::{CacheBuster, DashboardApi};
use crate::sequencer::{Endpoint, RequestSequencer};

/// Lets at most one refresh log line through per interval.
#[derive(Debug)]
pub struct RefreshLogThrottle {
    interval_ms: i64,
    last_ms: AtomicI64,
}

impl RefreshLogThrottle {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: i64::from(interval_ms),
            last_ms: AtomicI64::new(i64::MIN),
        }
    }

    /// Whether a line may be logged at `now`; records `now` if so.
    pub fn should_log(&self, now: Timestamp) -> bool {
        let now_ms = now.timestamp_millis();
        let last = self.last_ms.load(Ordering::Relaxed);
        if last != i64::MIN && now_ms.saturating_sub(last) < self.interval_ms {
            return false;
        }
        self.last_ms.store(now_ms, Ordering::Relaxed);
        true
    }
}

/// Action name used when a toggle fails: `update light control`.
#[must_use]
pub fn toggle_action(toggle: &ControlToggle) -> String {
    format!("update {} control", toggle.kind())
}

pub struct SensorEventsService<A> {
    api: A,
    sequencer: Arc<RequestSequencer>,
    log_throttle: RefreshLogThrottle,
}

impl<A: DashboardApi> SensorEventsService<A> {
    pub fn new(api: A, sequencer: Arc<RequestSequencer>, log_interval_ms: u32) -> Self {
        Self {
            api,
            sequencer,
            log_throttle: RefreshLogThrottle::new(log_interval_ms),
        }
    }

    /// Fetch all rows, bypassing every HTTP cache, sorted by sensor name.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the request fails. The table
    /// shows the error inline rather than keeping stale rows.
    pub async fn refresh(&self) -> Result<PollOutcome<Vec<SensorEventRow>>, DashboardError> {
        let now = time::now();
        let buster = CacheBuster::new(now);
        let outcome = sequenced(
            &self.sequencer,
            Endpoint::SensorEvents,
            self.api.sensor_events(&buster),
        )
        .await?;
        Ok(outcome.map(|mut rows| {
            sort_rows(&mut rows);
            if self.log_throttle.should_log(now) {
                tracing::debug!(rows = rows.len(), "sensor events refreshed");
            }
            rows
        }))
    }

    /// Send an optimistic toggle. On error the caller restores
    /// [`ControlToggle::rollback`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Api`] when the server rejects the change.
    pub async fn toggle(&self, toggle: &ControlToggle) -> Result<(), DashboardError> {
        let request = toggle.request();
        tracing::debug!(
            sensor = %request.sensor_name,
            control = %request.control_type,
            enabled = request.enabled,
            "toggling sensor control"
        );
        self.api.toggle_sensor_control(&request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;
    use chrono::Duration;
    use homewatch_domain::error::ApiError;
    use homewatch_domain::sensor_event::{ControlKind, ToggleDisplay};

    fn row(name: &str) -> SensorEventRow {
        SensorEventRow {
            sensor_name: name.to_string(),
            sensor_information: "ok".to_string(),
            action_taken: "none".to_string(),
            light_enabled: true,
            buzzer_enabled: false,
        }
    }

    fn service(api: &FakeApi) -> SensorEventsService<FakeApi> {
        SensorEventsService::new(api.clone(), Arc::new(RequestSequencer::new()), 5000)
    }

    #[tokio::test]
    async fn should_sort_rows_by_sensor_name() {
        let api = FakeApi::with(|s| {
            s.sensor_rows = vec![row("Reed Switch"), row("flame"), row("Air Quality")];
        });

        let rows = service(&api).refresh().await.unwrap().fresh().unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.sensor_name.as_str()).collect();
        assert_eq!(names, ["Air Quality", "flame", "Reed Switch"]);
    }

    #[tokio::test]
    async fn should_bust_caches_on_every_request() {
        let api = FakeApi::default();
        let service = service(&api);

        service.refresh().await.unwrap();
        service.refresh().await.unwrap();

        let calls = api.calls();
        assert!(calls[0].starts_with("GET /sensor-events?t="));
        assert_ne!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn should_surface_refresh_failure() {
        let api = FakeApi::default();
        api.fail_with(ApiError::Transport("connection refused".to_string()));

        let err = service(&api).refresh().await.unwrap_err();

        assert_eq!(err.user_message(), "network error: connection refused");
    }

    #[tokio::test]
    async fn should_send_requested_toggle_state() {
        let api = FakeApi::with(|s| s.sensor_rows = vec![row("PIR")]);
        let toggle = ControlToggle::begin("PIR", ControlKind::Buzzer, false, true);

        service(&api).toggle(&toggle).await.unwrap();

        assert_eq!(
            api.calls(),
            ["POST /sensor-control/toggle {\"sensor_name\":\"PIR\",\"control_type\":\"buzzer\",\"enabled\":true}"]
        );
        assert!(api.state.lock().unwrap().sensor_rows[0].buzzer_enabled);
    }

    #[tokio::test]
    async fn should_leave_rollback_to_previous_state_on_failure() {
        let api = FakeApi::default();
        api.fail_with(ApiError::status(404, Some("Unknown sensor".to_string())));
        let toggle = ControlToggle::begin("PIR", ControlKind::Light, true, false);

        let err = service(&api).toggle(&toggle).await.unwrap_err();

        assert_eq!(err.user_message(), "Unknown sensor");
        assert_eq!(toggle.rollback(), ToggleDisplay::new(true));
        assert_eq!(toggle.rollback().label, "ON");
        assert_eq!(toggle_action(&toggle), "update light control");
    }

    #[test]
    fn should_throttle_refresh_logging() {
        let throttle = RefreshLogThrottle::new(5000);
        let start = time::now();

        assert!(throttle.should_log(start));
        assert!(!throttle.should_log(start + Duration::milliseconds(4999)));
        assert!(throttle.should_log(start + Duration::milliseconds(5000)));
        assert!(!throttle.should_log(start + Duration::milliseconds(6000)));
    }
}
