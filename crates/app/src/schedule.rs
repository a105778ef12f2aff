//! Poll schedule: which refreshes run at load and on each timer.

use crate::config::PollingConfig;

/// One independently failing refresh of a dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshTask {
    SystemState,
    SensorBoard,
    SensorEvents,
    EventLog,
    Notifications,
    ControlBoardUrl,
}

/// Refreshes run once at page load.
pub const ON_LOAD: [RefreshTask; 6] = [
    RefreshTask::SystemState,
    RefreshTask::SensorBoard,
    RefreshTask::SensorEvents,
    RefreshTask::EventLog,
    RefreshTask::Notifications,
    RefreshTask::ControlBoardUrl,
];

/// Refreshes on the fast cycle.
pub const FAST: [RefreshTask; 3] = [
    RefreshTask::SystemState,
    RefreshTask::SensorEvents,
    RefreshTask::Notifications,
];

/// Refreshes on the slow cycle.
pub const SLOW: [RefreshTask; 1] = [RefreshTask::EventLog];

/// Two fixed-interval cycles plus the at-load refresh.
///
/// No backoff, jitter or coalescing: a tick fires its tasks even if the
/// previous tick's requests are still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub fast_interval_ms: u32,
    pub slow_interval_ms: u32,
}

impl PollSchedule {
    #[must_use]
    pub fn from_config(config: &PollingConfig) -> Self {
        Self {
            fast_interval_ms: config.fast_interval_ms,
            slow_interval_ms: config.slow_interval_ms,
        }
    }

    #[must_use]
    pub fn on_load(&self) -> &'static [RefreshTask] {
        &ON_LOAD
    }

    #[must_use]
    pub fn fast(&self) -> &'static [RefreshTask] {
        &FAST
    }

    #[must_use]
    pub fn slow(&self) -> &'static [RefreshTask] {
        &SLOW
    }
}
