//! # homewatch-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** the UI adapter implements:
//!   - `DashboardApi`: every backend endpoint the dashboard consumes
//!   - `ErrorReporter`: the single place failures are shown to the user
//! - Define **use-case services**, one per dashboard panel:
//!   - `SystemStateService`: snapshot polling and actuator commands
//!   - `SensorBoardService`: board status, board commands, Wi-Fi settings
//!   - `EventLogService`: paginated event log and clearing
//!   - `SensorEventsService`: live sensor rows and per-sensor toggles
//!   - `NotificationService`: notification list, mark-read, clearing
//!   - `ControlBoardService`: control-board server URL
//!   - `HistoryService`: motion/door/fire history
//! - Tag poll requests per endpoint so stale responses are discarded
//! - Describe the poll schedule and load configuration
//!
//! ## Dependency rule
//! Depends on `homewatch-domain` only. Never imports browser or adapter
//! crates. The dashboard adapter depends on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod schedule;
pub mod sequencer;
pub mod services;
