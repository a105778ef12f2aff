//! # homewatch-domain
//!
//! Pure domain model for the homewatch monitoring dashboard.
//!
//! ## Responsibilities
//! - Wire types for every payload the backend API returns
//!   (system snapshot, sensor-board status, event log, sensor events,
//!   notifications, history)
//! - **Display projections**: pure functions from a snapshot to the
//!   strings and CSS classes the dashboard shows
//! - Control **commands** derived from typed state, never from rendered text
//! - The event-log pagination cursor and the optimistic toggle model
//! - Form validation for the settings modals
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.

pub mod error;
pub mod time;

pub mod command;
pub mod event_log;
pub mod history;
pub mod notification;
pub mod sensor_board;
pub mod sensor_event;
pub mod settings;
pub mod system;
