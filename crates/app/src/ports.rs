//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the browser.
//! They are defined here (in `app`) so that both the use-case layer and the
//! dashboard adapter can depend on them without creating circular
//! dependencies.

pub mod dashboard_api;
pub mod reporter;

pub use dashboard_api::{CacheBuster, DashboardApi};
pub use reporter::ErrorReporter;
