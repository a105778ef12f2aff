//! Build-time configuration embedded from `dashboard.toml`.

use homewatch_app::config::DashboardConfig;

const EMBEDDED: &str = include_str!("../dashboard.toml");

/// Parse the embedded configuration, falling back to defaults when it is
/// invalid.
pub fn load() -> DashboardConfig {
    match DashboardConfig::from_toml_str(EMBEDDED) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("invalid dashboard.toml, using defaults: {err}");
            DashboardConfig::default()
        }
    }
}
