//! Dashboard configuration: TOML with a default for every field.
//!
//! The dashboard embeds `dashboard.toml` at build time; every field has a
//! sensible default so the file may be empty.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Poll cycle timing.
    pub polling: PollingConfig,
    /// List sizes and UI timings.
    pub display: DisplayConfig,
}

/// Backend API location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root every endpoint path is appended to.
    pub base_url: String,
    /// Page the browser is sent to when the session expires.
    pub login_path: String,
}

/// Poll cycle timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// System state, sensor events and notifications.
    pub fast_interval_ms: u32,
    /// Event log.
    pub slow_interval_ms: u32,
    /// Minimum gap between two sensor-refresh log lines.
    pub sensor_log_interval_ms: u32,
}

/// List sizes and UI timings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub events_per_page: u32,
    pub notifications_limit: u32,
    pub history_limit: u32,
    /// How long the sensor table's "updated" highlight stays on.
    pub refresh_ack_ms: u32,
    /// Delay before the Wi-Fi modal closes after a successful save.
    pub wifi_dismiss_ms: u32,
    /// Delay before the control-board URL is reloaded after a save.
    pub url_reload_ms: u32,
    /// Toast lifetime.
    pub toast_ms: u32,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for zero intervals or sizes.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.fast_interval_ms == 0 || self.polling.slow_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        if self.display.events_per_page == 0 {
            return Err(ConfigError::Validation(
                "events_per_page must be non-zero".to_string(),
            ));
        }
        if self.display.notifications_limit == 0 || self.display.history_limit == 0 {
            return Err(ConfigError::Validation(
                "list limits must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of an endpoint path such as `/system-state`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            fast_interval_ms: 2000,
            slow_interval_ms: 5000,
            sensor_log_interval_ms: 5000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            events_per_page: 10,
            notifications_limit: 10,
            history_limit: 10,
            refresh_ack_ms: 1000,
            wifi_dismiss_ms: 2000,
            url_reload_ms: 1000,
            toast_ms: 5000,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse dashboard config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid dashboard configuration: {0}")]
    Validation(String),
}
