//! Sensor-board status: monitoring, encryption and upload settings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::system::ButtonView;

/// Upload intervals (ms) the sensor board accepts.
pub const UPLOAD_INTERVAL_RANGE: RangeInclusive<u32> = 1000..=10_000;

/// Status returned by `GET /sensor-board/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorBoardStatus {
    pub monitoring: bool,
    pub encryption_enabled: bool,
    /// Upload interval in milliseconds.
    pub upload_interval: u32,
    pub wifi_ssid: Option<String>,
    pub server_url: Option<String>,
}

/// Display projection of a [`SensorBoardStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorBoardView {
    pub monitoring_status: &'static str,
    pub monitoring_button: ButtonView,
    pub encryption_status: &'static str,
    pub encryption_button: &'static str,
    pub upload_interval: u32,
    pub upload_interval_label: String,
}

impl SensorBoardView {
    #[must_use]
    pub fn project(status: &SensorBoardStatus) -> Self {
        Self {
            monitoring_status: if status.monitoring {
                "Monitoring: Active"
            } else {
                "Monitoring: Stopped"
            },
            monitoring_button: ButtonView {
                label: if status.monitoring { "Stop" } else { "Start" },
                class: if status.monitoring {
                    "btn-control active".to_string()
                } else {
                    "btn-control".to_string()
                },
            },
            encryption_status: if status.encryption_enabled {
                "Encryption: Enabled"
            } else {
                "Encryption: Disabled"
            },
            encryption_button: if status.encryption_enabled {
                "Disable"
            } else {
                "Enable"
            },
            upload_interval: status.upload_interval,
            upload_interval_label: format!("{} ms", status.upload_interval),
        }
    }

    /// One-line summary shown by the board info button.
    #[must_use]
    pub fn summary(status: &SensorBoardStatus) -> String {
        format!(
            "Monitoring: {}, Encryption: {}, Upload Interval: {}ms",
            if status.monitoring { "Active" } else { "Stopped" },
            if status.encryption_enabled {
                "Enabled"
            } else {
                "Disabled"
            },
            status.upload_interval
        )
    }
}
