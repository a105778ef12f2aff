//! Control commands sent to the backend.
//!
//! Toggles are computed from the typed state of the last snapshot so the
//! rendered labels never feed back into control logic.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sensor_board::{SensorBoardStatus, UPLOAD_INTERVAL_RANGE};
use crate::system::SystemFlags;

/// Automatic or manual light control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    Auto,
    Manual,
}

impl OperatingMode {
    #[must_use]
    pub fn from_flags(flags: &SystemFlags) -> Self {
        if flags.manual_mode {
            Self::Manual
        } else {
            Self::Auto
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::Auto,
        }
    }
}

/// Actuator command for `PUT /control/*`.
///
/// Serializes to the bare request body, e.g. `{"state": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControlCommand {
    Light { state: bool },
    Buzzer { state: bool },
    Mode { mode: OperatingMode },
    Brightness { brightness: u8 },
    HomeMode { home_mode: bool },
}

impl ControlCommand {
    #[must_use]
    pub fn toggle_light(flags: &SystemFlags) -> Self {
        Self::Light {
            state: !flags.light_on,
        }
    }

    #[must_use]
    pub fn toggle_buzzer(flags: &SystemFlags) -> Self {
        Self::Buzzer {
            state: !flags.buzzer_on,
        }
    }

    #[must_use]
    pub fn toggle_mode(flags: &SystemFlags) -> Self {
        Self::Mode {
            mode: OperatingMode::from_flags(flags).toggled(),
        }
    }

    #[must_use]
    pub fn toggle_home_mode(flags: &SystemFlags) -> Self {
        Self::HomeMode {
            home_mode: !flags.home_mode,
        }
    }

    /// Brightness command for a slider value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] outside `0..=100`.
    pub fn brightness(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(|brightness| Self::Brightness { brightness })
            .ok_or(ValidationError::BrightnessOutOfRange(value))
    }

    /// Path below the API root.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Light { .. } => "/control/light",
            Self::Buzzer { .. } => "/control/buzzer",
            Self::Mode { .. } => "/control/mode",
            Self::Brightness { .. } => "/control/brightness",
            Self::HomeMode { .. } => "/control/home-mode",
        }
    }

    /// Action name used in failure messages (`Failed to toggle light`).
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Light { .. } => "toggle light",
            Self::Buzzer { .. } => "toggle buzzer",
            Self::Mode { .. } => "toggle mode",
            Self::Brightness { .. } => "set brightness",
            Self::HomeMode { .. } => "toggle home mode",
        }
    }
}

/// Sensor-board configuration command for `PUT /sensor-board/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BoardCommand {
    Monitoring { monitoring: bool },
    Encryption { encryption_enabled: bool },
    UploadInterval { upload_interval: u32 },
}

impl BoardCommand {
    #[must_use]
    pub fn toggle_monitoring(status: &SensorBoardStatus) -> Self {
        Self::Monitoring {
            monitoring: !status.monitoring,
        }
    }

    #[must_use]
    pub fn toggle_encryption(status: &SensorBoardStatus) -> Self {
        Self::Encryption {
            encryption_enabled: !status.encryption_enabled,
        }
    }

    /// Upload-interval command for a slider value in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UploadIntervalOutOfRange`] outside
    /// 1000–10000 ms.
    pub fn upload_interval(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .ok()
            .filter(|v| UPLOAD_INTERVAL_RANGE.contains(v))
            .map(|upload_interval| Self::UploadInterval { upload_interval })
            .ok_or(ValidationError::UploadIntervalOutOfRange(value))
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Monitoring { .. } => "/sensor-board/monitoring",
            Self::Encryption { .. } => "/sensor-board/encryption",
            Self::UploadInterval { .. } => "/sensor-board/upload-interval",
        }
    }

    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Monitoring { .. } => "toggle monitoring",
            Self::Encryption { .. } => "toggle encryption",
            Self::UploadInterval { .. } => "set upload interval",
        }
    }
}
