//! System snapshot: sensor readings plus actuator flags, and their display
//! projection.

use serde::{Deserialize, Serialize};

/// LDR readings above this value mean the room is dark (the sensor reads
/// higher as light decreases, up to 4095).
pub const DARK_THRESHOLD: i64 = 2000;

/// Full state returned by `GET /system-state`. Replaced wholesale on every
/// poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSnapshot {
    pub sensors: SensorReadings,
    pub system: SystemFlags,
}

/// Latest sensor-board readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub pir_motion: bool,
    pub door_open: bool,
    pub flame_detected: bool,
    /// Legacy raw air-quality field, used when `air_quality_raw` is absent.
    pub air_quality: Option<i64>,
    pub air_quality_raw: Option<i64>,
    pub air_quality_percent: Option<i64>,
    pub air_quality_status: Option<String>,
    pub light_level: i64,
    pub sound_level: i64,
}

impl SensorReadings {
    /// Raw MQ135 reading, falling back to the legacy field and then `0`.
    #[must_use]
    pub fn air_quality_raw(&self) -> i64 {
        self.air_quality_raw.or(self.air_quality).unwrap_or(0)
    }

    #[must_use]
    pub fn air_quality_percent(&self) -> i64 {
        self.air_quality_percent.unwrap_or(0)
    }

    #[must_use]
    pub fn air_quality_status(&self) -> &str {
        self.air_quality_status
            .as_deref()
            .filter(|status| !status.is_empty())
            .unwrap_or("Unknown")
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.light_level > DARK_THRESHOLD
    }
}

/// Actuator and mode flags of the control board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemFlags {
    pub light_on: bool,
    pub buzzer_on: bool,
    pub manual_mode: bool,
    pub brightness_level: u8,
    pub home_mode: bool,
}

/// Colour class attached to a badge or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Active,
    Inactive,
    Warning,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Tone for an air-quality status label.
    #[must_use]
    pub fn for_air_quality(status: &str) -> Self {
        match status {
            "Excellent" | "Good" => Self::Active,
            "Moderate" => Self::Warning,
            _ => Self::Danger,
        }
    }
}

/// A labelled badge with its full CSS class string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: String,
}

impl Badge {
    fn status(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            class: format!("status-badge {}", tone.as_str()),
        }
    }

    fn sensor(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            class: format!("sensor-badge {}", tone.as_str()),
        }
    }
}

/// A control button's label and CSS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub class: String,
}

impl ButtonView {
    fn new(label: &'static str, base: &str, active: bool) -> Self {
        let class = if active {
            format!("{base} active")
        } else {
            base.to_string()
        };
        Self { label, class }
    }
}

/// Everything the system-state cards render, derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemView {
    pub temperature: String,
    pub humidity: String,
    pub motion_status: &'static str,
    pub motion_badge: Badge,
    pub door_status: &'static str,
    pub door_badge: Badge,
    pub flame_status: &'static str,
    pub flame_badge: Badge,
    pub air_quality: String,
    pub air_badge: Badge,
    pub light_level: String,
    pub light_badge: Badge,
    pub sound_level: String,
    pub light_status: &'static str,
    pub light_button: ButtonView,
    pub buzzer_status: &'static str,
    pub buzzer_button: ButtonView,
    pub mode_status: &'static str,
    pub mode_button: ButtonView,
    pub brightness_label: String,
    pub brightness: u8,
    pub home_status: &'static str,
    pub home_button: ButtonView,
}

impl SystemView {
    /// Project a snapshot into display strings and classes.
    #[must_use]
    pub fn project(snapshot: &SystemSnapshot) -> Self {
        let sensors = &snapshot.sensors;
        let system = &snapshot.system;

        let (motion_status, motion_badge) = if sensors.pir_motion {
            ("Motion Detected", Badge::status("Active", Tone::Active))
        } else {
            ("No Motion", Badge::status("Inactive", Tone::Inactive))
        };
        let (door_status, door_badge) = if sensors.door_open {
            ("Open", Badge::status("Open", Tone::Warning))
        } else {
            ("Closed", Badge::status("Closed", Tone::Active))
        };
        let (flame_status, flame_badge) = if sensors.flame_detected {
            ("FIRE!", Badge::status("FIRE!", Tone::Danger))
        } else {
            ("Safe", Badge::status("Safe", Tone::Active))
        };

        let air_status = sensors.air_quality_status();
        let air_quality = format!(
            "{} ({}% - {})",
            sensors.air_quality_raw(),
            sensors.air_quality_percent(),
            air_status
        );
        let air_badge = Badge::sensor(air_status, Tone::for_air_quality(air_status));

        let light_badge = if sensors.is_dark() {
            Badge::sensor("Dark", Tone::Inactive)
        } else {
            Badge::sensor("Bright", Tone::Active)
        };

        Self {
            temperature: format!("{:.1}°C", sensors.temperature),
            humidity: format!("{:.1}%", sensors.humidity),
            motion_status,
            motion_badge,
            door_status,
            door_badge,
            flame_status,
            flame_badge,
            air_quality,
            air_badge,
            light_level: sensors.light_level.to_string(),
            light_badge,
            sound_level: sensors.sound_level.to_string(),
            light_status: if system.light_on { "Light: ON" } else { "Light: OFF" },
            light_button: ButtonView::new(
                if system.light_on { "Turn Off" } else { "Turn On" },
                "btn-control",
                system.light_on,
            ),
            buzzer_status: if system.buzzer_on {
                "Buzzer: ON"
            } else {
                "Buzzer: OFF"
            },
            buzzer_button: ButtonView::new(
                if system.buzzer_on {
                    "Turn Off Alerts"
                } else {
                    "Turn On Alerts"
                },
                "btn-control btn-danger",
                system.buzzer_on,
            ),
            mode_status: if system.manual_mode {
                "Manual Mode Active"
            } else {
                "Auto Mode Active"
            },
            mode_button: ButtonView::new(
                if system.manual_mode { "Manual" } else { "Auto" },
                "btn-control",
                !system.manual_mode,
            ),
            brightness_label: format!("{}%", system.brightness_level),
            brightness: system.brightness_level,
            home_status: if system.home_mode {
                "Someone Home"
            } else {
                "Away"
            },
            home_button: ButtonView::new(
                if system.home_mode { "Home" } else { "Away" },
                "btn-control",
                system.home_mode,
            ),
        }
    }
}
