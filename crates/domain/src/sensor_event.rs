//! Per-sensor live rows and the optimistic light/buzzer toggle model.

use serde::{Deserialize, Serialize};

fn enabled_by_default() -> bool {
    true
}

/// One row of the live sensor-events table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorEventRow {
    pub sensor_name: String,
    #[serde(default)]
    pub sensor_information: String,
    #[serde(default)]
    pub action_taken: String,
    #[serde(default = "enabled_by_default")]
    pub light_enabled: bool,
    #[serde(default = "enabled_by_default")]
    pub buzzer_enabled: bool,
}

impl SensorEventRow {
    /// Identifier-safe form of the sensor name (`Reed Switch (Door)` →
    /// `reed_switch__door_`).
    #[must_use]
    pub fn dom_id(&self) -> String {
        self.sensor_name
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() {
                    ch.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    #[must_use]
    pub fn enabled(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::Light => self.light_enabled,
            ControlKind::Buzzer => self.buzzer_enabled,
        }
    }
}

/// Sort rows by sensor name so the table order is stable whatever order the
/// server used.
pub fn sort_rows(rows: &mut [SensorEventRow]) {
    rows.sort_by(|a, b| {
        a.sensor_name
            .to_lowercase()
            .cmp(&b.sensor_name.to_lowercase())
            .then_with(|| a.sensor_name.cmp(&b.sensor_name))
    });
}

/// Which per-sensor reaction a toggle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Light,
    Buzzer,
}

impl ControlKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Buzzer => "buzzer",
        }
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toggle label for an enabled flag.
#[must_use]
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

/// What a toggle switch shows: checked state plus its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleDisplay {
    pub checked: bool,
    pub label: &'static str,
}

impl ToggleDisplay {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            label: toggle_label(checked),
        }
    }
}

/// Body of `POST /sensor-control/toggle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorToggleRequest {
    pub sensor_name: String,
    pub control_type: ControlKind,
    pub enabled: bool,
}

/// An optimistic toggle in flight.
///
/// The switch shows [`applied`](Self::applied) as soon as the user clicks;
/// if the server rejects the change the switch returns to
/// [`rollback`](Self::rollback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlToggle {
    sensor_name: String,
    kind: ControlKind,
    previous: bool,
    requested: bool,
}

impl ControlToggle {
    #[must_use]
    pub fn begin(
        sensor_name: impl Into<String>,
        kind: ControlKind,
        previous: bool,
        requested: bool,
    ) -> Self {
        Self {
            sensor_name: sensor_name.into(),
            kind,
            previous,
            requested,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    #[must_use]
    pub fn sensor_name(&self) -> &str {
        &self.sensor_name
    }

    #[must_use]
    pub fn request(&self) -> SensorToggleRequest {
        SensorToggleRequest {
            sensor_name: self.sensor_name.clone(),
            control_type: self.kind,
            enabled: self.requested,
        }
    }

    #[must_use]
    pub fn applied(&self) -> ToggleDisplay {
        ToggleDisplay::new(self.requested)
    }

    #[must_use]
    pub fn rollback(&self) -> ToggleDisplay {
        ToggleDisplay::new(self.previous)
    }
}
