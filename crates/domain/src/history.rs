//! Per-sensor history shown in the motion, door and fire modals.

use serde::{Deserialize, Serialize};

/// Which sensor history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    Motion,
    Door,
    Fire,
}

impl HistoryKind {
    pub const ALL: [Self; 3] = [Self::Motion, Self::Door, Self::Fire];

    /// Path segment under `/history/`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Door => "door",
            Self::Fire => "fire",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Motion => "Motion History",
            Self::Door => "Door History",
            Self::Fire => "Fire History",
        }
    }

    #[must_use]
    pub fn empty_text(self) -> String {
        format!("No {} events found", self.slug())
    }
}

/// One history record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    pub timestamp: Option<String>,
    pub message: String,
}
