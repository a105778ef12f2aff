//! Notifications: recent alerts pushed by the backend and the unread badge.

use serde::{Deserialize, Serialize};

/// A single notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub timestamp: Option<String>,
    pub read: bool,
}

impl Notification {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.read {
            "notification-item"
        } else {
            "notification-item unread"
        }
    }
}

/// The most recent notifications as shown in the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPanel {
    items: Vec<Notification>,
}

impl NotificationPanel {
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// The badge is only shown while something is unread.
    #[must_use]
    pub fn badge_visible(&self) -> bool {
        self.unread_count() > 0
    }

    #[must_use]
    pub fn badge_text(&self) -> String {
        self.unread_count().to_string()
    }
}
