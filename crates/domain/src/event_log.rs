//! Event log: paginated history of system events and the page cursor.

use serde::{Deserialize, Serialize};

/// One line of the event log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLogEntry {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl EventLogEntry {
    #[must_use]
    pub fn is_alert(&self) -> bool {
        self.kind == "ALERT"
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_alert() {
            "event-item event-alert"
        } else {
            "event-item"
        }
    }

    /// Bracketed type tag, e.g. `[ALERT]`.
    #[must_use]
    pub fn type_tag(&self) -> String {
        format!("[{}]", self.kind)
    }
}

/// Pagination metadata reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Page indicator text, e.g. `Page 2 of 3`.
    #[must_use]
    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Response of `GET /events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPage {
    pub events: Vec<EventLogEntry>,
    pub pagination: Pagination,
}

/// Currently viewed event-log page.
///
/// Navigation only moves within the bounds the server last reported: until
/// a page has been loaded there is neither a previous nor a next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCursor {
    page: u32,
    pagination: Option<Pagination>,
}

impl Default for EventCursor {
    fn default() -> Self {
        Self {
            page: 1,
            pagination: None,
        }
    }
}

impl EventCursor {
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Record that `page` was loaded with the given server metadata.
    pub fn record(&mut self, page: u32, pagination: Pagination) {
        self.page = page;
        self.pagination = Some(pagination);
    }

    /// Page to load for "previous", if the server said there is one.
    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        self.pagination
            .filter(|p| p.has_prev)
            .and_then(|_| self.page.checked_sub(1))
            .filter(|page| *page >= 1)
    }

    /// Page to load for "next", if the server said there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.pagination
            .filter(|p| p.has_next)
            .map(|_| self.page.saturating_add(1))
    }

    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        self.previous_page().is_none()
    }

    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.next_page().is_none()
    }

    /// Page indicator for the loaded page, empty before the first load.
    #[must_use]
    pub fn page_info(&self) -> String {
        self.pagination
            .map(|p| p.page_info())
            .unwrap_or_default()
    }
}
