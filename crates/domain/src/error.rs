//! Common error types used across the workspace.
//!
//! Each failure source has its own typed error; [`DashboardError`] unifies
//! them via `#[from]` so services can propagate with `?`.

/// Failure while talking to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The session has expired (HTTP 401).
    #[error("session expired")]
    Unauthorized,

    /// The server answered with a non-2xx status.
    ///
    /// `message` is the server's `error` field when the body carried one,
    /// otherwise `HTTP <status>`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, falling back to `HTTP <status>` when the server
    /// gave no message.
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Status { status, message }
    }

    /// Whether this error means the session is gone and the user must log in.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter WiFi SSID")]
    EmptySsid,

    #[error("Please enter Server URL")]
    EmptyServerUrl,

    #[error("Please enter a server URL")]
    EmptyControlBoardUrl,

    #[error("brightness must be between 0 and 100, got {0}")]
    BrightnessOutOfRange(i64),

    #[error("upload interval must be between 1000 and 10000 ms, got {0}")]
    UploadIntervalOutOfRange(i64),
}

/// Top-level error for every dashboard operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    /// Text shown to the user after the action prefix
    /// (`"Failed to toggle light: <this>"`).
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_unauthorized())
    }
}
