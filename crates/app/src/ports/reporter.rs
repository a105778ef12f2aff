//! Error-reporting port: every user-visible failure goes through here.

use homewatch_domain::error::DashboardError;

/// Presents messages to the user. The dashboard implements this with
/// non-blocking toast banners.
pub trait ErrorReporter {
    /// Show a failure message.
    fn error(&self, message: String);

    /// Show a confirmation message.
    fn info(&self, message: String);

    /// Report a failed action as `Failed to <action>: <reason>`.
    fn report(&self, action: &str, err: &DashboardError) {
        tracing::warn!(action, error = %err, "dashboard action failed");
        self.error(failure_message(action, err));
    }
}

/// `Failed to <action>: <reason>`
#[must_use]
pub fn failure_message(action: &str, err: &DashboardError) -> String {
    format!("Failed to {action}: {}", err.user_message())
}
