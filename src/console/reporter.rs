use crate::domain::error_reporter::ErrorReporter;
use tracing::error;

/// Presents errors by logging them, the console has no dialogs.
#[derive(Debug, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report_error(&self, title: &str, message: &str) {
        error!(title, "❌ {}: {}", title, message);
    }
}
