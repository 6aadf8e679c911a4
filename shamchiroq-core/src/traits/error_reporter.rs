//! Observability collaborator abstract Trait

use crate::error::CoreError;

/// Error reporting Trait
///
/// Fire-and-forget: implementations must not panic and must not block.
pub trait ErrorReporter: Send + Sync {
    /// Report a failure
    ///
    /// # Arguments
    /// * `context` - Where it happened (e.g. `users.fetch_page`)
    /// * `error` - The failure
    fn report_error(&self, context: &str, error: &CoreError);
}

/// Reporter that writes to the `log` facade
///
/// Expected errors go to `warn`, everything else to `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorReporter;

impl ErrorReporter for LogErrorReporter {
    fn report_error(&self, context: &str, error: &CoreError) {
        if error.is_expected() {
            log::warn!("[{context}] {error}");
        } else {
            log::error!("[{context}] {error}");
        }
    }
}
