//! User-facing notifications

use tracing::warn;

/// Sink for messages shown to the user
pub trait Notifier: Send + Sync {
    fn log_warning(&self, message: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn log_warning(&self, message: &str) {
        warn!(target: "zap::notification", "{}", message);
    }
}
