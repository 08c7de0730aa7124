use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards core diagnostics to `tracing` under one target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront::core", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront::core", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront::core", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront::core", "{}", message);
    }
}
