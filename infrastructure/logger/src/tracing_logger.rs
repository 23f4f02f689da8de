use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes the cart layer's diagnostics onto the tracing pipeline.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Cart -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Cart -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Cart -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Cart -- ", "{}", message);
    }
}
