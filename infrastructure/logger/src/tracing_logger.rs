use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing` adapter for the domain logger. Every event carries the
/// component that emitted it so cart and checkout logs can be filtered.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("cart")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart_backend", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart_backend", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart_backend", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart_backend", component = self.component, "{}", message);
    }
}
