use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Console -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Console -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Console -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Console -- ", "{}", message);
    }
}
