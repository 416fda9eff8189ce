use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Writes info to stdout and warnings/errors to stderr, tagged with the planner prefix.
struct ConsoleBridge {
    prefix: String,
}

impl DomainLogger for ConsoleBridge {
    fn info(&self, msg: &str) {
        println!("[{}] {}", self.prefix, msg);
    }
    fn warn(&self, msg: &str) {
        eprintln!("[{}] WARN: {}", self.prefix, msg);
    }
    fn error(&self, msg: &str) {
        eprintln!("[{}] ERROR: {}", self.prefix, msg);
    }
}

/// Console-backed DomainLogger, the fallback when no file or tracing sink is configured.
pub fn init_console_logger(prefix: &str) -> Arc<dyn DomainLogger> {
    Arc::new(ConsoleBridge {
        prefix: prefix.to_string(),
    })
}
