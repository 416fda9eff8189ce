use crate::domains::path_planning::diagnostics::{Diagnostic, Severity};
use chrono::Utc;
use log::{error as log_error, info as log_info, warn as log_warn};
use std::sync::Arc;

/// Domain-level logging port (Hexagonal port).
/// The planner never logs through globals; callers inject one of these.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);

    /// Routes a planner diagnostic to the level matching its severity.
    fn report(&self, diagnostic: &Diagnostic) {
        let msg = diagnostic.to_string();
        match diagnostic.severity() {
            Severity::Info => self.info(&msg),
            Severity::Warn => self.warn(&msg),
            Severity::Error => self.error(&msg),
        }
    }
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// File adapter backed by `fast_log`, which also mirrors records to the console.
pub struct FileLogger;

impl FileLogger {
    /// Installs `fast_log` as the global `log` backend, appending to `path`.
    pub fn init(path: &str, level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .console()
                .file(path)
                .level(level),
        )?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{} [prm] {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!("{} [prm] {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log_error!("{} [prm] {}", Utc::now().to_rfc3339(), msg);
    }
}
