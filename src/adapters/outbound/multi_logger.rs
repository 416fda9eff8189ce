use crate::domains::logger::DomainLogger;
use crate::domains::path_planning::diagnostics::Diagnostic;
use std::sync::Arc;

/// Fans every record out to all attached loggers, in order.
pub struct MultiLogger {
    sinks: Vec<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<Arc<dyn DomainLogger>>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }

    fn report(&self, diagnostic: &Diagnostic) {
        self.sinks.iter().for_each(|s| s.report(diagnostic));
    }
}

/// Tracing output plus, when `file` is given and `fast_log` starts, a log file.
/// Falls back to tracing alone if the file sink cannot be initialised.
pub fn init_combined_logger(file: Option<&str>, level: log::LevelFilter) -> Arc<dyn DomainLogger> {
    let tracing_sink = super::init_tracing_logger();
    let Some(path) = file else {
        return tracing_sink;
    };
    match super::init_file_logger(path, level) {
        Ok(file_sink) => Arc::new(MultiLogger::new(vec![tracing_sink, file_sink])),
        Err(e) => {
            tracing_sink.warn(&e);
            tracing_sink
        }
    }
}
