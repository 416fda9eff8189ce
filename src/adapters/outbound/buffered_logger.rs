use crate::domains::logger::DomainLogger;
use crate::domains::path_planning::diagnostics::Diagnostic;
use std::sync::Arc;
use tokio::sync::mpsc;

enum Record {
    Info(String),
    Warn(String),
    Error(String),
    Diagnostic(Diagnostic),
}

struct BufferedLogger {
    sender: mpsc::Sender<Record>,
}

impl BufferedLogger {
    // try_send never blocks the planner; records are dropped when the buffer is full.
    fn push(&self, record: Record) {
        let _ = self.sender.try_send(record);
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) {
        self.push(Record::Info(msg.to_string()));
    }

    fn warn(&self, msg: &str) {
        self.push(Record::Warn(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.push(Record::Error(msg.to_string()));
    }

    fn report(&self, diagnostic: &Diagnostic) {
        self.push(Record::Diagnostic(diagnostic.clone()));
    }
}

/// Non-blocking logger. Records are forwarded to `sink` from a background
/// task; `capacity` bounds the channel. Must be called inside a tokio runtime.
pub fn init_buffered_logger(sink: Arc<dyn DomainLogger>, capacity: usize) -> Arc<dyn DomainLogger> {
    let (tx, mut rx) = mpsc::channel::<Record>(capacity.max(1));

    tokio::spawn(async move {
        while let Some(record) = rx.recv().await {
            match record {
                Record::Info(msg) => sink.info(&msg),
                Record::Warn(msg) => sink.warn(&msg),
                Record::Error(msg) => sink.error(&msg),
                Record::Diagnostic(d) => sink.report(&d),
            }
        }
    });

    Arc::new(BufferedLogger { sender: tx })
}
