use crate::domains::logger::DomainLogger;
use crate::domains::path_planning::diagnostics::Diagnostic;
use std::sync::Arc;

/// Forwards planner messages to `tracing` under the `prm` target.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) {
        tracing::info!(target: "prm", "{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "prm", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "prm", "{}", msg);
    }

    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::SamplingUnderflow { requested, sampled } => {
                tracing::warn!(target: "prm", requested, sampled, "{}", diagnostic);
            }
            Diagnostic::RoadmapBuilt { nodes, edges } => {
                tracing::info!(target: "prm", nodes, edges, "{}", diagnostic);
            }
            Diagnostic::NoPathFound { .. } => {
                tracing::info!(target: "prm", "{}", diagnostic);
            }
        }
    }
}

/// DomainLogger that emits structured `tracing` events.
pub fn init_tracing_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge)
}
