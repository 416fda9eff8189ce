use super::diagnostics::Diagnostic;
use super::path::Path;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Wall-clock timer on the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Result of sampling and connecting a roadmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub requested: usize,
    pub sampled: usize,
    pub edges: usize,
    /// Sampling phase only; connection is timed separately.
    pub sampling_time: Duration,
    pub connection_time: Duration,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.sampled == self.requested
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Zero when no path was found.
    pub planning_time: Duration,
    pub path_found: bool,
    /// Waypoints on the shortest path before compression.
    pub raw_waypoints: usize,
    pub transient_nodes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub path: Path,
    pub metrics: QueryMetrics,
}

/// Timings of the latest build and query as seen by the planner facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerMetrics {
    pub sampling_time: Duration,
    pub planning_time: Duration,
    /// Facade-side measurement of the whole `plan` call, dispatch included.
    pub total_planning_time: Duration,
}
