use super::types::Pose;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Non-fatal events the planner reports to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The sampler failed before `requested` nodes were collected.
    SamplingUnderflow { requested: usize, sampled: usize },
    RoadmapBuilt { nodes: usize, edges: usize },
    NoPathFound { start: Pose, goal: Pose },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::SamplingUnderflow { .. } => Severity::Warn,
            Diagnostic::RoadmapBuilt { .. } => Severity::Info,
            Diagnostic::NoPathFound { .. } => Severity::Info,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SamplingUnderflow { requested, sampled } => write!(
                f,
                "Could not sample more than {} of {} roadmap nodes",
                sampled, requested
            ),
            Diagnostic::RoadmapBuilt { nodes, edges } => {
                write!(f, "Roadmap built with {} nodes and {} edges", nodes, edges)
            }
            Diagnostic::NoPathFound { start, goal } => {
                write!(f, "No path found from {} to {}", start, goal)
            }
        }
    }
}
