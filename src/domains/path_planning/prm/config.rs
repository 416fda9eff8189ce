use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// PRM parameters. Fixed once a planner is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Shortcut the found path with oracle-checked straight segments.
    pub compress_path: bool,
    /// Maximum connection distance between roadmap nodes, in world units.
    pub max_connection_dist: f64,
    /// Maximum nodes sampled to build the roadmap.
    pub max_nodes: usize,
    /// Seed for the sampler; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Grid-based roadmaps are not supported; setting this fails construction.
    pub grid: Option<GridConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub resolution: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            compress_path: false,
            max_connection_dist: 2.0,
            max_nodes: 50,
            seed: None,
            grid: None,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.grid.is_some() {
            return Err(DomainError::UnsupportedPlanner {
                variant: "grid-based PRM".to_string(),
            });
        }
        if !(self.max_connection_dist.is_finite() && self.max_connection_dist > 0.0) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "max_connection_dist must be positive and finite, got {}",
                    self.max_connection_dist
                ),
            });
        }
        Ok(())
    }
}
