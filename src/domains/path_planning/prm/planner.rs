use super::config::PlannerConfig;
use super::polygon::PolygonPrm;
use crate::common::DomainResult;
use crate::domains::logger::DynLogger;
use crate::domains::path_planning::metrics::{BuildReport, PlannerMetrics, QueryOutcome, Stopwatch};
use crate::domains::path_planning::path::Path;
use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::roadmap::{Endpoint, Roadmap, RoadmapSnapshot};
use std::sync::Arc;

/// Entry point for probabilistic roadmap planning.
///
/// Validates the configuration, owns the concrete roadmap implementation and
/// times each `plan` call on top of the implementation's own measurement.
pub struct PrmPlanner {
    inner: PolygonPrm,
    latest_path: Path,
    metrics: PlannerMetrics,
}

impl PrmPlanner {
    /// Fails with `UnsupportedPlanner` for grid-based configurations.
    pub fn new(
        config: PlannerConfig,
        oracle: Arc<dyn GeometryOracle>,
        logger: DynLogger,
    ) -> DomainResult<Self> {
        config.validate()?;
        let inner = PolygonPrm::new(config, oracle, logger)?;
        Ok(Self::from_inner(inner))
    }

    pub fn with_roadmap(
        config: PlannerConfig,
        oracle: Arc<dyn GeometryOracle>,
        logger: DynLogger,
        roadmap: Roadmap,
    ) -> DomainResult<Self> {
        config.validate()?;
        let inner = PolygonPrm::with_roadmap(config, oracle, logger, roadmap);
        Ok(Self::from_inner(inner))
    }

    fn from_inner(inner: PolygonPrm) -> Self {
        let metrics = PlannerMetrics {
            sampling_time: inner.sampling_time(),
            ..PlannerMetrics::default()
        };
        Self {
            inner,
            latest_path: Path::empty(),
            metrics,
        }
    }

    pub fn plan(
        &mut self,
        start: impl Into<Endpoint>,
        goal: impl Into<Endpoint>,
    ) -> DomainResult<Path> {
        Ok(self.plan_with_outcome(start, goal)?.path)
    }

    pub fn plan_with_outcome(
        &mut self,
        start: impl Into<Endpoint>,
        goal: impl Into<Endpoint>,
    ) -> DomainResult<QueryOutcome> {
        let stopwatch = Stopwatch::start();
        let outcome = self.inner.plan(start.into(), goal.into())?;
        self.metrics.total_planning_time = stopwatch.elapsed();
        self.metrics.planning_time = outcome.metrics.planning_time;
        self.latest_path = outcome.path.clone();
        Ok(outcome)
    }

    /// Discards the roadmap and samples a new one.
    pub fn reset(&mut self) -> DomainResult<BuildReport> {
        let report = self.inner.reset()?;
        self.latest_path = Path::empty();
        self.metrics = PlannerMetrics {
            sampling_time: report.sampling_time,
            ..PlannerMetrics::default()
        };
        Ok(report)
    }

    /// Snapshots of the roadmap graphs, for visualization.
    pub fn graphs(&self) -> Vec<RoadmapSnapshot> {
        self.inner.graphs()
    }

    pub fn roadmap(&self) -> &Roadmap {
        self.inner.roadmap()
    }

    pub fn config(&self) -> &PlannerConfig {
        self.inner.config()
    }

    pub fn latest_path(&self) -> &Path {
        &self.latest_path
    }

    pub fn metrics(&self) -> PlannerMetrics {
        self.metrics
    }

    pub fn last_build(&self) -> &BuildReport {
        self.inner.last_build()
    }
}
