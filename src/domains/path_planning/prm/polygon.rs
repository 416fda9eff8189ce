use super::builder::RoadmapBuilder;
use super::compressor::reduce_waypoints;
use super::config::PlannerConfig;
use super::connector::NeighborConnector;
use super::query::QuerySession;
use crate::common::DomainResult;
use crate::domains::logger::DynLogger;
use crate::domains::path_planning::diagnostics::Diagnostic;
use crate::domains::path_planning::metrics::{BuildReport, QueryMetrics, QueryOutcome, Stopwatch};
use crate::domains::path_planning::path::Path;
use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::roadmap::{Endpoint, Roadmap, RoadmapSnapshot};
use crate::domains::path_planning::types::Pose;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

/// PRM over a continuous workspace whose collision model is answered by a
/// [`GeometryOracle`].
pub struct PolygonPrm {
    config: PlannerConfig,
    oracle: Arc<dyn GeometryOracle>,
    logger: DynLogger,
    rng: StdRng,
    connector: NeighborConnector,
    roadmap: Roadmap,
    sampling_time: Duration,
    last_build: BuildReport,
}

impl PolygonPrm {
    /// Creates the planner and samples its roadmap.
    pub fn new(
        config: PlannerConfig,
        oracle: Arc<dyn GeometryOracle>,
        logger: DynLogger,
    ) -> DomainResult<Self> {
        let mut prm = Self::with_roadmap(config, oracle, logger, Roadmap::new());
        prm.reset()?;
        Ok(prm)
    }

    /// Adopts an existing roadmap, e.g. one loaded from a roadmap store, without sampling.
    pub fn with_roadmap(
        config: PlannerConfig,
        oracle: Arc<dyn GeometryOracle>,
        logger: DynLogger,
        roadmap: Roadmap,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            connector: NeighborConnector::new(config.max_connection_dist),
            config,
            oracle,
            logger,
            rng,
            roadmap,
            sampling_time: Duration::ZERO,
            last_build: BuildReport::default(),
        }
    }

    /// Resamples the roadmap.
    pub fn reset(&mut self) -> DomainResult<BuildReport> {
        self.sampling_time = Duration::ZERO;

        let builder = RoadmapBuilder::new(self.config.max_nodes, self.connector);
        let (roadmap, report) = builder.build(self.oracle.as_ref(), &mut self.rng)?;
        for diagnostic in &report.diagnostics {
            self.logger.report(diagnostic);
        }
        self.roadmap = roadmap;
        self.sampling_time = report.sampling_time;
        self.last_build = report.clone();
        Ok(report)
    }

    /// Plans a path from start to goal. The roadmap holds the same nodes and
    /// edges afterwards as before, whether or not a path was found.
    pub fn plan(&mut self, start: Endpoint, goal: Endpoint) -> DomainResult<QueryOutcome> {
        let (start_pose, goal_pose) = (start.pose(), goal.pose());
        let (start, goal) = (start.into_node(), goal.into_node());
        let oracle = Arc::clone(&self.oracle);

        let stopwatch = Stopwatch::start();
        let mut session = QuerySession::open(&mut self.roadmap);
        let start_id = session.insert(start);
        let goal_id = session.insert(goal);

        // Goal connects second so it can link straight to the start node.
        session.connect(&start_id, &self.connector, oracle.as_ref())?;
        session.connect(&goal_id, &self.connector, oracle.as_ref())?;
        let transient_nodes = session.transient_nodes().len();

        let Some(waypoints) = session.find_path(&start_id, &goal_id) else {
            session.close();
            self.logger.report(&Diagnostic::NoPathFound {
                start: start_pose,
                goal: goal_pose,
            });
            return Ok(QueryOutcome {
                path: Path::empty(),
                metrics: QueryMetrics {
                    transient_nodes,
                    ..QueryMetrics::default()
                },
            });
        };

        let raw: Vec<Pose> = waypoints.iter().map(|node| node.pose).collect();
        let raw_waypoints = raw.len();
        let poses = if self.config.compress_path {
            reduce_waypoints(oracle.as_ref(), &raw)
        } else {
            raw
        };
        let mut path = Path::new(poses);
        path.fill_yaws();
        let planning_time = stopwatch.elapsed();
        session.close();

        Ok(QueryOutcome {
            path,
            metrics: QueryMetrics {
                planning_time,
                path_found: true,
                raw_waypoints,
                transient_nodes,
            },
        })
    }

    pub fn graphs(&self) -> Vec<RoadmapSnapshot> {
        vec![self.roadmap.snapshot()]
    }

    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn sampling_time(&self) -> Duration {
        self.sampling_time
    }

    pub fn last_build(&self) -> &BuildReport {
        &self.last_build
    }
}
