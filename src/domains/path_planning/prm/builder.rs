use super::connector::NeighborConnector;
use crate::common::DomainResult;
use crate::domains::path_planning::diagnostics::Diagnostic;
use crate::domains::path_planning::metrics::{BuildReport, Stopwatch};
use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::roadmap::{Node, Roadmap};
use rand::RngCore;

/// Samples the persistent roadmap, then connects it in a second pass over
/// the final node set.
#[derive(Debug, Clone, Copy)]
pub struct RoadmapBuilder {
    pub max_nodes: usize,
    pub connector: NeighborConnector,
}

impl RoadmapBuilder {
    pub fn new(max_nodes: usize, connector: NeighborConnector) -> Self {
        Self { max_nodes, connector }
    }

    /// Stops sampling at the first failed attempt; the shortfall is reported
    /// as a diagnostic, never retried.
    pub fn build(
        &self,
        oracle: &dyn GeometryOracle,
        rng: &mut dyn RngCore,
    ) -> DomainResult<(Roadmap, BuildReport)> {
        let mut roadmap = Roadmap::new();
        let mut report = BuildReport {
            requested: self.max_nodes,
            ..BuildReport::default()
        };

        let sampling = Stopwatch::start();
        for _ in 0..self.max_nodes {
            match oracle.sample_free_pose(rng) {
                Some(pose) => {
                    roadmap.add_node(Node::new(pose));
                }
                None => break,
            }
        }
        report.sampling_time = sampling.elapsed();
        report.sampled = roadmap.node_count();

        if report.sampled < self.max_nodes {
            report.diagnostics.push(Diagnostic::SamplingUnderflow {
                requested: self.max_nodes,
                sampled: report.sampled,
            });
        }

        let connecting = Stopwatch::start();
        self.connector.connect_all(&mut roadmap, oracle)?;
        report.connection_time = connecting.elapsed();
        report.edges = roadmap.edge_count();
        report.diagnostics.push(Diagnostic::RoadmapBuilt {
            nodes: roadmap.node_count(),
            edges: roadmap.edge_count(),
        });

        Ok((roadmap, report))
    }
}
