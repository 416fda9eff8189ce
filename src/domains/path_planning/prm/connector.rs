use crate::common::{DomainError, DomainResult};
use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::roadmap::{NodeId, Roadmap};
use crate::domains::path_planning::types::Pose;

/// Links a node to every other roadmap node the oracle deems reachable
/// within the connection distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborConnector {
    pub max_connection_dist: f64,
}

impl NeighborConnector {
    pub fn new(max_connection_dist: f64) -> Self {
        Self { max_connection_dist }
    }

    /// Returns the number of edges that did not exist before.
    pub fn connect(
        &self,
        roadmap: &mut Roadmap,
        node: &NodeId,
        oracle: &dyn GeometryOracle,
    ) -> DomainResult<usize> {
        Ok(self.link(roadmap, node, oracle)?.len())
    }

    /// Like `connect`, but returns the neighbors that gained a new edge to `node`.
    pub fn link(
        &self,
        roadmap: &mut Roadmap,
        node: &NodeId,
        oracle: &dyn GeometryOracle,
    ) -> DomainResult<Vec<NodeId>> {
        let pose = roadmap
            .node(node)
            .map(|n| n.pose)
            .ok_or_else(|| DomainError::NodeNotFound {
                id: node.to_string(),
            })?;
        let others: Vec<(NodeId, Pose)> = roadmap
            .nodes()
            .filter(|other| other.id != *node)
            .map(|other| (other.id, other.pose))
            .collect();

        let mut linked = Vec::new();
        for (other, other_pose) in others {
            if oracle.is_connectable(&pose, &other_pose, self.max_connection_dist)
                && roadmap.add_edge(node, &other)?
            {
                linked.push(other);
            }
        }
        Ok(linked)
    }

    /// Runs `connect` for every node in the roadmap, in node order.
    pub fn connect_all(
        &self,
        roadmap: &mut Roadmap,
        oracle: &dyn GeometryOracle,
    ) -> DomainResult<usize> {
        let mut added = 0;
        for id in roadmap.node_ids() {
            added += self.connect(roadmap, &id, oracle)?;
        }
        Ok(added)
    }
}
