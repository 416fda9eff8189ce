use super::graph::ordered_pair;
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only copy of a roadmap, used for visualization and persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl RoadmapSnapshot {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_set(&self) -> BTreeSet<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Edge membership, independent of the order the edges were added in.
    pub fn edge_set(&self) -> BTreeSet<(NodeId, NodeId)> {
        self.edges.iter().map(|&(a, b)| ordered_pair(a, b)).collect()
    }

    /// Same nodes and same edges, compared by membership.
    pub fn same_membership(&self, other: &RoadmapSnapshot) -> bool {
        self.node_set() == other.node_set() && self.edge_set() == other.edge_set()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}
