use super::node::{Node, NodeId};
use super::snapshot::RoadmapSnapshot;
use crate::common::{DomainError, DomainResult};
use petgraph::algo::astar;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Undirected roadmap graph. Edge weights are the Euclidean distance between
/// the endpoint poses. Indices stay valid across removals, so the id lookup
/// table never needs rebuilding.
#[derive(Debug, Clone, Default)]
pub struct Roadmap {
    graph: StableUnGraph<Node, f64>,
    index: HashMap<NodeId, NodeIndex>,
}

impl Roadmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&ix| &self.graph[ix])
    }

    /// Inserts a node. Returns `false` when a node with the same id is already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        let id = node.id;
        let ix = self.graph.add_node(node);
        self.index.insert(id, ix);
        true
    }

    /// Removes a node together with every incident edge.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let ix = self.index.remove(id)?;
        self.graph.remove_node(ix)
    }

    /// Connects two nodes. Returns `Ok(false)` when the edge already exists.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId) -> DomainResult<bool> {
        if a == b {
            return Err(DomainError::InvalidCommand {
                reason: format!("Self-loop on node {} is not allowed", a),
            });
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if self.graph.find_edge(ia, ib).is_some() {
            return Ok(false);
        }
        let weight = self.graph[ia].pose.distance_to(&self.graph[ib].pose);
        self.graph.add_edge(ia, ib, weight);
        Ok(true)
    }

    /// Disconnects two nodes. Returns `false` when they were not connected.
    pub fn remove_edge(&mut self, a: &NodeId, b: &NodeId) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        match self.graph.find_edge(ia, ib) {
            Some(e) => self.graph.remove_edge(e).is_some(),
            None => false,
        }
    }

    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Nodes in graph index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_indices().map(move |ix| &self.graph[ix])
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().map(|n| n.id).collect()
    }

    /// Edges as id pairs, each pair ordered so that the smaller id comes first.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| ordered_pair(self.graph[a].id, self.graph[b].id))
            .collect()
    }

    pub fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
        match self.index.get(id) {
            Some(&ix) => self.graph.neighbors(ix).map(|n| self.graph[n].id).collect(),
            None => Vec::new(),
        }
    }

    /// Shortest path by summed edge weight, searched with A* and a straight-line
    /// heuristic. `None` when either node is missing or the goal is unreachable.
    pub fn find_path(&self, start: &NodeId, goal: &NodeId) -> Option<Vec<Node>> {
        let s = *self.index.get(start)?;
        let g = *self.index.get(goal)?;
        let goal_pose = self.graph[g].pose;
        let (_, route) = astar(
            &self.graph,
            s,
            |n| n == g,
            |e| *e.weight(),
            |n| self.graph[n].pose.distance_to(&goal_pose),
        )?;
        Some(route.into_iter().map(|ix| self.graph[ix].clone()).collect())
    }

    pub fn snapshot(&self) -> RoadmapSnapshot {
        RoadmapSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges(),
        }
    }

    pub fn from_snapshot(snapshot: RoadmapSnapshot) -> DomainResult<Self> {
        let mut roadmap = Self::new();
        for node in snapshot.nodes {
            roadmap.add_node(node);
        }
        for (a, b) in &snapshot.edges {
            roadmap.add_edge(a, b)?;
        }
        Ok(roadmap)
    }

    fn index_of(&self, id: &NodeId) -> DomainResult<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::NodeNotFound { id: id.to_string() })
    }
}

pub(crate) fn ordered_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
