use super::connector::NeighborConnector;
use crate::common::DomainResult;
use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::roadmap::{Node, NodeId, Roadmap};

/// Scoped mutation of the persistent roadmap for one query.
///
/// Every node the session inserts is removed again, with its edges, when the
/// session is closed or dropped, whichever way the query exits. Edges it adds
/// between two persistent nodes are removed as well.
pub struct QuerySession<'a> {
    roadmap: &'a mut Roadmap,
    transient: Vec<NodeId>,
    added_edges: Vec<(NodeId, NodeId)>,
}

impl<'a> QuerySession<'a> {
    pub fn open(roadmap: &'a mut Roadmap) -> Self {
        Self {
            roadmap,
            transient: Vec::new(),
            added_edges: Vec::new(),
        }
    }

    /// Adds the node for the duration of the session. A node the roadmap
    /// already holds is used in place and stays after the session.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = node.id;
        if self.roadmap.add_node(node) {
            self.transient.push(id);
        }
        id
    }

    pub fn connect(
        &mut self,
        node: &NodeId,
        connector: &NeighborConnector,
        oracle: &dyn GeometryOracle,
    ) -> DomainResult<usize> {
        let linked = connector.link(&mut *self.roadmap, node, oracle)?;
        if !self.transient.contains(node) {
            for other in &linked {
                if !self.transient.contains(other) {
                    self.added_edges.push((*node, *other));
                }
            }
        }
        Ok(linked.len())
    }

    pub fn find_path(&self, start: &NodeId, goal: &NodeId) -> Option<Vec<Node>> {
        self.roadmap.find_path(start, goal)
    }

    pub fn roadmap(&self) -> &Roadmap {
        &*self.roadmap
    }

    pub fn transient_nodes(&self) -> &[NodeId] {
        &self.transient
    }

    /// Restores the roadmap now instead of at end of scope.
    pub fn close(self) {}

    fn restore(&mut self) {
        for (a, b) in self.added_edges.drain(..) {
            self.roadmap.remove_edge(&a, &b);
        }
        for id in self.transient.drain(..).rev() {
            self.roadmap.remove_node(&id);
        }
    }
}

impl Drop for QuerySession<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}
