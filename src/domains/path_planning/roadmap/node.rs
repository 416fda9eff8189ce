use crate::domains::path_planning::types::Pose;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A roadmap vertex. Two nodes with the same pose are still distinct nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub pose: Pose,
    /// Reserved for tree-based planners sharing the graph type; PRM never sets it.
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn new(pose: Pose) -> Self {
        Self {
            id: NodeId::new(),
            pose,
            parent: None,
        }
    }

    pub fn with_parent(pose: Pose, parent: Option<NodeId>) -> Self {
        Self {
            id: NodeId::new(),
            pose,
            parent,
        }
    }
}

/// Start or goal of a query: either a raw pose or a node the caller already holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Pose(Pose),
    Node(Node),
}

impl Endpoint {
    pub fn pose(&self) -> Pose {
        match self {
            Endpoint::Pose(pose) => *pose,
            Endpoint::Node(node) => node.pose,
        }
    }

    /// Resolves to an owned node. Raw poses get a fresh identity and no parent.
    pub fn into_node(self) -> Node {
        match self {
            Endpoint::Pose(pose) => Node::new(pose),
            Endpoint::Node(node) => node,
        }
    }
}

impl From<Pose> for Endpoint {
    fn from(pose: Pose) -> Self {
        Endpoint::Pose(pose)
    }
}

impl From<Node> for Endpoint {
    fn from(node: Node) -> Self {
        Endpoint::Node(node)
    }
}
