use prm_planner::common::DomainError;
use prm_planner::domains::path_planning::{Node, NodeId, Pose, Roadmap};

fn line_roadmap(count: usize) -> (Roadmap, Vec<NodeId>) {
    let mut roadmap = Roadmap::new();
    let mut ids = Vec::new();
    for i in 0..count {
        let node = Node::new(Pose::from_xy(i as f64, 0.0));
        ids.push(node.id);
        assert!(roadmap.add_node(node));
    }
    for pair in ids.windows(2) {
        roadmap.add_edge(&pair[0], &pair[1]).unwrap();
    }
    (roadmap, ids)
}

#[test]
fn test_add_edge_is_idempotent_and_undirected() {
    let (mut roadmap, ids) = line_roadmap(2);
    assert_eq!(roadmap.edge_count(), 1);

    assert!(!roadmap.add_edge(&ids[0], &ids[1]).unwrap());
    assert!(!roadmap.add_edge(&ids[1], &ids[0]).unwrap());
    assert_eq!(roadmap.edge_count(), 1);
    assert!(roadmap.has_edge(&ids[1], &ids[0]));
}

#[test]
fn test_self_loop_is_rejected() {
    let (mut roadmap, ids) = line_roadmap(1);
    let err = roadmap.add_edge(&ids[0], &ids[0]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidCommand { .. }));
    assert_eq!(roadmap.edge_count(), 0);
}

#[test]
fn test_edge_to_unknown_node_fails() {
    let (mut roadmap, ids) = line_roadmap(1);
    let err = roadmap.add_edge(&ids[0], &NodeId::new()).unwrap_err();
    assert!(matches!(err, DomainError::NodeNotFound { .. }));
}

#[test]
fn test_duplicate_node_id_is_not_added_twice() {
    let mut roadmap = Roadmap::new();
    let node = Node::new(Pose::from_xy(1.0, 1.0));
    assert!(roadmap.add_node(node.clone()));
    assert!(!roadmap.add_node(node));
    assert_eq!(roadmap.node_count(), 1);
}

#[test]
fn test_equal_poses_are_distinct_nodes() {
    let mut roadmap = Roadmap::new();
    roadmap.add_node(Node::new(Pose::from_xy(1.0, 1.0)));
    roadmap.add_node(Node::new(Pose::from_xy(1.0, 1.0)));
    assert_eq!(roadmap.node_count(), 2);
}

#[test]
fn test_remove_node_detaches_its_edges() {
    let (mut roadmap, ids) = line_roadmap(3);
    assert_eq!(roadmap.edge_count(), 2);

    let removed = roadmap.remove_node(&ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    assert_eq!(roadmap.node_count(), 2);
    assert_eq!(roadmap.edge_count(), 0);
    assert!(roadmap.neighbors(&ids[0]).is_empty());
    assert!(roadmap.remove_node(&ids[1]).is_none());

    // Remaining nodes stay addressable after removal.
    assert!(roadmap.add_edge(&ids[0], &ids[2]).unwrap());
}

#[test]
fn test_find_path_prefers_shorter_total_distance() {
    let mut roadmap = Roadmap::new();
    let a = Node::new(Pose::from_xy(0.0, 0.0));
    let b = Node::new(Pose::from_xy(4.0, 0.0));
    let detour = Node::new(Pose::from_xy(2.0, 5.0));
    let mid = Node::new(Pose::from_xy(2.0, 0.5));
    let (ia, ib, id, im) = (a.id, b.id, detour.id, mid.id);
    for n in [a, b, detour, mid] {
        roadmap.add_node(n);
    }
    roadmap.add_edge(&ia, &id).unwrap();
    roadmap.add_edge(&id, &ib).unwrap();
    roadmap.add_edge(&ia, &im).unwrap();
    roadmap.add_edge(&im, &ib).unwrap();

    let route: Vec<NodeId> = roadmap.find_path(&ia, &ib).unwrap().iter().map(|n| n.id).collect();
    assert_eq!(route, vec![ia, im, ib]);
}

#[test]
fn test_find_path_none_when_disconnected() {
    let mut roadmap = Roadmap::new();
    let a = Node::new(Pose::from_xy(0.0, 0.0));
    let b = Node::new(Pose::from_xy(1.0, 0.0));
    let (ia, ib) = (a.id, b.id);
    roadmap.add_node(a);
    roadmap.add_node(b);
    assert!(roadmap.find_path(&ia, &ib).is_none());
    assert!(roadmap.find_path(&ia, &NodeId::new()).is_none());
}

#[test]
fn test_find_path_to_itself_is_single_node() {
    let (roadmap, ids) = line_roadmap(2);
    let route = roadmap.find_path(&ids[0], &ids[0]).unwrap();
    assert_eq!(route.len(), 1);
}

#[test]
fn test_snapshot_rebuilds_same_membership() {
    let (roadmap, _) = line_roadmap(5);
    let snapshot = roadmap.snapshot();
    assert_eq!(snapshot.node_count(), 5);
    assert_eq!(snapshot.edge_count(), 4);

    let rebuilt = Roadmap::from_snapshot(snapshot.clone()).unwrap();
    assert!(rebuilt.snapshot().same_membership(&snapshot));
}

#[test]
fn test_snapshot_with_dangling_edge_fails() {
    let (roadmap, _) = line_roadmap(2);
    let mut snapshot = roadmap.snapshot();
    snapshot.edges.push((snapshot.nodes[0].id, NodeId::new()));
    assert!(Roadmap::from_snapshot(snapshot).is_err());
}
