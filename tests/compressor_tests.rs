use prm_planner::domains::path_planning::{
    reduce_waypoints, Obstacle, Pose, Position2D, Workspace, WorkspaceBounds,
};

fn open_field() -> Workspace {
    Workspace::new(WorkspaceBounds {
        min_x: -10.0,
        max_x: 10.0,
        min_y: -10.0,
        max_y: 10.0,
    })
}

fn xy(poses: &[Pose]) -> Vec<(f64, f64)> {
    poses.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn test_clear_path_collapses_to_endpoints() {
    let raw: Vec<Pose> = (0..6).map(|i| Pose::from_xy(i as f64, (i % 2) as f64)).collect();
    let reduced = reduce_waypoints(&open_field(), &raw);
    assert_eq!(reduced, vec![raw[0], raw[5]]);
}

#[test]
fn test_short_paths_are_returned_unchanged() {
    let ws = open_field();
    assert!(reduce_waypoints(&ws, &[]).is_empty());
    let one = [Pose::from_xy(1.0, 1.0)];
    assert_eq!(reduce_waypoints(&ws, &one), one.to_vec());
    let two = [Pose::from_xy(1.0, 1.0), Pose::from_xy(2.0, 2.0)];
    assert_eq!(reduce_waypoints(&ws, &two), two.to_vec());
}

#[test]
fn test_detour_around_obstacle_keeps_corner() {
    let block = Obstacle::rectangle("block", Position2D::new(0.0, 0.0), 2.0, 2.0);
    let ws = open_field().with_obstacle(block);
    let raw = vec![
        Pose::from_xy(-3.0, 0.0),
        Pose::from_xy(-2.0, 2.0),
        Pose::from_xy(-1.0, 3.0),
        Pose::from_xy(1.0, 3.0),
        Pose::from_xy(2.0, 2.0),
        Pose::from_xy(3.0, 0.0),
    ];
    let reduced = reduce_waypoints(&ws, &raw);

    assert_eq!(reduced.first(), raw.first());
    assert_eq!(reduced.last(), raw.last());
    assert!(reduced.len() < raw.len());
    assert!(reduced.len() > 2);
    for w in reduced.windows(2) {
        assert!(ws.is_segment_free(&w[0], &w[1]));
    }
    // Kept waypoints preserve their original order.
    let order: Vec<usize> = xy(&reduced)
        .iter()
        .map(|p| xy(&raw).iter().position(|q| q == p).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}
