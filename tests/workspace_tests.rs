use prm_planner::domains::path_planning::{
    GeometryOracle, Obstacle, Pose, Position2D, Workspace, WorkspaceBounds,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn square(half: f64) -> Workspace {
    Workspace::new(WorkspaceBounds {
        min_x: -half,
        max_x: half,
        min_y: -half,
        max_y: half,
    })
}

#[test]
fn test_circle_blocks_crossing_segment() {
    let ws = square(5.0).with_obstacle(Obstacle::circle("c", Position2D::new(0.0, 0.0), 1.0));
    let a = Pose::from_xy(-3.0, 0.0);
    let b = Pose::from_xy(3.0, 0.0);
    assert!(!ws.is_connectable(&a, &b, 10.0));

    let above = Pose::from_xy(3.0, 2.0);
    let left = Pose::from_xy(-3.0, 2.0);
    assert!(ws.is_connectable(&left, &above, 10.0));
}

#[test]
fn test_connection_respects_max_distance() {
    let ws = square(5.0);
    let a = Pose::from_xy(0.0, 0.0);
    let b = Pose::from_xy(3.0, 4.0);
    assert!(ws.is_connectable(&a, &b, 5.0));
    assert!(!ws.is_connectable(&a, &b, 4.99));
    assert!(ws.is_connectable(&a, &b, f64::INFINITY));
}

#[test]
fn test_inflation_keeps_clearance_from_rectangle() {
    let ws = square(5.0)
        .with_obstacle(Obstacle::rectangle("r", Position2D::new(0.0, 0.0), 2.0, 2.0))
        .with_inflation_radius(0.5);
    // Passes 0.3 above the top edge: clear without inflation, blocked with it.
    let a = Pose::from_xy(-3.0, 1.3);
    let b = Pose::from_xy(3.0, 1.3);
    assert!(!ws.is_connectable(&a, &b, 10.0));

    let high_a = Pose::from_xy(-3.0, 2.0);
    let high_b = Pose::from_xy(3.0, 2.0);
    assert!(ws.is_connectable(&high_a, &high_b, 10.0));
}

#[test]
fn test_polygon_interior_is_not_free() {
    let triangle = Obstacle::polygon(
        "t",
        Position2D::new(1.0, 1.0),
        vec![
            Position2D::new(0.0, 0.0),
            Position2D::new(2.0, 0.0),
            Position2D::new(0.0, 2.0),
        ],
    );
    let ws = square(5.0).with_obstacle(triangle);
    assert!(!ws.is_collision_free(&Pose::from_xy(1.5, 1.5)));
    assert!(ws.is_collision_free(&Pose::from_xy(3.5, 3.5)));
    assert!(!ws.is_segment_free(&Pose::from_xy(1.2, -1.0), &Pose::from_xy(1.2, 4.0)));
}

#[test]
fn test_out_of_bounds_is_never_connectable() {
    let ws = square(1.0).with_inflation_radius(0.2);
    assert!(!ws.is_collision_free(&Pose::from_xy(0.9, 0.0)));
    assert!(!ws.is_connectable(&Pose::from_xy(0.0, 0.0), &Pose::from_xy(0.9, 0.0), 5.0));
    assert!(ws.is_connectable(&Pose::from_xy(0.0, 0.0), &Pose::from_xy(0.7, 0.0), 5.0));
}

#[test]
fn test_samples_are_free_and_inside_bounds() {
    let ws = square(5.0)
        .with_obstacle(Obstacle::circle("c", Position2D::new(0.0, 0.0), 2.0))
        .with_inflation_radius(0.1);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pose = ws.sample_free_pose(&mut rng).unwrap();
        assert!(ws.is_collision_free(&pose));
        assert!(pose.position().distance_to(&Position2D::new(0.0, 0.0)) > 2.1);
        assert!(pose.yaw >= -std::f64::consts::PI && pose.yaw < std::f64::consts::PI);
    }
}

#[test]
fn test_sampler_gives_up_when_space_is_blocked() {
    let ws = square(1.0)
        .with_obstacle(Obstacle::rectangle("all", Position2D::new(0.0, 0.0), 4.0, 4.0))
        .with_max_sample_tries(25);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(ws.sample_free_pose(&mut rng).is_none());

    // Inflation larger than the workspace leaves nothing to sample.
    let tiny = square(1.0).with_inflation_radius(2.0);
    assert!(tiny.sample_free_pose(&mut rng).is_none());
}

#[test]
fn test_workspace_deserializes_from_toml() {
    let ws: Workspace = toml::from_str(
        r#"
        inflation_radius = 0.25

        [bounds]
        min_x = -2.0
        max_x = 2.0
        min_y = -1.0
        max_y = 1.0

        [[obstacles]]
        id = "pillar"
        position = { x = 0.0, y = 0.0 }
        shape = { circle = { radius = 0.5 } }
        "#,
    )
    .unwrap();
    assert_eq!(ws.obstacles.len(), 1);
    assert_eq!(ws.max_sample_tries, 1000);
    assert!(!ws.is_collision_free(&Pose::from_xy(0.6, 0.0)));
    assert!(ws.is_collision_free(&Pose::from_xy(1.5, 0.0)));
}

#[test]
fn test_non_finite_bounds_are_rejected() {
    let nan = Workspace::new(WorkspaceBounds {
        min_x: f64::NAN,
        max_x: 1.0,
        min_y: -1.0,
        max_y: 1.0,
    });
    let unbounded = Workspace::new(WorkspaceBounds {
        min_x: f64::NEG_INFINITY,
        max_x: f64::INFINITY,
        min_y: -1.0,
        max_y: 1.0,
    });
    assert!(nan.validate().is_err());
    assert!(unbounded.validate().is_err());
    assert!(square(1.0).validate().is_ok());

    // Sampling refuses instead of panicking inside the RNG.
    let mut rng = StdRng::seed_from_u64(3);
    assert!(nan.sample_free_pose(&mut rng).is_none());
    assert!(unbounded.sample_free_pose(&mut rng).is_none());
}

#[test]
fn test_inverted_bounds_and_bad_inflation_are_rejected() {
    let inverted = Workspace::new(WorkspaceBounds {
        min_x: 1.0,
        max_x: -1.0,
        min_y: -1.0,
        max_y: 1.0,
    });
    assert!(inverted.validate().is_err());

    let mut inflated = square(1.0);
    inflated.inflation_radius = f64::NAN;
    assert!(inflated.validate().is_err());
}
