use prm_planner::domains::path_planning::{ObstacleShape, Pose};
use prm_planner::Config;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

// `Config::load` reads the process environment, which tests share.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const SAMPLE: &str = r#"
[planner]
compress_path = true
max_connection_dist = 1.5
max_nodes = 200
seed = 9

[workspace]
inflation_radius = 0.2

[workspace.bounds]
min_x = 0.0
max_x = 20.0
min_y = 0.0
max_y = 10.0

[[workspace.obstacles]]
id = "shelf"
position = { x = 10.0, y = 5.0 }
shape = { rectangle = { width = 2.0, height = 6.0 } }

[logging]
filter = "prm=debug"

[demo]
start = { x = 1.0, y = 1.0 }
goal = { x = 19.0, y = 9.0, yaw = 1.57 }
save_roadmap = "warehouse"
"#;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.planner.compress_path);
    assert_eq!(config.planner.max_nodes, 50);
    assert_eq!(config.planner.max_connection_dist, 2.0);
    assert!(config.planner.seed.is_none());
    assert_eq!(config.service.command_buffer, 32);
    assert_eq!(config.logging.filter, "info");
    assert!(config.demo.load_roadmap.is_none());
}

#[test]
fn test_from_toml_str() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    assert!(config.planner.compress_path);
    assert_eq!(config.planner.max_nodes, 200);
    assert_eq!(config.planner.seed, Some(9));
    assert_eq!(config.workspace.bounds.max_x, 20.0);
    assert!(matches!(
        config.workspace.obstacles[0].shape,
        ObstacleShape::Rectangle { width, height } if width == 2.0 && height == 6.0
    ));
    assert_eq!(config.demo.start, Pose::from_xy(1.0, 1.0));
    assert_eq!(config.demo.goal, Pose::new(19.0, 9.0, 1.57));
    assert_eq!(config.demo.save_roadmap.as_deref(), Some("warehouse"));
    // Sections left out keep their defaults.
    assert_eq!(config.service.command_buffer, 32);
}

#[test]
fn test_load_from_file() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let path = dir.path().join("prm.toml");
    fs::write(&path, SAMPLE).unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.planner.max_nodes, 200);
    assert_eq!(config.planner.max_connection_dist, 1.5);
    assert_eq!(config.logging.filter, "prm=debug");
    assert_eq!(config.workspace.obstacles.len(), 1);
}

#[test]
fn test_grid_planner_rejected_at_load() {
    let err = Config::from_toml_str(
        r#"
        [planner.grid]
        resolution = 0.5
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("grid"));
}

#[test]
fn test_non_positive_distance_rejected() {
    let result = Config::from_toml_str(
        r#"
        [planner]
        max_connection_dist = 0.0
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_env_overrides_file_and_defaults() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let path = dir.path().join("prm.toml");
    fs::write(&path, SAMPLE).unwrap();

    std::env::set_var("PRM__PLANNER__MAX_NODES", "123");
    std::env::set_var("PRM__LOGGING__FILTER", "warn");
    let from_env = Config::load(None);
    let layered = Config::load(Some(&path));
    std::env::remove_var("PRM__PLANNER__MAX_NODES");
    std::env::remove_var("PRM__LOGGING__FILTER");

    let from_env = from_env.unwrap();
    assert_eq!(from_env.planner.max_nodes, 123);
    assert_eq!(from_env.logging.filter, "warn");
    assert_eq!(from_env.planner.max_connection_dist, 2.0);

    let layered = layered.unwrap();
    assert_eq!(layered.planner.max_nodes, 123);
    assert_eq!(layered.planner.max_connection_dist, 1.5);
    assert_eq!(layered.workspace.obstacles.len(), 1);
}

#[test]
fn test_non_finite_bounds_rejected() {
    for bounds in [
        "min_x = nan\nmax_x = 1.0\nmin_y = 0.0\nmax_y = 1.0",
        "min_x = 0.0\nmax_x = inf\nmin_y = 0.0\nmax_y = 1.0",
        "min_x = 2.0\nmax_x = 1.0\nmin_y = 0.0\nmax_y = 1.0",
    ] {
        let content = format!("[workspace.bounds]\n{}\n", bounds);
        let result = Config::from_toml_str(&content);
        assert!(result.is_err(), "accepted bounds: {}", bounds);
    }
}

#[test]
fn test_non_finite_bounds_rejected_at_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prm.toml");
    let content = "[workspace.bounds]\nmin_x = -inf\nmax_x = 1.0\nmin_y = 0.0\nmax_y = 1.0\n";
    fs::write(&path, content).unwrap();

    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("bounds"));
}
