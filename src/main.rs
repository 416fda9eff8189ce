use anyhow::{Context, Result};
use prm_planner::adapters::outbound::{
    init_combined_logger, path_to_geojson, roadmap_to_geojson, to_geojson_string,
    FilesystemRoadmapStore,
};
use prm_planner::application::PlanningService;
use prm_planner::domains::path_planning::{GeometryOracle, PrmPlanner};
use prm_planner::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("PRM_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let default = PathBuf::from("config.toml");
    default.exists().then_some(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load(config_path().as_deref())?;

    // Plain subscriber without the `log` bridge, so fast_log can own the `log` facade.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PRM planner");
    let logger = init_combined_logger(config.logging.file.as_deref(), log::LevelFilter::Info);
    let oracle: Arc<dyn GeometryOracle> = Arc::new(config.workspace.clone());
    let store = FilesystemRoadmapStore::new(None);

    let planner = match &config.demo.load_roadmap {
        Some(name) => {
            let roadmap = store
                .load_roadmap(name)
                .with_context(|| format!("failed to load roadmap {}", name))?;
            info!(
                nodes = roadmap.node_count(),
                edges = roadmap.edge_count(),
                "Loaded roadmap {}",
                name
            );
            PrmPlanner::with_roadmap(config.planner.clone(), oracle, logger, roadmap)?
        }
        None => {
            let planner = PrmPlanner::new(config.planner.clone(), oracle, logger)?;
            let build = planner.last_build();
            info!(
                sampled = build.sampled,
                requested = build.requested,
                edges = build.edges,
                sampling_ms = build.sampling_time.as_secs_f64() * 1e3,
                "Roadmap sampled"
            );
            planner
        }
    };

    if let Some(name) = &config.demo.save_roadmap {
        store.save_roadmap(name, planner.roadmap())?;
        info!("Saved roadmap as {}", name);
    }

    let service = PlanningService::spawn(planner, config.service.command_buffer);
    let outcome = service
        .plan_with_outcome(config.demo.start, config.demo.goal)
        .await?;
    if outcome.path.is_empty() {
        warn!("No path from {} to {}", config.demo.start, config.demo.goal);
    } else {
        info!(
            waypoints = outcome.path.num_poses(),
            raw_waypoints = outcome.metrics.raw_waypoints,
            length = outcome.path.length(),
            "Path found"
        );
        for pose in &outcome.path.poses {
            info!("  {}", pose);
        }
    }

    let metrics = service.metrics().await?;
    info!(
        planning_ms = metrics.planning_time.as_secs_f64() * 1e3,
        total_ms = metrics.total_planning_time.as_secs_f64() * 1e3,
        "Query timing"
    );

    if let Some(out) = &config.demo.geojson_out {
        let mut collection = path_to_geojson(&outcome.path);
        for snapshot in service.graphs().await? {
            collection.features.extend(roadmap_to_geojson(&snapshot).features);
        }
        std::fs::write(out, to_geojson_string(collection))
            .with_context(|| format!("failed to write {}", out))?;
        info!("Wrote GeoJSON to {}", out);
    }

    Ok(())
}
