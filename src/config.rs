use crate::domains::path_planning::{PlannerConfig, Pose, Workspace, WorkspaceBounds};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub workspace: Workspace,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Commands that may queue up in front of the planner task.
    pub command_buffer: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, overridden by `RUST_LOG`.
    pub filter: String,
    /// Also write planner diagnostics to this file through `fast_log`.
    pub file: Option<String>,
}

/// A query the binary runs on startup, plus optional artefacts to write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub start: Pose,
    pub goal: Pose,
    /// Name under which the built roadmap is saved in the roadmap store.
    pub save_roadmap: Option<String>,
    /// Load this stored roadmap instead of sampling a new one.
    pub load_roadmap: Option<String>,
    /// File the roadmap and path are exported to as GeoJSON.
    pub geojson_out: Option<String>,
}

impl Config {
    /// Layers defaults, an optional TOML file and `PRM__`-prefixed environment
    /// variables (e.g. `PRM__PLANNER__MAX_NODES=200`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(p) = path {
            builder = builder.add_source(config::File::from(p).format(config::FileFormat::Toml));
        }
        let layered = builder
            .add_source(
                config::Environment::with_prefix("PRM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to assemble configuration sources")?;
        let config: Config = layered
            .try_deserialize()
            .context("failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.planner.validate()?;
        self.workspace.validate()?;
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { command_buffer: 32 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: Pose::from_xy(-4.0, -4.0),
            goal: Pose::from_xy(4.0, 4.0),
            save_roadmap: None,
            load_roadmap: None,
            geojson_out: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            workspace: Workspace::new(WorkspaceBounds {
                min_x: -5.0,
                max_x: 5.0,
                min_y: -5.0,
                max_y: 5.0,
            })
            .with_inflation_radius(0.1),
            service: ServiceConfig::default(),
            logging: LoggingConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}
