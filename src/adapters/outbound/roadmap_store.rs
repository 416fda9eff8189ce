use crate::common::{DomainError, DomainResult};
use crate::domains::path_planning::ports::RoadmapStore;
use crate::domains::path_planning::roadmap::{Roadmap, RoadmapSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const MAGIC: &[u8; 4] = b"PRMR";
const FORMAT_VERSION: u8 = 1;
const PREFIX_LEN: usize = MAGIC.len() + 1 + 4;

/// JSON header written in front of the bincode payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapFileHeader {
    pub format: String,
    pub version: u8,
    pub node_count: usize,
    pub edge_count: usize,
    pub saved_at: DateTime<Utc>,
}

fn infra<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::InfrastructureError(format!("{}", e))
}

/// Serializes a roadmap: magic, version byte, little-endian header length,
/// JSON header, bincode payload.
pub fn encode_roadmap(roadmap: &Roadmap) -> DomainResult<Vec<u8>> {
    let snapshot = roadmap.snapshot();
    let header = RoadmapFileHeader {
        format: "prm-roadmap-bincode".to_string(),
        version: FORMAT_VERSION,
        node_count: snapshot.node_count(),
        edge_count: snapshot.edge_count(),
        saved_at: Utc::now(),
    };
    let header_bytes = serde_json::to_vec(&header)?;
    let payload = bincode::serialize(&snapshot).map_err(infra)?;

    let mut bytes = Vec::with_capacity(PREFIX_LEN + header_bytes.len() + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend_from_slice(&(header_bytes.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&header_bytes);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Inverse of [`encode_roadmap`]. Version 0 files carry no header.
pub fn decode_roadmap(bytes: &[u8]) -> DomainResult<(Roadmap, Option<RoadmapFileHeader>)> {
    if bytes.len() < PREFIX_LEN || &bytes[..4] != MAGIC {
        return Err(DomainError::InfrastructureError(
            "not a roadmap file (bad magic)".to_string(),
        ));
    }
    let version = bytes[4];
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&bytes[5..PREFIX_LEN]);
    let header_len = u32::from_le_bytes(len_bytes) as usize;
    let payload_start = PREFIX_LEN + header_len;
    if bytes.len() < payload_start {
        return Err(DomainError::InfrastructureError(
            "truncated roadmap header".to_string(),
        ));
    }

    let header = match version {
        0 => None,
        FORMAT_VERSION => Some(serde_json::from_slice::<RoadmapFileHeader>(
            &bytes[PREFIX_LEN..payload_start],
        )?),
        other => {
            return Err(DomainError::InfrastructureError(format!(
                "unsupported roadmap file version {}",
                other
            )))
        }
    };

    let snapshot: RoadmapSnapshot = bincode::deserialize(&bytes[payload_start..]).map_err(infra)?;
    if let Some(h) = &header {
        if h.node_count != snapshot.node_count() || h.edge_count != snapshot.edge_count() {
            return Err(DomainError::InfrastructureError(format!(
                "roadmap header declares {} nodes / {} edges but payload holds {} / {}",
                h.node_count,
                h.edge_count,
                snapshot.node_count(),
                snapshot.edge_count()
            )));
        }
    }
    Ok((Roadmap::from_snapshot(snapshot)?, header))
}

/// Resolve the roadmap data directory.
/// Precedence: PRM_DATA_DIR env var -> ./resources/prm -> /usr/share/prm-planner
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(v) = env::var("PRM_DATA_DIR") {
        return PathBuf::from(v);
    }
    let cwd_default = Path::new("resources/prm");
    if cwd_default.exists() {
        return cwd_default.to_path_buf();
    }
    PathBuf::from("/usr/share/prm-planner")
}

pub struct FilesystemRoadmapStore {
    base: PathBuf,
}

impl FilesystemRoadmapStore {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self {
            base: base.unwrap_or_else(resolve_data_dir),
        }
    }

    fn roadmap_path(&self, name: &str) -> PathBuf {
        let mut p = self.base.clone();
        p.push("roadmaps");
        p.push(name);
        p
    }

    pub fn save_roadmap(&self, name: &str, roadmap: &Roadmap) -> DomainResult<()> {
        let bytes = encode_roadmap(roadmap)?;
        self.save_roadmap_bytes(name, &bytes)
    }

    pub fn load_roadmap(&self, name: &str) -> DomainResult<Roadmap> {
        let bytes = self.load_roadmap_bytes(name)?;
        Ok(decode_roadmap(&bytes)?.0)
    }
}

impl RoadmapStore for FilesystemRoadmapStore {
    fn save_roadmap_bytes(&self, name: &str, bytes: &[u8]) -> DomainResult<()> {
        let p = self.roadmap_path(name);
        if let Some(dir) = p.parent() {
            fs::create_dir_all(dir).map_err(infra)?;
        }
        fs::write(&p, bytes).map_err(infra)
    }

    fn load_roadmap_bytes(&self, name: &str) -> DomainResult<Vec<u8>> {
        fs::read(self.roadmap_path(name)).map_err(infra)
    }

    fn delete_roadmap(&self, name: &str) -> DomainResult<()> {
        fs::remove_file(self.roadmap_path(name)).map_err(infra)
    }
}
