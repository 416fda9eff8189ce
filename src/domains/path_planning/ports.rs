use crate::common::DomainResult;
use crate::domains::path_planning::types::Pose;
use rand::RngCore;

/// Port through which the planner asks the world about free space.
/// Implementations decide how collision is computed; the planner only consumes answers.
pub trait GeometryOracle: Send + Sync {
    /// True iff the straight segment between `a` and `b` is no longer than
    /// `max_distance` and collision-free.
    fn is_connectable(&self, a: &Pose, b: &Pose, max_distance: f64) -> bool;

    /// A uniformly sampled collision-free pose, or `None` when the sampler gives up.
    fn sample_free_pose(&self, rng: &mut dyn RngCore) -> Option<Pose>;
}

/// Port for storing and retrieving built roadmaps in various backends.
pub trait RoadmapStore: Send + Sync {
    /// Save raw roadmap bytes under the given name
    fn save_roadmap_bytes(&self, name: &str, bytes: &[u8]) -> DomainResult<()>;
    /// Load raw roadmap bytes previously saved
    fn load_roadmap_bytes(&self, name: &str) -> DomainResult<Vec<u8>>;
    /// Delete a stored roadmap
    fn delete_roadmap(&self, name: &str) -> DomainResult<()>;
}
