use super::types::Pose;
use serde::{Deserialize, Serialize};

/// Ordered waypoints returned by a planning query. An empty path means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub poses: Vec<Pose>,
}

impl Path {
    pub fn new(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn num_poses(&self) -> usize {
        self.poses.len()
    }

    pub fn first(&self) -> Option<&Pose> {
        self.poses.first()
    }

    pub fn last(&self) -> Option<&Pose> {
        self.poses.last()
    }

    /// Polyline length of the path.
    pub fn length(&self) -> f64 {
        self.poses
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Orients every interior waypoint along the segment arriving at it.
    /// The first and last waypoints keep their own headings.
    pub fn fill_yaws(&mut self) {
        let n = self.poses.len();
        for i in 1..n.saturating_sub(1) {
            let yaw = self.poses[i - 1].heading_to(&self.poses[i]);
            self.poses[i] = self.poses[i].with_yaw(yaw);
        }
    }
}

impl From<Vec<Pose>> for Path {
    fn from(poses: Vec<Pose>) -> Self {
        Self::new(poses)
    }
}
