pub mod geometry;

use self::geometry::{
    point_in_polygon, point_segment_distance, polygon_edges, segment_segment_distance,
    segments_intersect,
};
use super::ports::GeometryOracle;
use super::types::{Pose, Position2D};
use crate::common::{DomainError, DomainResult};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Rectangular world with static obstacles. Collision checks treat the robot
/// as a disc of `inflation_radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub bounds: WorkspaceBounds,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub inflation_radius: f64,
    #[serde(default = "default_max_sample_tries")]
    pub max_sample_tries: usize,
}

fn default_max_sample_tries() -> usize {
    1000
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkspaceBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: String,
    pub shape: ObstacleShape,
    pub position: Position2D,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleShape {
    Circle { radius: f64 },
    /// Axis-aligned, centred on the obstacle position.
    Rectangle { width: f64, height: f64 },
    /// Vertices relative to the obstacle position.
    Polygon { vertices: Vec<Position2D> },
}

impl Obstacle {
    pub fn circle(id: &str, center: Position2D, radius: f64) -> Self {
        Self {
            id: id.to_string(),
            shape: ObstacleShape::Circle { radius },
            position: center,
        }
    }

    pub fn rectangle(id: &str, center: Position2D, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            shape: ObstacleShape::Rectangle { width, height },
            position: center,
        }
    }

    pub fn polygon(id: &str, origin: Position2D, vertices: Vec<Position2D>) -> Self {
        Self {
            id: id.to_string(),
            shape: ObstacleShape::Polygon { vertices },
            position: origin,
        }
    }

    /// World-frame outline for the polygonal shapes; `None` for circles.
    fn outline(&self) -> Option<Vec<Position2D>> {
        let c = self.position;
        match &self.shape {
            ObstacleShape::Circle { .. } => None,
            ObstacleShape::Rectangle { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                Some(vec![
                    Position2D::new(c.x - hw, c.y - hh),
                    Position2D::new(c.x + hw, c.y - hh),
                    Position2D::new(c.x + hw, c.y + hh),
                    Position2D::new(c.x - hw, c.y + hh),
                ])
            }
            ObstacleShape::Polygon { vertices } => Some(
                vertices
                    .iter()
                    .map(|v| Position2D::new(c.x + v.x, c.y + v.y))
                    .collect(),
            ),
        }
    }

    /// Distance from a point to the obstacle; zero inside it.
    pub fn distance_to_point(&self, p: Position2D) -> f64 {
        match (&self.shape, self.outline()) {
            (ObstacleShape::Circle { radius }, _) => {
                (p.distance_to(&self.position) - radius).max(0.0)
            }
            (_, Some(outline)) => {
                if point_in_polygon(p, &outline) {
                    return 0.0;
                }
                polygon_edges(&outline)
                    .map(|(a, b)| point_segment_distance(p, a, b))
                    .fold(f64::INFINITY, f64::min)
            }
            (_, None) => f64::INFINITY,
        }
    }

    /// Distance from a segment to the obstacle; zero when they overlap.
    pub fn distance_to_segment(&self, a: Position2D, b: Position2D) -> f64 {
        match (&self.shape, self.outline()) {
            (ObstacleShape::Circle { radius }, _) => {
                (point_segment_distance(self.position, a, b) - radius).max(0.0)
            }
            (_, Some(outline)) => {
                if point_in_polygon(a, &outline) || point_in_polygon(b, &outline) {
                    return 0.0;
                }
                let mut best = f64::INFINITY;
                for (u, v) in polygon_edges(&outline) {
                    if segments_intersect(a, b, u, v) {
                        return 0.0;
                    }
                    best = best.min(segment_segment_distance(a, b, u, v));
                }
                best
            }
            (_, None) => f64::INFINITY,
        }
    }
}

impl Workspace {
    pub fn new(bounds: WorkspaceBounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            inflation_radius: 0.0,
            max_sample_tries: default_max_sample_tries(),
        }
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn with_inflation_radius(mut self, radius: f64) -> Self {
        self.inflation_radius = radius.max(0.0);
        self
    }

    pub fn with_max_sample_tries(mut self, tries: usize) -> Self {
        self.max_sample_tries = tries;
        self
    }

    /// Bounds must be finite with `min <= max`, the inflation radius finite
    /// and non-negative.
    pub fn validate(&self) -> DomainResult<()> {
        let b = &self.bounds;
        let finite = [b.min_x, b.max_x, b.min_y, b.max_y].iter().all(|v| v.is_finite());
        if !finite || b.min_x > b.max_x || b.min_y > b.max_y {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "workspace bounds must be finite with min <= max, got x [{}, {}] y [{}, {}]",
                    b.min_x, b.max_x, b.min_y, b.max_y
                ),
            });
        }
        if !(self.inflation_radius.is_finite() && self.inflation_radius >= 0.0) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "inflation_radius must be finite and non-negative, got {}",
                    self.inflation_radius
                ),
            });
        }
        Ok(())
    }

    /// Inside the bounds shrunk by the inflation radius.
    pub fn is_position_in_workspace(&self, position: &Position2D) -> bool {
        let r = self.inflation_radius;
        let bounds = &self.bounds;
        position.x >= bounds.min_x + r
            && position.x <= bounds.max_x - r
            && position.y >= bounds.min_y + r
            && position.y <= bounds.max_y - r
    }

    pub fn is_collision_free(&self, pose: &Pose) -> bool {
        let p = pose.position();
        self.is_position_in_workspace(&p)
            && self
                .obstacles
                .iter()
                .all(|o| o.distance_to_point(p) > self.inflation_radius)
    }

    pub fn is_segment_free(&self, a: &Pose, b: &Pose) -> bool {
        // Bounds are convex, so checking both endpoints covers the whole segment.
        let (pa, pb) = (a.position(), b.position());
        self.is_position_in_workspace(&pa)
            && self.is_position_in_workspace(&pb)
            && self
                .obstacles
                .iter()
                .all(|o| o.distance_to_segment(pa, pb) > self.inflation_radius)
    }
}

impl GeometryOracle for Workspace {
    fn is_connectable(&self, a: &Pose, b: &Pose, max_distance: f64) -> bool {
        a.distance_to(b) <= max_distance && self.is_segment_free(a, b)
    }

    fn sample_free_pose(&self, rng: &mut dyn RngCore) -> Option<Pose> {
        let r = self.inflation_radius;
        let (lo_x, hi_x) = (self.bounds.min_x + r, self.bounds.max_x - r);
        let (lo_y, hi_y) = (self.bounds.min_y + r, self.bounds.max_y - r);
        // Also rejects NaN and infinite ranges, which `gen_range` cannot sample.
        let finite = [lo_x, hi_x, lo_y, hi_y].iter().all(|v| v.is_finite());
        if !finite || lo_x > hi_x || lo_y > hi_y {
            return None;
        }
        for _ in 0..self.max_sample_tries {
            let pose = Pose::new(
                rng.gen_range(lo_x..=hi_x),
                rng.gen_range(lo_y..=hi_y),
                rng.gen_range(-PI..PI),
            );
            if self.is_collision_free(&pose) {
                return Some(pose);
            }
        }
        None
    }
}
