use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A robot configuration: planar position plus heading in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub yaw: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn from_xy(x: f64, y: f64) -> Self {
        Self { x, y, yaw: 0.0 }
    }

    pub fn position(&self) -> Position2D {
        Position2D::new(self.x, self.y)
    }

    /// Euclidean distance between the positions, ignoring heading.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading of the straight segment from `self` to `other`.
    pub fn heading_to(&self, other: &Pose) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn with_yaw(self, yaw: f64) -> Self {
        Self {
            yaw: wrap_angle(yaw),
            ..self
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3} rad)", self.x, self.y, self.yaw)
    }
}

/// Wraps an angle into `[-pi, pi)`.
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_stays_in_range() {
        assert!((wrap_angle(3.0 * PI) - (-PI)).abs() < 1e-9);
        assert!((wrap_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-9);
        assert!((wrap_angle(2.0 * PI + 0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pose_distance_ignores_heading() {
        let a = Pose::new(0.0, 0.0, 1.0);
        let b = Pose::new(3.0, 4.0, -2.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
