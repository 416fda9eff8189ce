//! Planar segment and polygon predicates used by the workspace collision checks.

use crate::domains::path_planning::types::Position2D;

const EPS: f64 = 1e-12;

fn cross(o: Position2D, a: Position2D, b: Position2D) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn on_segment(p: Position2D, a: Position2D, b: Position2D) -> bool {
    p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}

pub fn point_segment_distance(p: Position2D, a: Position2D, b: Position2D) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq < EPS {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Position2D::new(a.x + t * dx, a.y + t * dy))
}

/// Closed-segment intersection test, touching and collinear overlap included.
pub fn segments_intersect(p1: Position2D, p2: Position2D, q1: Position2D, q2: Position2D) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);

    if ((d1 > EPS && d2 < -EPS) || (d1 < -EPS && d2 > EPS))
        && ((d3 > EPS && d4 < -EPS) || (d3 < -EPS && d4 > EPS))
    {
        return true;
    }

    (d1.abs() <= EPS && on_segment(p1, q1, q2))
        || (d2.abs() <= EPS && on_segment(p2, q1, q2))
        || (d3.abs() <= EPS && on_segment(q1, p1, p2))
        || (d4.abs() <= EPS && on_segment(q2, p1, p2))
}

pub fn segment_segment_distance(
    p1: Position2D,
    p2: Position2D,
    q1: Position2D,
    q2: Position2D,
) -> f64 {
    if segments_intersect(p1, p2, q1, q2) {
        return 0.0;
    }
    point_segment_distance(p1, q1, q2)
        .min(point_segment_distance(p2, q1, q2))
        .min(point_segment_distance(q1, p1, p2))
        .min(point_segment_distance(q2, p1, p2))
}

/// Even-odd ray casting. Points exactly on an edge may land on either side.
pub fn point_in_polygon(p: Position2D, vertices: &[Position2D]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Consecutive vertex pairs, closing the ring.
pub fn polygon_edges(
    vertices: &[Position2D],
) -> impl Iterator<Item = (Position2D, Position2D)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
