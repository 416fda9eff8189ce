use crate::domains::path_planning::ports::GeometryOracle;
use crate::domains::path_planning::types::Pose;

/// Drops interior waypoints that a straight, collision-free segment can skip.
///
/// Greedy forward scan: from each kept waypoint, jump to the farthest later
/// waypoint the oracle can connect to directly. The first and last waypoints
/// are always kept.
pub fn reduce_waypoints(oracle: &dyn GeometryOracle, poses: &[Pose]) -> Vec<Pose> {
    if poses.len() <= 2 {
        return poses.to_vec();
    }

    let last = poses.len() - 1;
    let mut reduced = vec![poses[0]];
    let mut anchor = 0;
    while anchor < last {
        let next = (anchor + 2..=last)
            .rev()
            .find(|&candidate| {
                oracle.is_connectable(&poses[anchor], &poses[candidate], f64::INFINITY)
            })
            .unwrap_or(anchor + 1);
        reduced.push(poses[next]);
        anchor = next;
    }
    reduced
}
