use crate::query::details::{distance_capsule_ball, distance_capsule_cuboid};
use crate::query::Clearance;
use crate::shape::{Capsule, Obstacle};

/// Computes the clearance between a capsule and an obstacle.
///
/// The link witness lies on the capsule segment and the obstacle witness on the obstacle
/// surface.
pub fn distance_capsule_obstacle(capsule: &Capsule, obstacle: &Obstacle) -> Clearance {
    match obstacle {
        Obstacle::Cuboid(aabb) => distance_capsule_cuboid(capsule, aabb),
        Obstacle::Ball(ball) => distance_capsule_ball(capsule, ball),
    }
}
