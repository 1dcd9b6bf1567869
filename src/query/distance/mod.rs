//! Implementation details of the distance queries.

pub use self::distance::distance_capsule_obstacle;
pub use self::distance_capsule_ball::distance_capsule_ball;
pub use self::distance_capsule_cuboid::distance_capsule_cuboid;
pub use self::distance_segment_segment::distance_segment_segment;

mod distance;
mod distance_capsule_ball;
mod distance_capsule_cuboid;
mod distance_segment_segment;
