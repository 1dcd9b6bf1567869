//! Implementation details of the boolean collision tests.

pub use self::intersection_test::intersection_test_capsule_obstacle;
pub use self::intersection_test_capsule_ball::intersection_test_capsule_ball;
pub use self::intersection_test_capsule_cuboid::intersection_test_capsule_cuboid;
pub use self::intersection_test_capsule_rectangle::intersection_test_capsule_rectangle;
pub use self::intersection_test_segment_segment::intersection_test_segment_segment;

mod intersection_test_capsule_ball;
mod intersection_test_capsule_cuboid;
mod intersection_test_capsule_rectangle;
mod intersection_test_segment_segment;
