//! Non-persistent geometric queries between robot links and obstacles.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test_capsule_obstacle()`](intersection_test_capsule_obstacle) to
//!   determine if a link capsule and an obstacle are intersecting or not.
//! * [`query::distance_capsule_obstacle()`](distance_capsule_obstacle) to compute the
//!   [`Clearance`] between a link capsule and an obstacle, including the pair of witness points
//!   realizing it.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. For example `distance_capsule_ball` computes the clearance between a
//! capsule and an obstacle known at compile-time to be a ball.
//! The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `closest_points`, `distance` or `intersection_test`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `capsule`, or
//!   `segment`.
//! * `[shape2]` is the type of the second shape passed to the function, e.g., `cuboid`, or
//!   `rectangle`.

pub use self::clearance::{Clearance, Witnesses};
pub use self::distance::distance_capsule_obstacle;
pub use self::intersection_test::intersection_test_capsule_obstacle;

mod clearance;
mod closest_points;
mod distance;
mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::distance::*;
    pub use super::intersection_test::*;
}
