use crate::math::{Point, Real};
use crate::shape::Obstacle;
use crate::state_space::State;

/// The kinematic description of a robot made of a chain of capsule-shaped links.
pub trait Robot {
    /// The `[min, max]` limits of each joint.
    fn limits(&self) -> &[[Real; 2]];

    /// The number of links of this robot.
    fn num_links(&self) -> usize;

    /// The radius of the capsule enclosing the given link.
    fn link_radius(&self, link: usize) -> Real;

    /// The skeleton of this robot at the configuration `q`.
    ///
    /// This is the list of the `num_links() + 1` joint positions: link `i` is the segment
    /// between the points `i` and `i + 1`.
    fn skeleton(&self, q: &State) -> Vec<Point<Real>>;

    /// The index of the first link checked against obstacles.
    ///
    /// Links before it (for example a base link resting on a table) are ignored by every
    /// validity and distance query.
    fn first_collision_link(&self) -> usize {
        0
    }
}

/// The set of obstacles a robot must avoid.
pub trait Environment {
    /// The obstacles of this environment.
    fn obstacles(&self) -> &[Obstacle];
}

impl Environment for Vec<Obstacle> {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}

impl<const N: usize> Environment for [Obstacle; N] {
    fn obstacles(&self) -> &[Obstacle] {
        self
    }
}
