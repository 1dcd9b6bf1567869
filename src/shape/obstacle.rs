use crate::bounding_volume::Aabb;
use crate::shape::Ball;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Enum representing the type of an obstacle.
pub enum ShapeType {
    /// An axis-aligned box.
    Cuboid = 0,
    /// A ball shape.
    Ball,
}

/// An obstacle of the environment.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Obstacle {
    /// An axis-aligned box, given by its bounds.
    Cuboid(Aabb),
    /// A sphere.
    Ball(Ball),
}

impl Obstacle {
    /// The type of this obstacle.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Obstacle::Cuboid(_) => ShapeType::Cuboid,
            Obstacle::Ball(_) => ShapeType::Ball,
        }
    }
}

impl From<Aabb> for Obstacle {
    fn from(aabb: Aabb) -> Self {
        Obstacle::Cuboid(aabb)
    }
}

impl From<Ball> for Obstacle {
    fn from(ball: Ball) -> Self {
        Obstacle::Ball(ball)
    }
}
