//! Shapes involved in the clearance queries.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::obstacle::{Obstacle, ShapeType};
pub use self::rectangle::Rectangle;
pub(crate) use self::rectangle::other_axes;
pub use self::segment::Segment;

mod ball;
mod capsule;
mod obstacle;
mod rectangle;
mod segment;
