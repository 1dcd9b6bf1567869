use crate::math::{Point, Real};
use crate::shape::Segment;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape defined as a round segment.
///
/// This is the volume swept by a ball of radius `radius` along `segment`. Each link of a
/// robot is modeled by one capsule, rebuilt from the robot skeleton for every query.
pub struct Capsule {
    /// The axis and endpoint of the capsule.
    pub segment: Segment,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let segment = Segment::new(a, b);
        Self { segment, radius }
    }

    /// A capsule with a zero radius, i.e., the segment itself.
    pub fn from_segment(segment: Segment) -> Self {
        Self {
            segment,
            radius: 0.0,
        }
    }

    /// The height of this capsule.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// This capsule with its radius increased by `margin`.
    #[must_use]
    pub fn inflated(&self, margin: Real) -> Self {
        Self {
            segment: self.segment,
            radius: self.radius + margin,
        }
    }

    /// The same capsule with the endpoints of its segment swapped.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            segment: self.segment.swapped(),
            radius: self.radius,
        }
    }
}
