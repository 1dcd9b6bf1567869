//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

/// A segment shape.
///
/// Segments are the skeleton of capsules and the edges of boxes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }
}

impl Segment {
    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The segment with its two vertices swapped.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Segment::new(self.b, self.a)
    }

    /// The point `a + t * (b - a)`.
    ///
    /// The parameter is not clamped.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The parameter of the point of this segment closest to `pt`, clamped to `[0, 1]`.
    ///
    /// A segment with both vertices equal always returns `0.0`.
    #[inline]
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        let ab = self.scaled_direction();
        let sqnab = ab.norm_squared();

        if sqnab == 0.0 {
            return 0.0;
        }

        na::clamp((pt - self.a).dot(&ab) / sqnab, 0.0, 1.0)
    }

    /// The point of this segment closest to `pt`.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.point_at(self.project_parameter(pt))
    }
}
