//! Axis Aligned Bounding Box.

use crate::bounding_volume::{AabbFace, AabbSide};
use crate::math::{Point, Point2, Real, Vector, DIM};
use crate::shape::{other_axes, Rectangle, Segment};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Here the AABB is not used as a bounding volume but as the exact representation of a box
/// obstacle.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use clearance3d::bounding_volume::Aabb;
/// use clearance3d::math::Point;
///
/// // Bounds given as `[x_min, y_min, z_min, x_max, y_max, z_max]`.
/// let aabb = Aabb::from_bounds([0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
///
/// assert_eq!(aabb.maxs, Point::new(1.0, 2.0, 3.0));
/// assert!(aabb.contains_local_point(&Point::new(0.5, 0.5, 0.5)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The vertex indices of each edge of this `Aabb`.
    ///
    /// This gives, for each edge of this `Aabb`, the indices of its
    /// vertices when taken from the `self.vertices()` array.
    /// Here is how the faces are numbered, assuming
    /// a right-handed coordinate system:
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its bounds `[x_min, y_min, z_min, x_max, y_max, z_max]`.
    #[inline]
    pub fn from_bounds(bounds: [Real; 6]) -> Aabb {
        Aabb::new(
            Point::new(bounds[0], bounds[1], bounds[2]),
            Point::new(bounds[3], bounds[4], bounds[5]),
        )
    }

    /// The bounds `[x_min, y_min, z_min, x_max, y_max, z_max]` of this AABB.
    #[inline]
    pub fn bounds(&self) -> [Real; 6] {
        [
            self.mins.x,
            self.mins.y,
            self.mins.z,
            self.maxs.x,
            self.maxs.y,
            self.maxs.z,
        ]
    }

    /// Enlarges this AABB by `amount` along every axis.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    ///
    /// Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does the interior of this AABB contain `point`?
    #[inline]
    pub fn interior_contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] <= self.mins[i] || point[i] >= self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The bound of this AABB along `axis` on the given side.
    #[inline]
    pub fn bound(&self, axis: usize, side: AabbSide) -> Real {
        match side {
            AabbSide::Min => self.mins[axis],
            AabbSide::Max => self.maxs[axis],
        }
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// The twelve edges of this `Aabb`, following [`Self::EDGES_VERTEX_IDS`].
    pub fn edges(&self) -> [Segment; 12] {
        let vtx = self.vertices();
        Self::EDGES_VERTEX_IDS.map(|(i, j)| Segment::new(vtx[i], vtx[j]))
    }

    /// The vertex of this `Aabb` on the given side of each axis.
    #[inline]
    pub fn corner(&self, sides: [AabbSide; 3]) -> Point<Real> {
        Point::new(
            self.bound(0, sides[0]),
            self.bound(1, sides[1]),
            self.bound(2, sides[2]),
        )
    }

    /// The edge of this `Aabb` parallel to `axis`.
    ///
    /// The two remaining axes, in increasing order, select their side from `sides`.
    pub fn edge(&self, axis: usize, sides: [AabbSide; 2]) -> Segment {
        let [i, j] = other_axes(axis);
        let mut a = Point::origin();
        a[i] = self.bound(i, sides[0]);
        a[j] = self.bound(j, sides[1]);
        let mut b = a;
        a[axis] = self.mins[axis];
        b[axis] = self.maxs[axis];
        Segment::new(a, b)
    }

    /// The given face of this `Aabb`, as a rectangle.
    pub fn face(&self, face: AabbFace) -> Rectangle {
        let [i, j] = other_axes(face.axis);
        Rectangle::new(
            face.axis,
            self.bound(face.axis, face.side),
            Point2::new(self.mins[i], self.mins[j]),
            Point2::new(self.maxs[i], self.maxs[j]),
        )
    }
}
