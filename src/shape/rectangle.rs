//! An axis-aligned rectangle: one face of a box.

use crate::math::{Point, Point2, Real, DIM};
use crate::shape::Segment;
use arrayvec::ArrayVec;

/// The two axes orthogonal to `axis`, in increasing order.
#[inline]
pub(crate) fn other_axes(axis: usize) -> [usize; 2] {
    match axis {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// An axis-aligned rectangle embedded in 3D.
///
/// The rectangle lies on the plane `x[axis] == offset`. Its bounds are expressed in the 2D
/// coordinate system made of the two remaining axes, kept in increasing order (for example
/// `(x, z)` for a rectangle orthogonal to `y`).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rectangle {
    /// The axis orthogonal to the rectangle.
    pub axis: usize,
    /// The coordinate of the rectangle along `axis`.
    pub offset: Real,
    /// The in-plane point with minimum coordinates.
    pub mins: Point2<Real>,
    /// The in-plane point with maximum coordinates.
    pub maxs: Point2<Real>,
}

impl Rectangle {
    /// Creates a new rectangle orthogonal to `axis`.
    #[inline]
    pub fn new(axis: usize, offset: Real, mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        assert!(axis < DIM, "Invalid rectangle axis: {}", axis);
        Self {
            axis,
            offset,
            mins,
            maxs,
        }
    }

    /// Drops the coordinate along `self.axis`.
    #[inline]
    pub fn project(&self, pt: &Point<Real>) -> Point2<Real> {
        let [i, j] = other_axes(self.axis);
        Point2::new(pt[i], pt[j])
    }

    /// Builds the 3D point of the rectangle plane with the given in-plane coordinates.
    #[inline]
    pub fn lift(&self, pt: &Point2<Real>) -> Point<Real> {
        let [i, j] = other_axes(self.axis);
        let mut res = Point::origin();
        res[i] = pt.x;
        res[j] = pt.y;
        res[self.axis] = self.offset;
        res
    }

    /// Does the orthogonal projection of a point (given in plane coordinates) hit this rectangle?
    ///
    /// The rectangle boundary counts as a hit.
    #[inline]
    pub fn contains_projection(&self, pt: &Point2<Real>) -> bool {
        pt.x >= self.mins.x && pt.x <= self.maxs.x && pt.y >= self.mins.y && pt.y <= self.maxs.y
    }

    /// Is the in-plane point `pt` within `margin` of this rectangle?
    ///
    /// This tests `pt` against the rectangle grown by `margin` along both in-plane axes, with
    /// rounded corners. The grown bounds are exclusive: with a zero `margin`, only points
    /// strictly inside of the rectangle count.
    pub fn rounded_contains(&self, pt: &Point2<Real>, margin: Real) -> bool {
        let grown_x = pt.x > self.mins.x - margin && pt.x < self.maxs.x + margin;
        let grown_y = pt.y > self.mins.y - margin && pt.y < self.maxs.y + margin;

        if !grown_x || !grown_y {
            return false;
        }

        let within_x = pt.x >= self.mins.x && pt.x <= self.maxs.x;
        let within_y = pt.y >= self.mins.y && pt.y <= self.maxs.y;

        if within_x || within_y {
            return true;
        }

        // Rounded corners.
        let corner = Point2::new(
            if pt.x < self.mins.x {
                self.mins.x
            } else {
                self.maxs.x
            },
            if pt.y < self.mins.y {
                self.mins.y
            } else {
                self.maxs.y
            },
        );
        na::distance_squared(pt, &corner) < margin * margin
    }

    /// The four vertices of this rectangle, counterclockwise in plane coordinates.
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            self.lift(&self.mins),
            self.lift(&Point2::new(self.maxs.x, self.mins.y)),
            self.lift(&self.maxs),
            self.lift(&Point2::new(self.mins.x, self.maxs.y)),
        ]
    }

    /// The four edges of this rectangle.
    pub fn edges(&self) -> [Segment; 4] {
        let [v0, v1, v2, v3] = self.vertices();
        [
            Segment::new(v0, v1),
            Segment::new(v1, v2),
            Segment::new(v3, v2),
            Segment::new(v0, v3),
        ]
    }

    /// The edges of this rectangle facing the in-plane point `pt`.
    ///
    /// These are the one or two edges whose supporting line separates `pt` from the rectangle.
    /// Returns an empty list if `pt` projects on the rectangle.
    pub fn edges_facing(&self, pt: &Point2<Real>) -> ArrayVec<Segment, 2> {
        let mut edges = ArrayVec::new();
        let min_min = self.lift(&self.mins);
        let min_max = self.lift(&Point2::new(self.mins.x, self.maxs.y));
        let max_min = self.lift(&Point2::new(self.maxs.x, self.mins.y));
        let max_max = self.lift(&self.maxs);

        if pt.x < self.mins.x {
            edges.push(Segment::new(min_min, min_max));
        } else if pt.x > self.maxs.x {
            edges.push(Segment::new(max_min, max_max));
        }

        if pt.y < self.mins.y {
            edges.push(Segment::new(min_min, max_min));
        } else if pt.y > self.maxs.y {
            edges.push(Segment::new(min_max, max_max));
        }

        edges
    }
}
