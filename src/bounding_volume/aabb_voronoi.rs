//! Voronoï regions of the exterior of an AABB.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::shape::{other_axes, Segment};

/// One of the two sides of an AABB along one axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AabbSide {
    /// The side of the minimum bound.
    Min,
    /// The side of the maximum bound.
    Max,
}

/// A face of an AABB, identified by its normal axis and its side.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AabbFace {
    /// The axis orthogonal to the face.
    pub axis: usize,
    /// The side of the AABB the face lies on.
    pub side: AabbSide,
}

impl AabbFace {
    /// The six faces of an AABB: `x_min, y_min, z_min, x_max, y_max, z_max`.
    pub const ALL: [AabbFace; 6] = [
        AabbFace::new(0, AabbSide::Min),
        AabbFace::new(1, AabbSide::Min),
        AabbFace::new(2, AabbSide::Min),
        AabbFace::new(0, AabbSide::Max),
        AabbFace::new(1, AabbSide::Max),
        AabbFace::new(2, AabbSide::Max),
    ];

    /// Creates a face identifier.
    #[inline]
    pub const fn new(axis: usize, side: AabbSide) -> Self {
        Self { axis, side }
    }

    /// Is `pt` strictly on the outer side of the plane of this face?
    #[inline]
    pub fn is_beyond(&self, aabb: &Aabb, pt: &Point<Real>) -> bool {
        match self.side {
            AabbSide::Min => pt[self.axis] < aabb.mins[self.axis],
            AabbSide::Max => pt[self.axis] > aabb.maxs[self.axis],
        }
    }
}

/// Location of a point relative to the faces of an AABB.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointLocation {
    /// The point lies strictly inside of the AABB.
    Inside,
    /// The orthogonal projection of the point lies on the given face.
    OnFace {
        /// The face the point projects on.
        face: AabbFace,
        /// The distance between the point and its projection.
        dist: Real,
    },
    /// The point does not project orthogonally on any face.
    Outside,
}

impl PointLocation {
    /// Locates `pt` relative to the faces of `aabb`.
    ///
    /// A point on the boundary of the AABB projects on a face with a zero distance.
    pub fn locate(aabb: &Aabb, pt: &Point<Real>) -> Self {
        for axis in 0..DIM {
            let [i, j] = other_axes(axis);

            if pt[i] >= aabb.mins[i]
                && pt[i] <= aabb.maxs[i]
                && pt[j] >= aabb.mins[j]
                && pt[j] <= aabb.maxs[j]
            {
                return if pt[axis] > aabb.mins[axis] && pt[axis] < aabb.maxs[axis] {
                    PointLocation::Inside
                } else if pt[axis] <= aabb.mins[axis] {
                    PointLocation::OnFace {
                        face: AabbFace::new(axis, AabbSide::Min),
                        dist: aabb.mins[axis] - pt[axis],
                    }
                } else {
                    PointLocation::OnFace {
                        face: AabbFace::new(axis, AabbSide::Max),
                        dist: pt[axis] - aabb.maxs[axis],
                    }
                };
            }
        }

        PointLocation::Outside
    }
}

/// The exterior Voronoï region of an AABB containing a whole segment.
///
/// The exterior of a box is partitioned into regions closest to one of its faces, edges, or
/// corners. A segment is classified by the sides of the box both its endpoints lie beyond:
/// the more axes they agree on, the smaller the feature that holds the closest point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentVoronoiRegion {
    /// Both endpoints lie beyond the same side on every axis: the closest feature is a corner.
    Corner {
        /// The side of the corner along each axis.
        sides: [AabbSide; 3],
    },
    /// Both endpoints lie beyond the same sides on two axes: the closest feature is the edge
    /// parallel to the third axis.
    Edge {
        /// The axis the edge is parallel to.
        axis: usize,
        /// The side of the edge along the two other axes, in increasing order.
        sides: [AabbSide; 2],
    },
    /// Both endpoints lie beyond the same side of only one axis: the closest feature is on
    /// the boundary of this face.
    Face(AabbFace),
    /// The endpoints do not lie beyond a common side: any edge may hold the closest point, and
    /// the segment may cross the AABB.
    Spanning,
}

impl SegmentVoronoiRegion {
    /// The common side of `aabb` that both endpoints of `segment` lie beyond, for each axis.
    pub fn common_sides(aabb: &Aabb, segment: &Segment) -> [Option<AabbSide>; 3] {
        let mut sides = [None; 3];

        for (axis, side) in sides.iter_mut().enumerate() {
            if segment.a[axis] < aabb.mins[axis] && segment.b[axis] < aabb.mins[axis] {
                *side = Some(AabbSide::Min);
            } else if segment.a[axis] > aabb.maxs[axis] && segment.b[axis] > aabb.maxs[axis] {
                *side = Some(AabbSide::Max);
            }
        }

        sides
    }

    /// Classifies `segment` into the Voronoï region of `aabb` it is contained in.
    pub fn classify(aabb: &Aabb, segment: &Segment) -> Self {
        match Self::common_sides(aabb, segment) {
            [Some(sx), Some(sy), Some(sz)] => SegmentVoronoiRegion::Corner {
                sides: [sx, sy, sz],
            },
            [None, Some(sy), Some(sz)] => SegmentVoronoiRegion::Edge {
                axis: 0,
                sides: [sy, sz],
            },
            [Some(sx), None, Some(sz)] => SegmentVoronoiRegion::Edge {
                axis: 1,
                sides: [sx, sz],
            },
            [Some(sx), Some(sy), None] => SegmentVoronoiRegion::Edge {
                axis: 2,
                sides: [sx, sy],
            },
            [Some(sx), None, None] => SegmentVoronoiRegion::Face(AabbFace::new(0, sx)),
            [None, Some(sy), None] => SegmentVoronoiRegion::Face(AabbFace::new(1, sy)),
            [None, None, Some(sz)] => SegmentVoronoiRegion::Face(AabbFace::new(2, sz)),
            [None, None, None] => SegmentVoronoiRegion::Spanning,
        }
    }
}
