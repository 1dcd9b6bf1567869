use crate::math::{Point, Real};
use crate::query::Clearance;
use crate::shape::Segment;

/// Closest points between a segment and a point.
///
/// The witness on the segment is the projection of `pt` clamped to the segment. A segment
/// with both vertices equal behaves as its first vertex.
#[inline]
pub fn closest_points_segment_point(seg: &Segment, pt: &Point<Real>) -> Clearance {
    Clearance::from_witnesses(seg.project_point(pt), *pt)
}
