use crate::math::Real;
use crate::query::details::closest_points_segment_segment;
use crate::shape::Segment;

/// Distance between two segments.
///
/// Returns `0.0` if the segments are closer than the touching tolerance.
#[inline]
pub fn distance_segment_segment(segment1: &Segment, segment2: &Segment) -> Real {
    closest_points_segment_segment(segment1, segment2)
        .shrunk_by(0.0)
        .dist()
}
