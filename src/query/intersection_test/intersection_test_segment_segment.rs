use crate::math::DEFAULT_EQUALITY_THRESHOLD;
use crate::query::details::closest_points_segment_segment_parameters;
use crate::shape::Segment;

/// Tests whether two segments cross each other.
///
/// This is a true intersection test rather than a distance query: the closest points of the
/// two supporting lines must lie strictly inside of both segments, and coincide up to
/// [`DEFAULT_EQUALITY_THRESHOLD`]. Parallel and degenerate segments never intersect.
pub fn intersection_test_segment_segment(seg1: &Segment, seg2: &Segment) -> bool {
    match closest_points_segment_segment_parameters(seg1, seg2) {
        Some((t, s)) if t > 0.0 && t < 1.0 && s > 0.0 && s < 1.0 => {
            na::distance(&seg1.point_at(t), &seg2.point_at(s)) < DEFAULT_EQUALITY_THRESHOLD
        }
        _ => false,
    }
}
