use crate::math::{Point2, Real};
use crate::query::details::closest_points_segment_segments;
use crate::query::Clearance;
use crate::shape::{Rectangle, Segment};

/// Closest points between `seg` and the edges of `rect` facing the in-plane point `pt`.
///
/// Returns `None` if `pt` projects on the rectangle, in which case no edge faces it.
#[inline]
pub fn closest_points_segment_rectangle_edges(
    seg: &Segment,
    rect: &Rectangle,
    pt: &Point2<Real>,
) -> Option<Clearance> {
    closest_points_segment_segments(seg, &rect.edges_facing(pt))
}
