use crate::math::{Point2, Real};
use crate::query::details::closest_points_segment_rectangle_edges;
use crate::shape::{Capsule, Rectangle};

/// Tests whether a capsule intersects an axis-aligned rectangle.
///
/// If the capsule segment crosses the rectangle plane, the crossing point is tested against
/// the rectangle grown by the capsule radius. Otherwise, the nearest point of the rectangle is
/// either the orthogonal projection of one endpoint, or lies on one of the edges facing the
/// projection of an endpoint.
///
/// With a zero radius, this tests whether the segment crosses the rectangle interior.
pub fn intersection_test_capsule_rectangle(capsule: &Capsule, rect: &Rectangle) -> bool {
    let seg = &capsule.segment;
    let radius = capsule.radius;

    let da = seg.a[rect.axis] - rect.offset;
    let db = seg.b[rect.axis] - rect.offset;
    let a2 = rect.project(&seg.a);
    let b2 = rect.project(&seg.b);

    let t = if db != da { -da / (db - da) } else { Real::INFINITY };

    if t > 0.0 && t < 1.0 {
        let crossing = a2 + (b2 - a2) * t;

        if rect.rounded_contains(&crossing, radius) {
            return true;
        }
    } else if da.abs().min(db.abs()) >= radius {
        // The segment stays on one side of the plane, out of reach.
        return false;
    }

    if radius <= 0.0 {
        return false;
    }

    let dist_to_edges = |pt: &Point2<Real>| {
        closest_points_segment_rectangle_edges(seg, rect, pt).map_or(Real::MAX, |res| res.dist())
    };

    let dist = match (rect.contains_projection(&a2), rect.contains_projection(&b2)) {
        (true, true) => da.abs().min(db.abs()),
        (true, false) => da.abs().min(dist_to_edges(&b2)),
        (false, true) => db.abs().min(dist_to_edges(&a2)),
        (false, false) => dist_to_edges(&a2).min(dist_to_edges(&b2)),
    };

    dist < radius
}
