use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::Clearance;
use crate::shape::Segment;

/// Parameters `(t, s)` of the closest points between the supporting lines of two segments.
///
/// The point `seg1.point_at(t)` is closest to `seg2.point_at(s)`. The parameters are not
/// clamped. Returns `None` if the system is singular, i.e., if one of the segments is
/// degenerate or if both are parallel.
#[inline]
pub fn closest_points_segment_segment_parameters(
    seg1: &Segment,
    seg2: &Segment,
) -> Option<(Real, Real)> {
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a11 = d1.norm_squared();
    let a22 = d2.norm_squared();
    let a12 = d1.dot(&d2);
    let e = d1.dot(&r);
    let f = d2.dot(&r);

    let eps = DEFAULT_EPSILON;
    if a11 <= eps || a22 <= eps {
        return None;
    }

    let a11a22 = a11 * a22;
    let a12a12 = a12 * a12;
    let denom = a11a22 - a12a12;

    // Use absolute and ulps error to test collinearity.
    if denom <= eps * a11a22 || ulps_eq!(a11a22, a12a12) {
        return None;
    }

    let t = (a12 * f - a22 * e) / denom;
    let s = (a11 * f - a12 * e) / denom;
    Some((t, s))
}

/// Closest points between two segments.
///
/// The interior solution of the parametric system is used when both parameters lie strictly
/// inside of `(0, 1)`. Otherwise, the closest points involve at least one vertex and the
/// result is the best of the four cases where one of the parameters is clamped to `0` or
/// `1`. Singular systems (parallel or degenerate segments) always use these four cases.
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> Clearance {
    if let Some((t, s)) = closest_points_segment_segment_parameters(seg1, seg2) {
        if t > 0.0 && t < 1.0 && s > 0.0 && s < 1.0 {
            return Clearance::from_witnesses(seg1.point_at(t), seg2.point_at(s));
        }
    }

    let candidates = [
        (seg1.a, seg2.project_point(&seg1.a)),
        (seg1.b, seg2.project_point(&seg1.b)),
        (seg1.project_point(&seg2.a), seg2.a),
        (seg1.project_point(&seg2.b), seg2.b),
    ];

    let mut best = Clearance::from_witnesses(candidates[0].0, candidates[0].1);
    for (p1, p2) in &candidates[1..] {
        best = best.min(Clearance::from_witnesses(*p1, *p2));
    }

    best
}

/// Closest points between `seg` and the nearest of `segments`.
///
/// Stops at the first collision. Returns `None` if `segments` is empty.
pub fn closest_points_segment_segments<'a>(
    seg: &Segment,
    segments: impl IntoIterator<Item = &'a Segment>,
) -> Option<Clearance> {
    let mut best: Option<Clearance> = None;

    for other in segments {
        let res = closest_points_segment_segment(seg, other);

        if res.is_colliding() {
            return Some(res);
        }

        best = Some(best.map_or(res, |best| best.min(res)));
    }

    best
}
