use crate::math::DEFAULT_EPSILON;
use crate::query::Clearance;
use crate::shape::{Ball, Capsule};

/// Computes the clearance between a capsule and a ball.
///
/// The triangle made of the segment endpoints `a`, `b` and the ball center `o` is classified
/// by the sign of the cosines of its angles at `a` and `b` (law of cosines). If both angles
/// are acute, the point of the segment nearest to `o` is the foot of the perpendicular from `o`.
/// Otherwise, it is the endpoint at the obtuse (or right) angle.
///
/// The obstacle witness is the point of the ball surface nearest to the link witness. Both
/// radii are subtracted from the reported distance.
pub fn distance_capsule_ball(capsule: &Capsule, ball: &Ball) -> Clearance {
    let seg = &capsule.segment;
    let sq_ab = seg.scaled_direction().norm_squared();

    let nearest = if sq_ab <= DEFAULT_EPSILON {
        seg.a
    } else {
        let sq_ao = na::distance_squared(&seg.a, &ball.center);
        let sq_bo = na::distance_squared(&seg.b, &ball.center);

        // `2 * |ab| * |ao| * cos(a)` and `2 * |ab| * |bo| * cos(b)`.
        let cos_a = sq_ao + sq_ab - sq_bo;
        let cos_b = sq_bo + sq_ab - sq_ao;

        if cos_a > 0.0 && cos_b > 0.0 {
            seg.point_at(cos_a / (2.0 * sq_ab))
        } else if cos_a <= 0.0 {
            seg.a
        } else {
            seg.b
        }
    };

    let center_dist = na::distance(&nearest, &ball.center);

    if center_dist <= ball.radius {
        return Clearance::Colliding;
    }

    let surface = ball.center + (nearest - ball.center) * (ball.radius / center_dist);
    Clearance::from_witnesses(nearest, surface).shrunk_by(capsule.radius)
}
