use crate::math::{DEFAULT_EPSILON, DEFAULT_EQUALITY_THRESHOLD};
use crate::shape::{Ball, Capsule};

/// Tests whether a capsule intersects a ball.
///
/// This holds if an endpoint of the capsule segment is closer than `capsule.radius +
/// ball.radius` to the ball center, or if the segment enters the ball inflated by the capsule
/// radius, i.e., if the quadratic equation of their intersection has a root in `(0, 1)`.
///
/// As in [`distance_capsule_ball`](crate::query::details::distance_capsule_ball), a gap smaller
/// than [`DEFAULT_EQUALITY_THRESHOLD`] counts as touching.
pub fn intersection_test_capsule_ball(capsule: &Capsule, ball: &Ball) -> bool {
    let seg = &capsule.segment;
    let reach = capsule.radius + ball.radius + DEFAULT_EQUALITY_THRESHOLD;
    let sq_reach = reach * reach;

    if na::distance_squared(&seg.a, &ball.center) < sq_reach
        || na::distance_squared(&seg.b, &ball.center) < sq_reach
    {
        return true;
    }

    let ab = seg.scaled_direction();
    let co = seg.a - ball.center;

    let a = ab.norm_squared();
    if a <= DEFAULT_EPSILON {
        return false;
    }

    let b = 2.0 * ab.dot(&co);
    let c = co.norm_squared() - sq_reach;
    let discr = b * b - 4.0 * a * c;

    if discr < 0.0 {
        return false;
    }

    let sqrt_discr = discr.sqrt();
    let t1 = (-b - sqrt_discr) / (2.0 * a);
    let t2 = (-b + sqrt_discr) / (2.0 * a);

    (t1 > 0.0 && t1 < 1.0) || (t2 > 0.0 && t2 < 1.0)
}

#[cfg(test)]
mod test {
    use crate::math::Point;
    use crate::query::details::intersection_test_capsule_ball;
    use crate::shape::{Ball, Capsule};

    #[test]
    fn capsule_ball_intersection() {
        let ball = Ball::new(Point::origin(), 1.0);

        let far = Capsule::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 0.0, 0.0), 0.5);
        assert!(!intersection_test_capsule_ball(&far, &ball));

        let endpoint = Capsule::new(Point::new(1.2, 0.0, 0.0), Point::new(3.0, 0.0, 0.0), 0.5);
        assert!(intersection_test_capsule_ball(&endpoint, &ball));

        // Both endpoints are out of reach, but the segment passes through the ball.
        let through = Capsule::new(Point::new(-3.0, 0.5, 0.0), Point::new(3.0, 0.5, 0.0), 0.0);
        assert!(intersection_test_capsule_ball(&through, &ball));

        let grazing = Capsule::new(Point::new(-3.0, 1.2, 0.0), Point::new(3.0, 1.2, 0.0), 0.1);
        assert!(!intersection_test_capsule_ball(&grazing, &ball));
        let grazing = Capsule::new(grazing.segment.a, grazing.segment.b, 0.3);
        assert!(intersection_test_capsule_ball(&grazing, &ball));
    }

    #[test]
    fn gaps_below_the_touching_tolerance() {
        let ball = Ball::new(Point::origin(), 1.0);

        let touching = Capsule::new(Point::new(1.0005, -1.0, 0.0), Point::new(1.0005, 1.0, 0.0), 0.0);
        assert!(intersection_test_capsule_ball(&touching, &ball));

        let separated = Capsule::new(Point::new(1.002, -1.0, 0.0), Point::new(1.002, 1.0, 0.0), 0.0);
        assert!(!intersection_test_capsule_ball(&separated, &ball));
    }
}
