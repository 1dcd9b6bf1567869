use clearance3d::math::{Point, Real, DEFAULT_EQUALITY_THRESHOLD};
use clearance3d::query;
use clearance3d::shape::{Ball, Capsule, Obstacle};

fn unit_ball() -> Obstacle {
    Obstacle::Ball(Ball::new(Point::origin(), 1.0))
}

fn random_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() * 6.0 - 3.0,
        rng.rand_float() * 6.0 - 3.0,
        rng.rand_float() * 6.0 - 3.0,
    )
}

#[test]
fn capsule_beside_a_ball() {
    let capsule = Capsule::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 0.0, 0.0), 0.5);

    assert!(!query::intersection_test_capsule_obstacle(
        &capsule,
        &unit_ball()
    ));

    let res = query::distance_capsule_obstacle(&capsule, &unit_ball());
    assert!((res.dist() - 0.5).abs() < 1.0e-5);

    let witnesses = res.witnesses().unwrap();
    assert_eq!(witnesses.link, Point::new(2.0, 0.0, 0.0));
    assert!((witnesses.obstacle - Point::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
}

#[test]
fn zero_radius_queries_agree_near_contact() {
    let cases = [
        (Point::new(1.0005, -1.0, 0.0), Point::new(1.0005, 1.0, 0.0), true),
        (Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, 3.0), true),
        (Point::new(1.002, -1.0, 0.0), Point::new(1.002, 1.0, 0.0), false),
        (Point::new(0.0, 0.0, 1.002), Point::new(0.0, 0.0, 3.0), false),
    ];

    for (a, b, touching) in cases {
        let capsule = Capsule::new(a, b, 0.0);

        assert_eq!(
            query::intersection_test_capsule_obstacle(&capsule, &unit_ball()),
            touching
        );
        assert_eq!(
            query::distance_capsule_obstacle(&capsule, &unit_ball()).is_colliding(),
            touching
        );
    }
}

#[test]
fn queries_agree() {
    let mut rng = oorandom::Rand32::new(42);

    for i in 0..2000 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let radius = if i % 4 == 0 {
            0.0
        } else {
            rng.rand_float() * 0.5
        };
        let capsule = Capsule::new(a, b, radius);

        // Distance between the segment and the ball center.
        let center_dist = clearance3d::na::distance(
            &capsule.segment.project_point(&Point::origin()),
            &Point::origin(),
        );
        let expected = center_dist - 1.0 - radius;
        let touching = expected < DEFAULT_EQUALITY_THRESHOLD;

        if (expected - DEFAULT_EQUALITY_THRESHOLD).abs() < 1.0e-4 {
            continue;
        }

        assert_eq!(
            query::intersection_test_capsule_obstacle(&capsule, &unit_ball()),
            touching,
            "Inconsistent intersection test for {:?}",
            capsule
        );

        let res = query::distance_capsule_obstacle(&capsule, &unit_ball());
        assert_eq!(res.is_colliding(), touching);

        if !res.is_colliding() {
            assert!((res.dist() - expected).abs() < 1.0e-4);

            let swapped = query::distance_capsule_obstacle(&capsule.swapped(), &unit_ball());
            assert!((swapped.dist() - res.dist()).abs() < 1.0e-4);
        }
    }
}
