use clearance3d::bounding_volume::Aabb;
use clearance3d::math::{Point, Real, DEFAULT_EQUALITY_THRESHOLD};
use clearance3d::query::{self, Clearance};
use clearance3d::shape::{Capsule, Obstacle};

fn unit_cube() -> Obstacle {
    Obstacle::Cuboid(Aabb::from_bounds([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]))
}

fn random_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() * 4.0 - 1.5,
        rng.rand_float() * 4.0 - 1.5,
        rng.rand_float() * 4.0 - 1.5,
    )
}

// Exact distance between a point and the unit cube.
fn distance_to_unit_cube(pt: &Point<Real>) -> Real {
    let clamped = pt.map(|x| x.clamp(0.0, 1.0));
    clearance3d::na::distance(pt, &clamped)
}

#[test]
fn capsule_near_a_face() {
    let capsule = Capsule::new(Point::new(-1.0, 0.5, 0.5), Point::new(-0.1, 0.5, 0.5), 0.05);

    assert!(!query::intersection_test_capsule_obstacle(
        &capsule,
        &unit_cube()
    ));
    let res = query::distance_capsule_obstacle(&capsule, &unit_cube());
    assert!((res.dist() - 0.05).abs() < 1.0e-5);
}

#[test]
fn endpoint_inside_the_box() {
    let capsule = Capsule::new(Point::new(0.5, 0.5, 0.5), Point::new(-4.0, 7.0, 1.0), 0.2);

    assert!(query::intersection_test_capsule_obstacle(
        &capsule,
        &unit_cube()
    ));
    assert_eq!(
        query::distance_capsule_obstacle(&capsule, &unit_cube()),
        Clearance::Colliding
    );
}

#[test]
fn swapping_endpoints_keeps_the_distance() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let capsule = Capsule::new(
            random_point(&mut rng),
            random_point(&mut rng),
            rng.rand_float() * 0.3,
        );
        let d1 = query::distance_capsule_obstacle(&capsule, &unit_cube()).dist();
        let d2 = query::distance_capsule_obstacle(&capsule.swapped(), &unit_cube()).dist();

        assert!(
            (d1 - d2).abs() < 1.0e-4,
            "Asymmetric distance for {:?}: {} vs. {}",
            capsule,
            d1,
            d2
        );
    }
}

#[test]
fn intersection_test_matches_distance() {
    let mut rng = oorandom::Rand32::new(1234);

    for i in 0..2000 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let radius = if i % 4 == 0 {
            0.0
        } else {
            rng.rand_float() * 0.5
        };
        let capsule = Capsule::new(a, b, radius);

        // Distance between the bare segment and the box, `0.0` when touching.
        let seg_dist =
            query::distance_capsule_obstacle(&Capsule::new(a, b, 0.0), &unit_cube()).dist();
        let touching = seg_dist < radius + DEFAULT_EQUALITY_THRESHOLD;

        if (seg_dist - radius - DEFAULT_EQUALITY_THRESHOLD).abs() < 1.0e-4 {
            continue;
        }

        assert_eq!(
            query::intersection_test_capsule_obstacle(&capsule, &unit_cube()),
            touching,
            "Inconsistent queries for {:?} at distance {}",
            capsule,
            seg_dist
        );
        assert_eq!(
            query::distance_capsule_obstacle(&capsule, &unit_cube()).is_colliding(),
            touching
        );
    }
}

#[test]
fn zero_radius_queries_agree_near_contact() {
    let cases = [
        // Endpoints on opposite faces.
        (Point::new(0.0, 0.5, 0.5), Point::new(1.0, 0.5, 0.5), true),
        // Along an edge.
        (Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0), true),
        // One endpoint on a face, the other one outside.
        (Point::new(0.5, 0.5, 1.0), Point::new(0.5, 0.5, 3.0), true),
        // Gaps below and above the touching tolerance.
        (Point::new(-0.0005, 0.5, -1.0), Point::new(-0.0005, 0.5, 2.0), true),
        (Point::new(1.5, 1.0005, 0.5), Point::new(-0.5, 1.0005, 0.5), true),
        (Point::new(-0.002, 0.5, -1.0), Point::new(-0.002, 0.5, 2.0), false),
        (Point::new(1.002, 1.002, -1.0), Point::new(1.002, 1.002, 2.0), false),
    ];

    for (a, b, touching) in cases {
        let capsule = Capsule::new(a, b, 0.0);

        assert_eq!(
            query::intersection_test_capsule_obstacle(&capsule, &unit_cube()),
            touching,
            "Wrong intersection test for {:?}",
            capsule
        );
        assert_eq!(
            query::distance_capsule_obstacle(&capsule, &unit_cube()).is_colliding(),
            touching,
            "Wrong distance for {:?}",
            capsule
        );
    }
}

#[test]
fn distance_matches_dense_sampling() {
    const NSAMPLES: usize = 2000;
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..300 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let capsule = Capsule::new(a, b, 0.0);
        let res = query::distance_capsule_obstacle(&capsule, &unit_cube());

        let sampled = (0..=NSAMPLES)
            .map(|i| {
                let t = i as Real / NSAMPLES as Real;
                distance_to_unit_cube(&capsule.segment.point_at(t))
            })
            .fold(Real::MAX, Real::min);

        match res {
            Clearance::Separated { dist, witnesses } => {
                // Samples are at most half a sampling step away from the true closest point.
                let step = capsule.height() / NSAMPLES as Real;
                assert!(dist >= DEFAULT_EQUALITY_THRESHOLD);
                assert!(dist <= sampled + 1.0e-4, "{} > {}", dist, sampled);
                assert!(dist >= sampled - step - 1.0e-4, "{} < {}", dist, sampled);

                // The obstacle witness lies on the box boundary.
                assert!(distance_to_unit_cube(&witnesses.obstacle) < 1.0e-4);
                assert!((witnesses.distance() - dist).abs() < 1.0e-4);
            }
            Clearance::Colliding => {
                let step = capsule.height() / NSAMPLES as Real;
                assert!(
                    sampled < DEFAULT_EQUALITY_THRESHOLD + step / 2.0 + 1.0e-4,
                    "Missed clearance {}",
                    sampled
                );
            }
        }
    }
}
