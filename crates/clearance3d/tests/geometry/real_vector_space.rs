use clearance3d::bounding_volume::Aabb;
use clearance3d::math::{Point, Real, Vector};
use clearance3d::shape::{Ball, Obstacle};
use clearance3d::state_space::{RealVectorSpace, Robot, State, Status};
use core::f32::consts::{FRAC_PI_2, PI};
use rand::SeedableRng;
use rand_isaac::IsaacRng;

/// A planar arm mounted on top of a vertical pole.
///
/// The pole (link 0) stands on a table and is never checked against obstacles. The two arm
/// links of length 1 rotate around the vertical axis at the height 1.
struct PlanarArm {
    limits: [[Real; 2]; 2],
}

impl PlanarArm {
    fn new() -> Self {
        Self {
            limits: [[-PI, PI], [-PI, PI]],
        }
    }
}

impl Robot for PlanarArm {
    fn limits(&self) -> &[[Real; 2]] {
        &self.limits
    }

    fn num_links(&self) -> usize {
        3
    }

    fn link_radius(&self, _link: usize) -> Real {
        0.05
    }

    fn skeleton(&self, q: &State) -> Vec<Point<Real>> {
        let (q0, q1) = (q.coords()[0], q.coords()[1]);
        let base = Point::new(0.0, 0.0, 0.0);
        let shoulder = Point::new(0.0, 0.0, 1.0);
        let elbow = shoulder + Vector::new(q0.cos(), q0.sin(), 0.0);
        let hand = elbow + Vector::new((q0 + q1).cos(), (q0 + q1).sin(), 0.0);
        vec![base, shoulder, elbow, hand]
    }

    fn first_collision_link(&self) -> usize {
        1
    }
}

fn obstacles() -> [Obstacle; 2] {
    [
        // The table the pole stands on.
        Obstacle::Cuboid(Aabb::from_bounds([-0.5, -0.5, -1.0, 0.5, 0.5, 0.0])),
        Obstacle::Ball(Ball::new(Point::new(1.5, 0.0, 1.0), 0.2)),
    ]
}

#[test]
fn pole_is_ignored() {
    let robot = PlanarArm::new();
    let env = obstacles();
    let space = RealVectorSpace::new(2, &robot, &env).unwrap();

    // Arm along `+y`, away from the ball.
    let q = space.state_from_slice(&[FRAC_PI_2, 0.0]).unwrap();
    assert!(space.is_valid(&q));

    let (dist, planes) = space.compute_distance_and_planes(&q);
    // The first arm link is 1 above the table.
    assert!((dist - 0.95).abs() < 1.0e-4);

    let planes = planes.unwrap();
    assert_eq!(planes.num_obstacles(), 2);
    assert_eq!(planes.num_links(), 3);
    assert!(planes.get(0, 0).is_none());
    assert!(planes.get(1, 0).is_none());
    assert_eq!(planes.iter().count(), 4);

    // Each plane separates its link from its obstacle.
    let skeleton = robot.skeleton(&q);
    for (_, link, plane) in planes.iter() {
        for pt in &skeleton[link..link + 2] {
            assert!(plane.signed_distance(pt).unwrap() >= -1.0e-4);
        }
    }
}

#[test]
fn arm_through_the_ball() {
    let robot = PlanarArm::new();
    let env = obstacles();
    let space = RealVectorSpace::new(2, &robot, &env).unwrap();

    let q = space.state_from_slice(&[0.0, 0.0]).unwrap();
    assert!(!space.is_valid(&q));
    assert_eq!(space.compute_distance(&q), 0.0);
    assert!(space.compute_distance_and_planes(&q).1.is_none());
}

#[test]
fn interpolation_toward_a_state() {
    let robot = PlanarArm::new();
    let env = obstacles();
    let space = RealVectorSpace::new(2, &robot, &env).unwrap();

    let start = space.state_from_slice(&[FRAC_PI_2, 0.0]).unwrap();
    let folded = space.state_from_slice(&[FRAC_PI_2, -FRAC_PI_2]).unwrap();
    let across = space.state_from_slice(&[-FRAC_PI_2, 0.0]).unwrap();
    let blocked = space.state_from_slice(&[0.0, 0.0]).unwrap();

    // Degenerate steps.
    let dist = start.distance(&across);
    let res = space.interpolate(&start, &across, 0.0, Some(dist));
    assert_eq!(res.status(), Status::Advanced);
    assert!(space.is_equal(res.state().unwrap(), &start));
    let res = space.interpolate(&start, &folded, start.distance(&folded), None);
    assert_eq!(res.into_state(), Some(folded.clone()));

    // A small step advances by exactly the step length.
    let res = space.interpolate(&start, &across, 0.5, None);
    assert_eq!(res.status(), Status::Advanced);
    assert!((res.state().unwrap().distance(&start) - 0.5).abs() < 1.0e-4);

    // A step longer than the distance reaches the target itself.
    let res = space.interpolate(&start, &folded, 10.0, None);
    assert_eq!(res.status(), Status::Reached);
    assert!(space.is_equal(res.state().unwrap(), &folded));

    // Reaching an invalid target is trapped.
    let res = space.interpolate(&start, &blocked, 10.0, None);
    assert!(res.is_trapped());
    assert!(res.into_state().is_none());

    // Sweeping the arm across the ball is not a valid motion.
    assert!(space.is_valid_motion(&start, &folded));
    assert!(!space.is_valid_motion(&start, &across));
}

#[test]
fn random_states_around_a_center() {
    let robot = PlanarArm::new();
    let env = obstacles();
    let space = RealVectorSpace::new(2, &robot, &env).unwrap();
    let center = space.state_from_slice(&[1.0, -2.0]).unwrap();
    let mut rng = IsaacRng::seed_from_u64(42);

    for _ in 0..100 {
        let q = space.random_state(&mut rng, Some(&center));
        assert_eq!(q.dimensions(), 2);
        assert!(q.coords()[0] >= 1.0 - PI && q.coords()[0] <= 1.0 + PI);
        assert!(q.coords()[1] >= -2.0 - PI && q.coords()[1] <= -2.0 + PI);
    }
}
