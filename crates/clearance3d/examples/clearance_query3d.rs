#[macro_use]
extern crate approx; // for relative_eq!

use clearance3d::bounding_volume::Aabb;
use clearance3d::math::Point;
use clearance3d::query;
use clearance3d::shape::{Ball, Capsule, Obstacle};

fn main() {
    let cuboid = Obstacle::Cuboid(Aabb::from_bounds([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]));
    let ball = Obstacle::Ball(Ball::new(Point::new(0.0, 0.0, 3.0), 1.0));

    let capsule_near = Capsule::new(Point::new(-1.0, 0.5, 0.5), Point::new(-0.1, 0.5, 0.5), 0.05);
    let capsule_through = Capsule::new(Point::new(0.5, 0.5, 0.5), Point::new(0.5, 0.5, 3.0), 0.1);

    assert!(!query::intersection_test_capsule_obstacle(
        &capsule_near,
        &cuboid
    ));
    assert!(query::intersection_test_capsule_obstacle(
        &capsule_through,
        &ball
    ));

    let clearance = query::distance_capsule_obstacle(&capsule_near, &cuboid);
    let witnesses = clearance.witnesses().unwrap();

    assert!(relative_eq!(clearance.dist(), 0.05, epsilon = 1.0e-5));
    assert_eq!(witnesses.link, Point::new(-0.1, 0.5, 0.5));
    assert_eq!(witnesses.obstacle, Point::new(0.0, 0.5, 0.5));

    assert!(query::distance_capsule_obstacle(&capsule_through, &cuboid).is_colliding());
}
