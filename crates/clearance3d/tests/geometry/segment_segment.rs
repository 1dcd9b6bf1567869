use clearance3d::math::Point;
use clearance3d::query::details::{distance_segment_segment, intersection_test_segment_segment};
use clearance3d::shape::Segment;

#[test]
fn crossing_segments_touch() {
    // Crossing at t = 0.25 and s = 0.5.
    let seg1 = Segment::new(Point::new(-0.5, 1.0, 2.0), Point::new(1.5, 1.0, 2.0));
    let seg2 = Segment::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 2.0, 3.0));

    assert!(intersection_test_segment_segment(&seg1, &seg2));
    assert_eq!(distance_segment_segment(&seg1, &seg2), 0.0);
}

#[test]
fn skew_segments() {
    let seg1 = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point::new(0.0, -1.0, 0.3), Point::new(0.0, 1.0, 0.3));

    assert!(!intersection_test_segment_segment(&seg1, &seg2));
    assert!((distance_segment_segment(&seg1, &seg2) - 0.3).abs() < 1.0e-6);
    assert!((distance_segment_segment(&seg2, &seg1) - 0.3).abs() < 1.0e-6);
}
