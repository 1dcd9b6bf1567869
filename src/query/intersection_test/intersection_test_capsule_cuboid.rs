use crate::bounding_volume::{Aabb, AabbFace};
use crate::math::{Real, DEFAULT_EQUALITY_THRESHOLD};
use crate::query::details::intersection_test_capsule_rectangle;
use crate::shape::Capsule;

/// Tests whether a capsule intersects an axis-aligned box.
///
/// The capsule touches the box when their gap is smaller than [`DEFAULT_EQUALITY_THRESHOLD`],
/// consistently with [`distance_capsule_cuboid`](crate::query::details::distance_capsule_cuboid).
pub fn intersection_test_capsule_cuboid(capsule: &Capsule, aabb: &Aabb) -> bool {
    let capsule = capsule.inflated(DEFAULT_EQUALITY_THRESHOLD);
    let seg = &capsule.segment;

    // An endpoint inside of the box grown by `radius / √3` along each axis is at most
    // `radius` away from the box.
    let inner = aabb.loosened(capsule.radius * (3.0 as Real).sqrt() / 3.0);
    if inner.interior_contains_local_point(&seg.a) || inner.interior_contains_local_point(&seg.b)
    {
        return true;
    }

    // Separating axis.
    let outer = aabb.loosened(capsule.radius);
    if AabbFace::ALL
        .iter()
        .any(|face| face.is_beyond(&outer, &seg.a) && face.is_beyond(&outer, &seg.b))
    {
        return false;
    }

    let mut faces = AabbFace::ALL
        .iter()
        .filter(|face| face.is_beyond(aabb, &seg.a) || face.is_beyond(aabb, &seg.b))
        .peekable();

    // Both endpoints lie in the closed box.
    if faces.peek().is_none() {
        return true;
    }

    // The point of the box nearest to the capsule lies on a face with at least one endpoint on
    // its outer side.
    faces.any(|face| intersection_test_capsule_rectangle(&capsule, &aabb.face(*face)))
}
