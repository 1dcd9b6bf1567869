use crate::bounding_volume::{Aabb, AabbFace, PointLocation, SegmentVoronoiRegion};
use crate::math::{Point, Real};
use crate::query::details::{
    closest_points_segment_point, closest_points_segment_rectangle_edges,
    closest_points_segment_segment, closest_points_segment_segments,
    intersection_test_capsule_rectangle,
};
use crate::query::Clearance;
use crate::shape::{Capsule, Segment};

/// The steps of the capsule-box distance computation.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Step {
    /// Nothing is known about the capsule segment yet.
    Init,
    /// The endpoints of the capsule segment have been located relative to the box faces.
    ProjectionTested([PointLocation; 2]),
    /// At least one endpoint projects orthogonally on a face.
    SingleProjection {
        /// Index of the endpoint nearest to the face it projects on.
        closest: usize,
        /// The face `closest` projects on.
        face: AabbFace,
        /// Does the other endpoint project on the same face?
        same_face: bool,
    },
    /// No endpoint projects on any face.
    NoProjection,
    /// The distance between the box and the capsule segment is known.
    Done(Clearance),
}

/// Computes the clearance between a capsule and an axis-aligned box.
///
/// The endpoints of the capsule segment are first located relative to the faces of the box.
/// An endpoint inside of the box is a collision. If an endpoint projects orthogonally on a
/// face, the nearest pair is either this endpoint and its projection, or lies on the edges of
/// this face. Otherwise, the segment is classified into one Voronoï region of the box exterior
/// and measured against the matching corner or edge(s).
///
/// The witness on the link lies on the capsule segment, and the one on the obstacle lies on the
/// box boundary.
pub fn distance_capsule_cuboid(capsule: &Capsule, aabb: &Aabb) -> Clearance {
    let seg = &capsule.segment;
    let endpoints = [seg.a, seg.b];
    let mut step = Step::Init;

    loop {
        step = match step {
            Step::Init => {
                Step::ProjectionTested(endpoints.map(|pt| PointLocation::locate(aabb, &pt)))
            }
            Step::ProjectionTested(locations) => match locations {
                [PointLocation::Inside, _] | [_, PointLocation::Inside] => {
                    Step::Done(Clearance::Colliding)
                }
                [PointLocation::OnFace {
                    face: face_a,
                    dist: dist_a,
                }, PointLocation::OnFace {
                    face: face_b,
                    dist: dist_b,
                }] => {
                    let same_face = face_a == face_b;

                    if dist_b < dist_a {
                        Step::SingleProjection {
                            closest: 1,
                            face: face_b,
                            same_face,
                        }
                    } else {
                        Step::SingleProjection {
                            closest: 0,
                            face: face_a,
                            same_face,
                        }
                    }
                }
                [PointLocation::OnFace { face, .. }, PointLocation::Outside] => {
                    Step::SingleProjection {
                        closest: 0,
                        face,
                        same_face: false,
                    }
                }
                [PointLocation::Outside, PointLocation::OnFace { face, .. }] => {
                    Step::SingleProjection {
                        closest: 1,
                        face,
                        same_face: false,
                    }
                }
                [PointLocation::Outside, PointLocation::Outside] => Step::NoProjection,
            },
            Step::SingleProjection {
                closest,
                face,
                same_face,
            } => Step::Done(closest_points_segment_face(
                seg,
                aabb,
                face,
                &endpoints[closest],
                (!same_face).then(|| &endpoints[1 - closest]),
            )),
            Step::NoProjection => {
                let region = SegmentVoronoiRegion::classify(aabb, seg);
                log::trace!("Capsule segment in the Voronoï region {:?}.", region);
                Step::Done(closest_points_segment_region(seg, aabb, region))
            }
            Step::Done(res) => return res.shrunk_by(capsule.radius),
        }
    }
}

/// Closest points between `seg` and `face` when the endpoint `projected` of `seg` projects on
/// `face`.
///
/// If `other` is given, it is the other endpoint of `seg` and does not project on `face`. The
/// segment may then cross the face, or pass closer to one of its edges than `projected`.
fn closest_points_segment_face(
    seg: &Segment,
    aabb: &Aabb,
    face: AabbFace,
    projected: &Point<Real>,
    other: Option<&Point<Real>>,
) -> Clearance {
    let rect = aabb.face(face);
    let projection = Clearance::from_witnesses(*projected, rect.lift(&rect.project(projected)));

    let Some(other) = other else {
        return projection;
    };

    if intersection_test_capsule_rectangle(&Capsule::from_segment(*seg), &rect) {
        return Clearance::Colliding;
    }

    match closest_points_segment_rectangle_edges(seg, &rect, &rect.project(other)) {
        Some(edges) => projection.min(edges),
        None => projection,
    }
}

/// Closest points between `seg` and the feature of `aabb` nearest to the Voronoï `region`.
fn closest_points_segment_region(
    seg: &Segment,
    aabb: &Aabb,
    region: SegmentVoronoiRegion,
) -> Clearance {
    let res = match region {
        SegmentVoronoiRegion::Corner { sides } => {
            Some(closest_points_segment_point(seg, &aabb.corner(sides)))
        }
        SegmentVoronoiRegion::Edge { axis, sides } => {
            Some(closest_points_segment_segment(seg, &aabb.edge(axis, sides)))
        }
        SegmentVoronoiRegion::Face(face) => {
            closest_points_segment_segments(seg, &aabb.face(face).edges())
        }
        SegmentVoronoiRegion::Spanning => {
            let zero_radius = Capsule::from_segment(*seg);

            if AabbFace::ALL
                .iter()
                .any(|face| intersection_test_capsule_rectangle(&zero_radius, &aabb.face(*face)))
            {
                return Clearance::Colliding;
            }

            closest_points_segment_segments(seg, &aabb.edges())
        }
    };

    // Only reached with a non-empty set of features.
    res.unwrap_or(Clearance::Colliding)
}
