//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
pub use crate::bounding_volume::aabb_voronoi::{
    AabbFace, AabbSide, PointLocation, SegmentVoronoiRegion,
};

#[doc(hidden)]
pub mod aabb;
mod aabb_voronoi;
