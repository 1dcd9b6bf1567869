//! Implementation details of the closest-points queries.

pub use self::closest_points_segment_point::closest_points_segment_point;
pub use self::closest_points_segment_rectangle_edges::closest_points_segment_rectangle_edges;
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_parameters,
    closest_points_segment_segments,
};

mod closest_points_segment_point;
mod closest_points_segment_rectangle_edges;
mod closest_points_segment_segment;
