mod capsule_ball;
mod capsule_cuboid;
mod real_vector_space;
mod segment_segment;
