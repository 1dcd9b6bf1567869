//! The real vector space of robot configurations.
//!
//! This is the validity and distance oracle of a sampling-based motion planner: it samples,
//! interpolates, and checks configurations of a robot made of capsule-shaped links against the
//! obstacles of its environment.

pub use self::config::RealVectorSpaceConfig;
pub use self::error::StateSpaceError;
pub use self::interpolation::{Interpolation, Status};
pub use self::planes::{PlaneTable, SeparatingPlane};
pub use self::real_vector_space::RealVectorSpace;
pub use self::robot::{Environment, Robot};
pub use self::state::State;

mod config;
mod error;
mod interpolation;
mod planes;
mod real_vector_space;
mod robot;
mod state;
