use crate::math::Real;

/// Error raised when building a state space or one of its configurations.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum StateSpaceError {
    /// A configuration (or the robot joint limits) does not have the dimension of the space.
    #[error("Expected {expected} coordinates, found {found}.")]
    DimensionMismatch {
        /// The dimension of the space.
        expected: usize,
        /// The number of coordinates provided.
        found: usize,
    },
    /// The joint limits along one axis are not finite, or are not ordered.
    #[error("Invalid joint limits along axis {axis}: [{min}, {max}].")]
    InvalidLimits {
        /// The axis with invalid limits.
        axis: usize,
        /// The lower limit.
        min: Real,
        /// The upper limit.
        max: Real,
    },
    /// The capsule radius of a link is negative or not finite.
    #[error("Invalid capsule radius for link {link}: {radius}.")]
    InvalidLinkRadius {
        /// The index of the link.
        link: usize,
        /// Its radius.
        radius: Real,
    },
    /// A parameter of the state-space configuration is out of its valid range.
    #[error("Invalid state-space configuration: {0}")]
    InvalidConfig(&'static str),
}
