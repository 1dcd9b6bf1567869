use crate::math::{Real, DEFAULT_EQUALITY_THRESHOLD};
use crate::state_space::StateSpaceError;

/// Tuning parameters of a [`RealVectorSpace`](crate::state_space::RealVectorSpace).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RealVectorSpaceConfig {
    /// Two configurations closer than this are considered equal.
    ///
    /// This is also the tolerance of `interpolate` when deciding whether the target is reached.
    pub equality_threshold: Real,
    /// The number of equally spaced configurations checked by `is_valid_motion`.
    ///
    /// The motion check is resolution based: a collision between two checked configurations
    /// is missed. This count is not adapted to the length of the motion.
    pub num_interpolation_validity_checks: usize,
}

impl Default for RealVectorSpaceConfig {
    fn default() -> Self {
        Self {
            equality_threshold: DEFAULT_EQUALITY_THRESHOLD,
            num_interpolation_validity_checks: 10,
        }
    }
}

impl RealVectorSpaceConfig {
    /// Checks that every parameter is within its valid range.
    pub fn validate(&self) -> Result<(), StateSpaceError> {
        if !(self.equality_threshold > 0.0 && self.equality_threshold.is_finite()) {
            return Err(StateSpaceError::InvalidConfig(
                "the equality threshold must be positive and finite",
            ));
        }

        if self.num_interpolation_validity_checks == 0 {
            return Err(StateSpaceError::InvalidConfig(
                "at least one interpolation validity check is required",
            ));
        }

        Ok(())
    }
}
