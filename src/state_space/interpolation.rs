use crate::state_space::State;

/// The status of an interpolation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// An intermediate configuration was produced.
    Advanced,
    /// The target configuration was produced.
    Reached,
    /// The produced configuration is in collision.
    Trapped,
}

/// The outcome of [`RealVectorSpace::interpolate`](crate::state_space::RealVectorSpace::interpolate).
#[derive(Clone, Debug, PartialEq)]
pub enum Interpolation {
    /// A valid intermediate configuration.
    Advanced(State),
    /// The target configuration, which is valid.
    Reached(State),
    /// The configuration produced is in collision, so no configuration is returned.
    Trapped,
}

impl Interpolation {
    /// The status of this interpolation step.
    pub fn status(&self) -> Status {
        match self {
            Interpolation::Advanced(_) => Status::Advanced,
            Interpolation::Reached(_) => Status::Reached,
            Interpolation::Trapped => Status::Trapped,
        }
    }

    /// The configuration produced, unless trapped.
    pub fn state(&self) -> Option<&State> {
        match self {
            Interpolation::Advanced(q) | Interpolation::Reached(q) => Some(q),
            Interpolation::Trapped => None,
        }
    }

    /// Converts this result into the configuration produced, unless trapped.
    pub fn into_state(self) -> Option<State> {
        match self {
            Interpolation::Advanced(q) | Interpolation::Reached(q) => Some(q),
            Interpolation::Trapped => None,
        }
    }

    /// Is this step trapped?
    pub fn is_trapped(&self) -> bool {
        matches!(self, Interpolation::Trapped)
    }
}
