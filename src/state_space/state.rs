use crate::math::{DVector, Real};
use core::fmt;

/// A configuration of the robot: one coordinate per joint.
///
/// States are created by a [`RealVectorSpace`](crate::state_space::RealVectorSpace) (by
/// sampling, interpolation, or from validated coordinates), and are never modified afterward.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    coords: DVector<Real>,
}

impl State {
    pub(crate) fn from_coords(coords: DVector<Real>) -> Self {
        Self { coords }
    }

    /// The coordinates of this configuration.
    #[inline]
    pub fn coords(&self) -> &DVector<Real> {
        &self.coords
    }

    /// The number of coordinates of this configuration.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// The Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(&self, other: &State) -> Real {
        (&self.coords - &other.coords).norm()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;

        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }

        write!(f, ")")
    }
}
