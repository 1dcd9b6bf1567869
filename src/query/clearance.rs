use crate::math::{Point, Real, DEFAULT_EQUALITY_THRESHOLD};

/// The pair of points realizing the minimum distance between a link and an obstacle.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Witnesses {
    /// The witness point on the link skeleton (or on the first shape).
    pub link: Point<Real>,
    /// The witness point on the obstacle surface (or on the second shape).
    pub obstacle: Point<Real>,
}

impl Witnesses {
    /// Creates a new witness pair.
    #[inline]
    pub fn new(link: Point<Real>, obstacle: Point<Real>) -> Self {
        Self { link, obstacle }
    }

    /// The distance between the two witness points.
    #[inline]
    pub fn distance(&self) -> Real {
        na::distance(&self.link, &self.obstacle)
    }
}

/// The outcome of a distance query between a link and an obstacle.
///
/// Witness points only exist for separated shapes: an interpenetration never carries a
/// distance or a stale pair of points along.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Clearance {
    /// The two shapes are separated.
    Separated {
        /// The positive distance between the two shapes.
        dist: Real,
        /// The points realizing `dist`.
        witnesses: Witnesses,
    },
    /// The two shapes touch or interpenetrate.
    Colliding,
}

impl Clearance {
    /// Builds the clearance between two witness points.
    ///
    /// Only coincident points are colliding: the touching tolerance is applied by
    /// [`Self::shrunk_by`] once the whole query is done.
    pub fn from_witnesses(link: Point<Real>, obstacle: Point<Real>) -> Self {
        let witnesses = Witnesses::new(link, obstacle);
        let dist = witnesses.distance();

        if dist <= 0.0 {
            Clearance::Colliding
        } else {
            Clearance::Separated { dist, witnesses }
        }
    }

    /// The clearance left once the first shape is inflated by `radius`.
    ///
    /// The witness points are kept on the un-inflated shapes. A remaining distance smaller
    /// than [`DEFAULT_EQUALITY_THRESHOLD`] means the inflated shape touches the other one.
    /// The boolean intersection tests use the same tolerance.
    #[must_use]
    pub fn shrunk_by(self, radius: Real) -> Self {
        match self {
            Clearance::Separated { dist, witnesses }
                if dist - radius >= DEFAULT_EQUALITY_THRESHOLD =>
            {
                Clearance::Separated {
                    dist: dist - radius,
                    witnesses,
                }
            }
            _ => Clearance::Colliding,
        }
    }

    /// The smallest of two clearances. `Colliding` is smaller than everything.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        match (&self, &other) {
            (Clearance::Separated { dist: d1, .. }, Clearance::Separated { dist: d2, .. }) => {
                if d2 < d1 {
                    other
                } else {
                    self
                }
            }
            _ => Clearance::Colliding,
        }
    }

    /// The distance, or `0.0` if the shapes are colliding.
    #[inline]
    pub fn dist(&self) -> Real {
        match self {
            Clearance::Separated { dist, .. } => *dist,
            Clearance::Colliding => 0.0,
        }
    }

    /// The witness points, if the shapes are separated.
    #[inline]
    pub fn witnesses(&self) -> Option<&Witnesses> {
        match self {
            Clearance::Separated { witnesses, .. } => Some(witnesses),
            Clearance::Colliding => None,
        }
    }

    /// Are the two shapes colliding?
    #[inline]
    pub fn is_colliding(&self) -> bool {
        matches!(self, Clearance::Colliding)
    }
}
