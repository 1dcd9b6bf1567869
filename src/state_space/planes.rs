use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::Witnesses;
use na::Unit;

/// A plane locally separating a link from an obstacle.
///
/// The plane goes through the obstacle witness point, and its normal points from the obstacle
/// toward the link. It defines the linear constraint `normal · (p - point) >= 0` satisfied by
/// the free space near the link.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingPlane {
    /// A point of the plane, on the obstacle surface.
    pub point: Point<Real>,
    /// The (non-normalized) normal of the plane, pointing toward the link.
    pub normal: Vector<Real>,
}

impl SeparatingPlane {
    /// Creates a new plane.
    #[inline]
    pub fn new(point: Point<Real>, normal: Vector<Real>) -> Self {
        Self { point, normal }
    }

    /// The plane supported by the obstacle witness, with the normal pointing to the link witness.
    #[inline]
    pub fn from_witnesses(witnesses: &Witnesses) -> Self {
        Self::new(witnesses.obstacle, witnesses.link - witnesses.obstacle)
    }

    /// The signed distance from `pt` to this plane, positive on the link side.
    ///
    /// Returns `None` if the normal is zero.
    pub fn signed_distance(&self, pt: &Point<Real>) -> Option<Real> {
        let normal = Unit::try_new(self.normal, DEFAULT_EPSILON)?;
        Some(normal.dot(&(pt - self.point)))
    }
}

/// The separating planes between every obstacle and every link.
///
/// Links skipped by the collision queries have no plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneTable {
    num_obstacles: usize,
    num_links: usize,
    planes: Vec<Option<SeparatingPlane>>,
}

impl PlaneTable {
    pub(crate) fn new(num_obstacles: usize, num_links: usize) -> Self {
        Self {
            num_obstacles,
            num_links,
            planes: vec![None; num_obstacles * num_links],
        }
    }

    /// The number of obstacles of this table.
    pub fn num_obstacles(&self) -> usize {
        self.num_obstacles
    }

    /// The number of links of this table.
    pub fn num_links(&self) -> usize {
        self.num_links
    }

    /// The plane separating `link` from `obstacle`.
    pub fn get(&self, obstacle: usize, link: usize) -> Option<&SeparatingPlane> {
        if obstacle >= self.num_obstacles || link >= self.num_links {
            return None;
        }

        self.planes[obstacle * self.num_links + link].as_ref()
    }

    /// The planes separating `obstacle` from each link.
    pub fn obstacle_planes(&self, obstacle: usize) -> &[Option<SeparatingPlane>] {
        &self.planes[obstacle * self.num_links..(obstacle + 1) * self.num_links]
    }

    /// Iterates through all the planes as `(obstacle, link, plane)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &SeparatingPlane)> {
        let num_links = self.num_links;
        self.planes.iter().enumerate().filter_map(move |(i, plane)| {
            plane
                .as_ref()
                .map(|plane| (i / num_links, i % num_links, plane))
        })
    }

    pub(crate) fn set(&mut self, obstacle: usize, link: usize, plane: SeparatingPlane) {
        self.planes[obstacle * self.num_links + link] = Some(plane);
    }
}
