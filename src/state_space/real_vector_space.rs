use crate::math::{DMatrix, DVector, Real};
use crate::query::{self, Clearance};
use crate::shape::Capsule;
use crate::state_space::{
    Environment, Interpolation, PlaneTable, RealVectorSpaceConfig, Robot, SeparatingPlane, State,
    StateSpaceError,
};
use core::fmt;
use rand::Rng;

/// The space of the configurations of a robot, each coordinate being a joint value.
///
/// The space borrows the robot and the environment: both are owned by the planning context and
/// are never modified by the queries.
#[derive(Clone, Copy)]
pub struct RealVectorSpace<'a> {
    dimensions: usize,
    robot: &'a dyn Robot,
    env: &'a dyn Environment,
    config: RealVectorSpaceConfig,
}

impl<'a> RealVectorSpace<'a> {
    /// Creates the configuration space of `robot` among the obstacles of `env`.
    pub fn new(
        dimensions: usize,
        robot: &'a dyn Robot,
        env: &'a dyn Environment,
    ) -> Result<Self, StateSpaceError> {
        Self::with_config(dimensions, robot, env, RealVectorSpaceConfig::default())
    }

    /// Creates the configuration space of `robot` among the obstacles of `env`, with custom
    /// tuning parameters.
    ///
    /// Fails if the joint limits of the robot do not match `dimensions` or are invalid, if a
    /// link has an invalid radius, or if `config` is invalid.
    pub fn with_config(
        dimensions: usize,
        robot: &'a dyn Robot,
        env: &'a dyn Environment,
        config: RealVectorSpaceConfig,
    ) -> Result<Self, StateSpaceError> {
        config.validate()?;

        let limits = robot.limits();
        if limits.len() != dimensions {
            return Err(StateSpaceError::DimensionMismatch {
                expected: dimensions,
                found: limits.len(),
            });
        }

        for (axis, &[min, max]) in limits.iter().enumerate() {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(StateSpaceError::InvalidLimits { axis, min, max });
            }
        }

        for link in 0..robot.num_links() {
            let radius = robot.link_radius(link);
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(StateSpaceError::InvalidLinkRadius { link, radius });
            }
        }

        log::debug!(
            "Real vector space with {} dimensions, {} links and {} obstacles.",
            dimensions,
            robot.num_links(),
            env.obstacles().len()
        );

        Ok(Self {
            dimensions,
            robot,
            env,
            config,
        })
    }

    /// The number of coordinates of the configurations of this space.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The tuning parameters of this space.
    #[inline]
    pub fn config(&self) -> &RealVectorSpaceConfig {
        &self.config
    }

    /// The robot moving in this space.
    #[inline]
    pub fn robot(&self) -> &'a dyn Robot {
        self.robot
    }

    /// The environment the robot moves in.
    #[inline]
    pub fn env(&self) -> &'a dyn Environment {
        self.env
    }

    /// Samples a configuration uniformly within the joint limits.
    ///
    /// If `center` is given, the sample is added to its coordinates. The result is not clamped
    /// to the joint limits.
    ///
    /// # Panics
    /// If `center` does not have the dimension of this space.
    pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R, center: Option<&State>) -> State {
        let coords = DVector::from_iterator(
            self.dimensions,
            self.robot
                .limits()
                .iter()
                .map(|&[min, max]| rng.gen_range(min..=max)),
        );

        match center {
            Some(center) => State::from_coords(coords + center.coords()),
            None => State::from_coords(coords),
        }
    }

    /// An exact copy of `q`.
    #[inline]
    pub fn new_state(&self, q: &State) -> State {
        q.clone()
    }

    /// The configuration with the given coordinates.
    pub fn state_from_coords(&self, coords: DVector<Real>) -> Result<State, StateSpaceError> {
        if coords.len() != self.dimensions {
            return Err(StateSpaceError::DimensionMismatch {
                expected: self.dimensions,
                found: coords.len(),
            });
        }

        Ok(State::from_coords(coords))
    }

    /// The configuration with the given coordinates.
    pub fn state_from_slice(&self, coords: &[Real]) -> Result<State, StateSpaceError> {
        self.state_from_coords(DVector::from_row_slice(coords))
    }

    /// Are `q1` and `q2` closer than the equality threshold?
    #[inline]
    pub fn is_equal(&self, q1: &State, q2: &State) -> bool {
        q1.distance(q2) < self.config.equality_threshold
    }

    /// Moves from `q1` toward `q2` by `step`.
    ///
    /// `dist` is the distance between `q1` and `q2`; it is computed if not given. If `q2` is
    /// farther than `step` (up to the equality threshold), the configuration at the distance
    /// `step` from `q1` is produced. Otherwise `q2` itself is produced. The produced
    /// configuration is then checked: `Trapped` is returned if it is in collision.
    pub fn interpolate(
        &self,
        q1: &State,
        q2: &State,
        step: Real,
        dist: Option<Real>,
    ) -> Interpolation {
        let dist = dist.unwrap_or_else(|| q1.distance(q2));

        let res = if step + self.config.equality_threshold < dist {
            let coords = q1.coords() + (q2.coords() - q1.coords()) * (step / dist);
            Interpolation::Advanced(State::from_coords(coords))
        } else {
            Interpolation::Reached(q2.clone())
        };

        match res.state() {
            Some(q) if !self.is_valid(q) => {
                log::debug!("Interpolation from {} toward {} is trapped.", q1, q2);
                Interpolation::Trapped
            }
            _ => res,
        }
    }

    /// Tests whether the robot at the configuration `q` is free of collisions.
    pub fn is_valid(&self, q: &State) -> bool {
        let obstacles = self.env.obstacles();

        for (link, capsule) in self.capsules(q) {
            for (obstacle_id, obstacle) in obstacles.iter().enumerate() {
                if query::intersection_test_capsule_obstacle(&capsule, obstacle) {
                    log::debug!(
                        "Configuration {} is invalid: link {} collides with obstacle {}.",
                        q,
                        link,
                        obstacle_id
                    );
                    return false;
                }
            }
        }

        true
    }

    /// Tests whether the straight motion from `q1` to `q2` is free of collisions.
    ///
    /// This is an approximation: only `num_interpolation_validity_checks` equally spaced
    /// configurations (including `q2`, excluding `q1`) are checked.
    pub fn is_valid_motion(&self, q1: &State, q2: &State) -> bool {
        let num_checks = self.config.num_interpolation_validity_checks;
        let dist = q1.distance(q2);

        (1..=num_checks).all(|i| {
            let step = i as Real / num_checks as Real * dist;
            !self.interpolate(q1, q2, step, Some(dist)).is_trapped()
        })
    }

    /// The clearance of the robot at the configuration `q`.
    ///
    /// Returns `0.0` if the robot is in collision.
    pub fn compute_distance(&self, q: &State) -> Real {
        self.compute_distance_and_planes(q).0
    }

    /// The clearance of the robot at the configuration `q`, and the planes separating each
    /// obstacle from each link.
    ///
    /// As soon as one link collides with one obstacle, `(0.0, None)` is returned: the
    /// separating planes are undefined for interpenetrating shapes. Without obstacles, the
    /// clearance is `Real::MAX`.
    pub fn compute_distance_and_planes(&self, q: &State) -> (Real, Option<PlaneTable>) {
        let obstacles = self.env.obstacles();
        let num_links = self.robot.num_links();
        let mut distances = DMatrix::repeat(num_links, obstacles.len(), Real::MAX);
        let mut planes = PlaneTable::new(obstacles.len(), num_links);

        for (link, capsule) in self.capsules(q) {
            for (obstacle_id, obstacle) in obstacles.iter().enumerate() {
                match query::distance_capsule_obstacle(&capsule, obstacle) {
                    Clearance::Separated { dist, witnesses } if dist > 0.0 => {
                        log::trace!(
                            "Clearance between link {} and obstacle {}: {}.",
                            link,
                            obstacle_id,
                            dist
                        );
                        distances[(link, obstacle_id)] = dist;
                        planes.set(
                            obstacle_id,
                            link,
                            SeparatingPlane::from_witnesses(&witnesses),
                        );
                    }
                    _ => {
                        log::debug!(
                            "Configuration {} is invalid: link {} collides with obstacle {}.",
                            q,
                            link,
                            obstacle_id
                        );
                        return (0.0, None);
                    }
                }
            }
        }

        let min_dist = distances.iter().fold(Real::MAX, |acc, dist| acc.min(*dist));
        (min_dist, Some(planes))
    }

    /// The capsules of the links checked against obstacles, with their index.
    fn capsules(&self, q: &State) -> Vec<(usize, Capsule)> {
        let skeleton = self.robot.skeleton(q);

        skeleton
            .windows(2)
            .enumerate()
            .take(self.robot.num_links())
            .skip(self.robot.first_collision_link())
            .map(|(link, pts)| {
                (
                    link,
                    Capsule::new(pts[0], pts[1], self.robot.link_radius(link)),
                )
            })
            .collect()
    }
}

impl fmt::Display for RealVectorSpace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " dimensions: {}", self.dimensions)
    }
}

impl fmt::Debug for RealVectorSpace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealVectorSpace")
            .field("dimensions", &self.dimensions)
            .field("num_links", &self.robot.num_links())
            .field("num_obstacles", &self.env.obstacles().len())
            .field("config", &self.config)
            .finish()
    }
}
