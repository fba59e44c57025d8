//! Fluent builder for constructing a [`RouteAnimator`].

use ra_core::{AnimConfig, Coordinate, DistanceUnit, OverrunPolicy};
use ra_route::{DistanceSampler, RouteModel};

use crate::{AnimResult, RouteAnimator};

/// Fluent builder for [`RouteAnimator`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.config(c)`    | `AnimConfig::default()`          |
/// | `.steps(n)`     | 500                              |
/// | `.unit(u)`      | `DistanceUnit::Miles`            |
/// | `.overrun(p)`   | `OverrunPolicy::Clamp`           |
///
/// # Example
///
/// ```rust,ignore
/// let mut animator = AnimatorBuilder::new(route_coords)
///     .steps(250)
///     .unit(DistanceUnit::Kilometers)
///     .build()?;
/// animator.set_distance(1_234.0, &mut host, &mut observer)?;
/// ```
pub struct AnimatorBuilder {
    route:  Vec<Coordinate>,
    config: AnimConfig,
}

impl AnimatorBuilder {
    /// Start from the route's vertices in travel order.
    pub fn new(route: Vec<Coordinate>) -> Self {
        Self { route, config: AnimConfig::default() }
    }

    /// Start from `(lon, lat)` pairs.
    pub fn from_lon_lat(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().copied().map(Coordinate::from).collect())
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: AnimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.config.steps = steps;
        self
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.config.unit = unit;
        self
    }

    pub fn overrun(mut self, overrun: OverrunPolicy) -> Self {
        self.config.overrun = overrun;
        self
    }

    /// Validate the configuration and the route, and return an idle
    /// [`RouteAnimator`].
    ///
    /// Configuration is checked first, so a zero step count is reported even
    /// when the route is also malformed.
    pub fn build(self) -> AnimResult<RouteAnimator> {
        self.config.validate()?;
        let route   = RouteModel::new(self.route)?;
        let sampler = DistanceSampler::from_config(&self.config)?;
        Ok(RouteAnimator::from_parts(route, sampler))
    }
}
