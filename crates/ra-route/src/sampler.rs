//! Distance sampling: distance traveled → evenly spaced points on a route.

use std::ops::Index;

use ra_core::config::{validate_distance, validate_steps};
use ra_core::{AnimConfig, Coordinate, DistanceUnit, OverrunPolicy};
use tracing::debug;

use crate::{RouteModel, RouteResult};

// ── SampledSequence ───────────────────────────────────────────────────────────

/// `steps + 1` coordinates produced by one sampling pass.
///
/// Index 0 is the start of travel; the last index is where the marker ends
/// up.  Immutable: a new distance value produces a new sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampledSequence {
    points:     Vec<Coordinate>,
    distance:   f64,
    unit:       DistanceUnit,
    /// Indices whose point begins a new lap (`OverrunPolicy::Wrap` only).
    lap_starts: Vec<usize>,
}

impl SampledSequence {
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of steps, i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Always `steps() + 1`, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Coordinate {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    /// The distance-traveled value this sequence was sampled for.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// `true` if a lap boundary lies between indices `from` and `to`, so the
    /// two points are not neighbours along the route.
    pub fn crosses_lap(&self, from: usize, to: usize) -> bool {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        self.lap_starts.iter().any(|&i| lo < i && i <= hi)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

impl Index<usize> for SampledSequence {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Coordinate {
        &self.points[index]
    }
}

// ── DistanceSampler ───────────────────────────────────────────────────────────

/// Converts a distance-traveled value into a [`SampledSequence`].
///
/// The sampler only holds validated configuration; it is `Copy` and can be
/// reused for every distance update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceSampler {
    steps:   u32,
    unit:    DistanceUnit,
    overrun: OverrunPolicy,
}

impl DistanceSampler {
    /// Sampler with the default [`OverrunPolicy::Clamp`].
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSteps`][ra_core::CoreError::InvalidSteps] when
    /// `steps == 0`.
    pub fn new(steps: u32, unit: DistanceUnit) -> RouteResult<Self> {
        validate_steps(steps)?;
        Ok(Self { steps, unit, overrun: OverrunPolicy::Clamp })
    }

    pub fn from_config(config: &AnimConfig) -> RouteResult<Self> {
        config.validate()?;
        Ok(Self {
            steps:   config.steps,
            unit:    config.unit,
            overrun: config.overrun,
        })
    }

    pub fn with_overrun(mut self, overrun: OverrunPolicy) -> Self {
        self.overrun = overrun;
        self
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn overrun(&self) -> OverrunPolicy {
        self.overrun
    }

    /// Sample `steps + 1` points covering `distance` along `route`.
    ///
    /// Point `i` lies `i · (distance / steps)` along the route.  Iteration is
    /// over the index, never over accumulated distance, so a zero increment
    /// cannot stall the loop.  Pure: identical inputs give bit-identical
    /// output.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidDistance`][ra_core::CoreError::InvalidDistance]
    /// for negative or non-finite `distance`.
    pub fn sample(&self, route: &RouteModel, distance: f64) -> RouteResult<SampledSequence> {
        validate_distance(distance)?;

        let total     = route.total_arc();
        let reach     = self.unit.to_radians(distance);
        let increment = reach / f64::from(self.steps);

        let mut points     = Vec::with_capacity(self.steps as usize + 1);
        let mut lap_starts = Vec::new();
        let mut lap        = 0;
        for i in 0..=self.steps {
            let along = f64::from(i) * increment;
            let this_lap = self.overrun.lap(along, total);
            if this_lap != lap {
                lap_starts.push(points.len());
                lap = this_lap;
            }
            points.push(route.point_at_arc(self.overrun.fold(along, total)));
        }

        debug!(
            distance,
            unit = %self.unit,
            steps = self.steps,
            route_length = route.length(self.unit),
            overrun = reach > total,
            laps = lap_starts.len() + 1,
            "sampled route"
        );

        Ok(SampledSequence { points, distance, unit: self.unit, lap_starts })
    }
}

/// Sample with the default unit (miles) and clamp policy.
///
/// Shorthand for `DistanceSampler::new(steps, DistanceUnit::Miles)?.sample(..)`.
pub fn sample(route: &RouteModel, distance: f64, steps: u32) -> RouteResult<SampledSequence> {
    DistanceSampler::new(steps, DistanceUnit::Miles)?.sample(route, distance)
}
