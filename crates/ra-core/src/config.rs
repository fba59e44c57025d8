//! Animation configuration.
//!
//! Typically built in code with `AnimConfig::default()` or loaded from a
//! JSON file by the application crate (requires the `serde` feature).  Every
//! consumer calls [`AnimConfig::validate`] before sampling, so a bad config
//! never reaches the frame loop.

use crate::{CoreError, CoreResult, DistanceUnit};

/// Default sampling density.  More steps give a smoother reveal at the cost
/// of one frame per step.
pub const DEFAULT_STEPS: u32 = 500;

// ── OverrunPolicy ─────────────────────────────────────────────────────────────

/// What to do with query distances beyond the end of the route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverrunPolicy {
    /// Stop at the route's final coordinate and repeat it.
    #[default]
    Clamp,
    /// Keep lapping the route from its start.  Intended for closed loops.
    Wrap,
}

impl OverrunPolicy {
    /// Map a raw query arc onto `[0, total]` under this policy.
    ///
    /// `total` is the route's arc length in radians.  A wrapped query that
    /// lands exactly on a lap boundary reports the end of the lap, not the
    /// start of the next one.
    pub fn fold(self, along: f64, total: f64) -> f64 {
        if along <= total {
            return along;
        }
        match self {
            OverrunPolicy::Clamp => total,
            OverrunPolicy::Wrap if total > 0.0 => {
                let rem = along % total;
                if rem == 0.0 { total } else { rem }
            }
            OverrunPolicy::Wrap => 0.0,
        }
    }

    /// Zero-based lap that `along` falls in, consistent with [`fold`][Self::fold].
    ///
    /// Always `0` under `Clamp`.  A query on an exact lap boundary belongs
    /// to the lap it ends.
    pub fn lap(self, along: f64, total: f64) -> u64 {
        match self {
            OverrunPolicy::Wrap if along > total && total > 0.0 => {
                ((along - self.fold(along, total)) / total).round() as u64
            }
            _ => 0,
        }
    }
}

// ── AnimConfig ────────────────────────────────────────────────────────────────

/// Top-level animation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimConfig {
    /// Number of steps between the start of travel and the marker's final
    /// position.  The sampled sequence holds `steps + 1` points and the
    /// animation lasts `steps` frames.  Must be at least 1.
    pub steps: u32,

    /// Unit of both the distance-traveled value and reported route lengths.
    pub unit: DistanceUnit,

    /// Behaviour for distances longer than the route.
    pub overrun: OverrunPolicy,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            steps:   DEFAULT_STEPS,
            unit:    DistanceUnit::default(),
            overrun: OverrunPolicy::default(),
        }
    }
}

impl AnimConfig {
    /// Reject configurations that cannot drive an animation.
    pub fn validate(&self) -> CoreResult<()> {
        validate_steps(self.steps)
    }
}

/// `steps` must be at least 1.
pub fn validate_steps(steps: u32) -> CoreResult<()> {
    if steps == 0 {
        return Err(CoreError::InvalidSteps(steps));
    }
    Ok(())
}

/// A distance-traveled value must be finite and non-negative.
pub fn validate_distance(distance: f64) -> CoreResult<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(CoreError::InvalidDistance(distance));
    }
    Ok(())
}
