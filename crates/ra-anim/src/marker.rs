//! Per-frame marker artifact: current position plus heading.

use ra_core::geo::bearing;
use ra_core::Coordinate;
use ra_route::{heading_pair, SampledSequence};

use crate::AnimationState;

/// The marker as a host should draw it this frame: a point icon at
/// `position`, rotated to `bearing_degrees` (clockwise from north,
/// `[-180, 180]`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadingSample {
    pub position:        Coordinate,
    pub bearing_degrees: f64,
}

/// Projects an [`AnimationState`] onto a [`HeadingSample`].
///
/// Path reveal and marker position share the state's single `progress`
/// cursor: the marker always sits on the newest revealed point.  The heading
/// looks one sample ahead in the full sequence, falling back to the arriving
/// pair at the last index.
///
/// When the chosen pair is degenerate (both points equal, as happens for a
/// zero distance or along a clamped overrun tail) the previous heading is
/// kept instead of collapsing to due north.  The same applies to a pair that
/// straddles a lap boundary under `OverrunPolicy::Wrap`, whose points are
/// not neighbours along the route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerAnimator {
    initial_bearing: f64,
    last_bearing:    f64,
}

impl Default for MarkerAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl MarkerAnimator {
    /// `initial_bearing` is reported until the first non-degenerate pair is
    /// seen, and again after every [`reset`][Self::reset].
    pub fn new(initial_bearing: f64) -> Self {
        Self { initial_bearing, last_bearing: initial_bearing }
    }

    /// Forget the carried heading before a new run.
    pub fn reset(&mut self) {
        self.last_bearing = self.initial_bearing;
    }

    pub fn last_bearing(&self) -> f64 {
        self.last_bearing
    }

    /// Marker for the current frame, or `None` for an unstarted state.
    pub fn project(
        &mut self,
        state:    &AnimationState,
        sequence: &SampledSequence,
    ) -> Option<HeadingSample> {
        let position = state.current()?;
        let points = sequence.points();

        if let Some((from, to)) = heading_pair(points.len(), state.progress()) {
            let (a, b) = (points[from], points[to]);
            if a != b && !sequence.crosses_lap(from, to) {
                self.last_bearing = bearing(a, b);
            }
        }

        Some(HeadingSample { position, bearing_degrees: self.last_bearing })
    }
}
