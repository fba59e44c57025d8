//! Observer trait through which the scheduler publishes its artifacts.

use ra_core::Coordinate;
use ra_route::SampledSequence;

use crate::{AnimationState, HeadingSample};

/// Callbacks invoked by [`FrameScheduler`][crate::FrameScheduler] as the
/// animation progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — redraw on every frame
///
/// ```rust,ignore
/// struct MapLayers { line: LineSource, point: PointSource }
///
/// impl AnimationObserver for MapLayers {
///     fn on_path(&mut self, path: &[Coordinate]) {
///         self.line.set_coordinates(path);
///     }
///     fn on_marker(&mut self, marker: HeadingSample) {
///         self.point.set(marker.position, marker.bearing_degrees);
///     }
/// }
/// ```
pub trait AnimationObserver {
    /// A new run began with `sequence`.  Called before the first artifacts.
    fn on_start(&mut self, _sequence: &SampledSequence) {}

    /// The revealed path changed.  Called once at start and once per tick.
    fn on_path(&mut self, _path: &[Coordinate]) {}

    /// The marker moved.  Called right after every `on_path`.
    fn on_marker(&mut self, _marker: HeadingSample) {}

    /// Every sample has been revealed; no more frames will be requested.
    fn on_complete(&mut self, _state: &AnimationState) {}

    /// The run was cancelled before completion.  `state` is frozen where the
    /// cancellation caught it.
    fn on_cancelled(&mut self, _state: &AnimationState) {}
}

/// An [`AnimationObserver`] that does nothing.
pub struct NoopObserver;

impl AnimationObserver for NoopObserver {}
