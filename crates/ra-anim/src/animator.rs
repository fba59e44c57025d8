//! `RouteAnimator` — route + sampler + scheduler behind one entry point.

use ra_core::config::validate_distance;
use ra_route::{heading_at, DistanceSampler, RouteModel};
use tracing::debug;

use crate::{
    AnimResult, AnimationObserver, CancelHandle, FrameHost, FrameRequest, FrameScheduler,
    ManualFrameHost, MarkerAnimator, Phase,
};

/// Animates a marker along one fixed route.
///
/// Every distance-traveled update is sampled into a fresh sequence and
/// handed to the [`FrameScheduler`]; an update that arrives mid-run
/// cancels the running animation and starts over with the new value.
///
/// Create via [`AnimatorBuilder`][crate::AnimatorBuilder].
pub struct RouteAnimator {
    route:     RouteModel,
    sampler:   DistanceSampler,
    scheduler: FrameScheduler,
    distance:  Option<f64>,
}

impl RouteAnimator {
    pub(crate) fn from_parts(route: RouteModel, sampler: DistanceSampler) -> Self {
        // Until the marker moves, point it along the route's first leg.
        let initial = heading_at(route.coordinates(), 0).unwrap_or(0.0);
        Self {
            route,
            sampler,
            scheduler: FrameScheduler::new(MarkerAnimator::new(initial)),
            distance:  None,
        }
    }

    pub fn route(&self) -> &RouteModel {
        &self.route
    }

    pub fn sampler(&self) -> &DistanceSampler {
        &self.sampler
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    /// The distance value of the current run.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.scheduler.cancel_handle()
    }

    /// Feed a new distance-traveled value.
    ///
    /// Samples the route and (re)starts the animation.  A value equal to the
    /// current run's distance is ignored while that run is finished or has a
    /// frame outstanding; a run that was cancelled, or is stalled after a
    /// frame-registration failure, is restarted.  Returns `true` when a new
    /// run started.
    ///
    /// # Errors
    ///
    /// Invalid distances are rejected as
    /// [`AnimError::Config`][crate::AnimError::Config] before any
    /// frame is requested.  Frame registration failures propagate from
    /// [`FrameScheduler::start`].
    pub fn set_distance<H, O>(
        &mut self,
        distance: f64,
        host:     &mut H,
        observer: &mut O,
    ) -> AnimResult<bool>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        validate_distance(distance)?;

        let live = match self.phase() {
            Phase::Terminal => true,
            Phase::Running  => self.scheduler.pending_frame().is_some(),
            Phase::Idle | Phase::Cancelled => false,
        };
        if live && self.distance == Some(distance) {
            debug!(distance, "distance unchanged; keeping current animation");
            return Ok(false);
        }

        let sequence = self.sampler.sample(&self.route, distance)?;
        self.distance = Some(distance);
        self.scheduler.start(sequence, host, observer)?;
        Ok(true)
    }

    /// See [`FrameScheduler::on_frame`].
    pub fn on_frame<H, O>(
        &mut self,
        fired:    FrameRequest,
        host:     &mut H,
        observer: &mut O,
    ) -> AnimResult<Phase>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        self.scheduler.on_frame(fired, host, observer)
    }

    /// See [`FrameScheduler::resume`].
    pub fn resume<H, O>(&mut self, host: &mut H, observer: &mut O) -> AnimResult<()>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        self.scheduler.resume(host, observer)
    }

    /// See [`FrameScheduler::cancel`].
    pub fn cancel<H, O>(&mut self, host: &mut H, observer: &mut O)
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        self.scheduler.cancel(host, observer)
    }

    /// See [`FrameScheduler::shutdown`].
    pub fn shutdown<H: FrameHost>(&mut self, host: &mut H) {
        self.scheduler.shutdown(host)
    }

    /// See [`FrameScheduler::drive`].
    pub fn drive<O: AnimationObserver>(
        &mut self,
        host:       &mut ManualFrameHost,
        observer:   &mut O,
        max_frames: Option<u64>,
    ) -> AnimResult<u64> {
        self.scheduler.drive(host, observer, max_frames)
    }
}
