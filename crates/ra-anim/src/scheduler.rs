//! The `FrameScheduler` state machine and its frame-driven tick loop.

use std::fmt;

use ra_core::Coordinate;
use ra_route::SampledSequence;
use tracing::{debug, trace, warn};

use crate::{
    AnimResult, AnimationObserver, AnimationState, CancelHandle, FrameHost, FrameRequest,
    HeadingSample, ManualFrameHost, MarkerAnimator,
};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle of one animation run.
///
/// ```text
/// Idle ──start──▶ Running ──last tick──▶ Terminal
///                    │
///                    └──cancel──▶ Cancelled
/// ```
///
/// `start` may be called again from any phase; a running animation is
/// cancelled first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Terminal,
    Cancelled,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle      => "idle",
            Phase::Running   => "running",
            Phase::Terminal  => "terminal",
            Phase::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FrameScheduler ────────────────────────────────────────────────────────────

/// A sequence being revealed and the state revealed so far.
struct Run {
    sequence: SampledSequence,
    state:    AnimationState,
}

/// Reveals a [`SampledSequence`] one sample per rendering frame.
///
/// The scheduler owns the only [`AnimationState`].  Each frame notification
/// applies the pure transition [`AnimationState::tick`], publishes the
/// updated path and marker to an [`AnimationObserver`], and registers for the
/// next frame until the state is terminal.
///
/// # Frame protocol
///
/// 1. [`start`][Self::start] seeds the state with the first sample,
///    publishes it, and requests one frame from the host.
/// 2. The host calls [`on_frame`][Self::on_frame] with that request's id.
///    Ids that do not match the outstanding request are ignored, so a
///    callback that outlives its run is harmless.
/// 3. After `steps` frames the run is terminal and no frame is outstanding.
///
/// # Cancellation
///
/// The [`CancelHandle`] from [`cancel_handle`][Self::cancel_handle] may be
/// triggered by any owner.  The flag is checked before every tick and before
/// every frame request.  [`cancel`][Self::cancel] additionally releases the
/// outstanding registration at once; hosts that only hold the handle should
/// call [`poll_cancellation`][Self::poll_cancellation] (or
/// [`shutdown`][Self::shutdown] on teardown) to do the same.
pub struct FrameScheduler {
    phase:       Phase,
    run:         Option<Run>,
    marker:      MarkerAnimator,
    last_marker: Option<HeadingSample>,
    pending:     Option<FrameRequest>,
    cancel:      CancelHandle,
    ticks:       u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(MarkerAnimator::default())
    }
}

impl FrameScheduler {
    pub fn new(marker: MarkerAnimator) -> Self {
        Self {
            phase:       Phase::Idle,
            run:         None,
            marker,
            last_marker: None,
            pending:     None,
            cancel:      CancelHandle::new(),
            ticks:       0,
        }
    }

    // ── Read-only projections ─────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.run.as_ref().map(|r| &r.state)
    }

    pub fn sequence(&self) -> Option<&SampledSequence> {
        self.run.as_ref().map(|r| &r.sequence)
    }

    /// Path revealed so far; empty before the first `start`.
    pub fn path(&self) -> &[Coordinate] {
        match &self.run {
            Some(run) => run.state.revealed(),
            None      => &[],
        }
    }

    /// Marker published with the most recent path.
    pub fn marker(&self) -> Option<HeadingSample> {
        self.last_marker
    }

    /// The registration the scheduler is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Ticks applied in the current run.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Handle that cancels the current run.  A later `start` issues a new
    /// handle; old handles stop affecting the scheduler.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Begin revealing `sequence` (`Idle → Running`).
    ///
    /// A run already in progress is cancelled first: its pending frame is
    /// released and `on_cancelled` fires before the new `on_start`.
    ///
    /// # Errors
    ///
    /// Propagates the host's [`FrameError`][crate::FrameError] if the first
    /// frame cannot be registered.  The state is still seeded and published;
    /// the run stays `Running` with no outstanding frame until
    /// [`resume`][Self::resume] succeeds or it is cancelled.
    pub fn start<H, O>(
        &mut self,
        sequence: SampledSequence,
        host:     &mut H,
        observer: &mut O,
    ) -> AnimResult<()>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        if self.phase == Phase::Running {
            debug!("restarting: cancelling the running animation");
            self.cancel(host, observer);
        }

        self.cancel = CancelHandle::new();
        self.marker.reset();
        self.ticks = 0;

        let state = AnimationState::start(&sequence);
        debug!(
            steps = state.steps(),
            distance = sequence.distance(),
            unit = %sequence.unit(),
            "animation started"
        );
        observer.on_start(&sequence);
        self.run = Some(Run { sequence, state });
        self.phase = Phase::Running;

        self.publish(observer);
        self.schedule_next(host, observer)
    }

    /// Handle the host's notification that frame `fired` is due.
    ///
    /// Applies exactly one tick and returns the resulting phase.  Frames
    /// that are not the outstanding request, or that arrive outside
    /// `Running`, are ignored.
    ///
    /// # Errors
    ///
    /// Propagates a failure to register the following frame (see
    /// [`start`][Self::start]).
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
        if self.phase != Phase::Running || self.pending != Some(fired) {
            trace!(%fired, phase = %self.phase, "ignoring unexpected frame");
            return Ok(self.phase);
        }
        self.pending = None;

        if self.cancel.is_cancelled() {
            self.finish_cancelled(observer);
            return Ok(self.phase);
        }

        let Some(run) = self.run.as_mut() else {
            return Ok(self.phase);
        };
        let state = std::mem::take(&mut run.state);
        run.state = state.tick(&run.sequence);
        self.ticks += 1;
        trace!(progress = run.state.progress(), steps = run.state.steps(), "tick");

        self.publish(observer);
        self.schedule_next(host, observer)?;
        Ok(self.phase)
    }

    /// Retry registering a frame after a host failure.  No-op unless the run
    /// is `Running` with nothing outstanding.
    pub fn resume<H, O>(&mut self, host: &mut H, observer: &mut O) -> AnimResult<()>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        if self.phase != Phase::Running || self.pending.is_some() {
            return Ok(());
        }
        self.schedule_next(host, observer)
    }

    /// Cancel the current run now and release its pending frame.
    ///
    /// `on_cancelled` fires if the run was still `Running`.  Cancelling an
    /// idle, finished, or already-cancelled scheduler only sets the flag.
    pub fn cancel<H, O>(&mut self, host: &mut H, observer: &mut O)
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        self.cancel.cancel();
        self.release(host);
        if self.phase == Phase::Running {
            self.finish_cancelled(observer);
        }
    }

    /// Act on a cancellation requested through a [`CancelHandle`].
    ///
    /// Returns `true` if the run was cancelled by this call.
    pub fn poll_cancellation<H, O>(&mut self, host: &mut H, observer: &mut O) -> bool
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        if self.phase != Phase::Running || !self.cancel.is_cancelled() {
            return false;
        }
        self.release(host);
        self.finish_cancelled(observer);
        true
    }

    /// Tear down: release any pending frame and stop without notifying an
    /// observer (the view is assumed to be gone).
    pub fn shutdown<H: FrameHost>(&mut self, host: &mut H) {
        self.cancel.cancel();
        self.release(host);
        if self.phase == Phase::Running {
            debug!(ticks = self.ticks, "scheduler shut down mid-run");
            self.phase = Phase::Cancelled;
        }
    }

    /// Pump `host` until the run leaves `Running`, the host runs dry, or
    /// `max_frames` notifications have been handled.  Returns the number of
    /// frames handled.
    ///
    /// Cancellation through a [`CancelHandle`] is honoured before every
    /// frame.
    pub fn drive<O: AnimationObserver>(
        &mut self,
        host:       &mut ManualFrameHost,
        observer:   &mut O,
        max_frames: Option<u64>,
    ) -> AnimResult<u64> {
        let mut frames = 0;
        while self.phase == Phase::Running {
            if max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            if self.poll_cancellation(host, observer) {
                break;
            }
            let Some(fired) = host.next_frame() else {
                break;
            };
            self.on_frame(fired, host, observer)?;
            frames += 1;
        }
        Ok(frames)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn publish<O: AnimationObserver>(&mut self, observer: &mut O) {
        let Some(run) = self.run.as_ref() else {
            return;
        };
        observer.on_path(run.state.revealed());
        if let Some(marker) = self.marker.project(&run.state, &run.sequence) {
            self.last_marker = Some(marker);
            observer.on_marker(marker);
        }
    }

    /// Register the next frame, or finish if there is nothing left to do.
    fn schedule_next<H, O>(&mut self, host: &mut H, observer: &mut O) -> AnimResult<()>
    where
        H: FrameHost,
        O: AnimationObserver,
    {
        let Some(run) = self.run.as_ref() else {
            return Ok(());
        };

        if run.state.is_terminal() {
            self.phase = Phase::Terminal;
            debug!(ticks = self.ticks, points = run.state.revealed().len(), "animation complete");
            observer.on_complete(&run.state);
            return Ok(());
        }
        let progress = run.state.progress();

        if self.cancel.is_cancelled() {
            self.finish_cancelled(observer);
            return Ok(());
        }

        match host.request_frame() {
            Ok(request) => {
                self.pending = Some(request);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, progress, "frame registration failed");
                Err(err.into())
            }
        }
    }

    fn release<H: FrameHost>(&mut self, host: &mut H) {
        if let Some(request) = self.pending.take() {
            host.cancel_frame(request);
        }
    }

    fn finish_cancelled<O: AnimationObserver>(&mut self, observer: &mut O) {
        self.phase = Phase::Cancelled;
        if let Some(run) = self.run.as_ref() {
            debug!(progress = run.state.progress(), steps = run.state.steps(), "animation cancelled");
            observer.on_cancelled(&run.state);
        }
    }
}
