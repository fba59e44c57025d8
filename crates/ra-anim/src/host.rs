//! The rendering host's "call me before the next paint" primitive.
//!
//! # Pluggability
//!
//! The scheduler never owns a clock.  It asks a [`FrameHost`] for one frame
//! at a time and the host calls back into
//! [`FrameScheduler::on_frame`][crate::FrameScheduler::on_frame] with the
//! matching [`FrameRequest`] when that frame is due.  Map widgets, game loops,
//! and test harnesses each supply their own host.
//!
//! [`ManualFrameHost`] is the in-process implementation: requests queue up
//! and the caller pumps them with [`ManualFrameHost::next_frame`].

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::FrameError;

// ── FrameRequest ──────────────────────────────────────────────────────────────

/// Identifier of one outstanding frame registration.
///
/// Hosts hand these out from `request_frame` and echo them back when the
/// frame fires, so the scheduler can ignore callbacks it no longer expects.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FrameRequest(pub u64);

impl fmt::Display for FrameRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameRequest({})", self.0)
    }
}

// ── FrameHost trait ───────────────────────────────────────────────────────────

/// A rendering environment that can notify the scheduler before a paint.
pub trait FrameHost {
    /// Register interest in the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if the host cannot schedule a frame (view torn
    /// down, too many registrations, …).  The scheduler surfaces this to its
    /// caller and does not retry.
    fn request_frame(&mut self) -> Result<FrameRequest, FrameError>;

    /// Release a registration obtained from `request_frame` so that it never
    /// fires.  Releasing an unknown or already-fired request is a no-op.
    fn cancel_frame(&mut self, request: FrameRequest);
}

// ── ManualFrameHost ───────────────────────────────────────────────────────────

/// A FIFO frame host pumped explicitly by the caller.
///
/// Each `request_frame` enqueues a fresh id; [`next_frame`][Self::next_frame]
/// pops the oldest one, standing in for "the next paint happened".  Detaching
/// the host makes every further request fail with [`FrameError::Detached`],
/// which models a view that has gone away.
#[derive(Debug, Default)]
pub struct ManualFrameHost {
    queue:     VecDeque<FrameRequest>,
    next_id:   u64,
    detached:  bool,
    requested: u64,
    cancelled: u64,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next due frame, if any.
    pub fn next_frame(&mut self) -> Option<FrameRequest> {
        self.queue.pop_front()
    }

    /// Number of registrations waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total successful `request_frame` calls.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total registrations released through `cancel_frame`.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }

    /// Refuse all further requests and drop queued ones.
    pub fn detach(&mut self) {
        self.detached = true;
        self.queue.clear();
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> Result<FrameRequest, FrameError> {
        if self.detached {
            return Err(FrameError::Detached);
        }
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.queue.push_back(request);
        trace!(%request, "frame requested");
        Ok(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let before = self.queue.len();
        self.queue.retain(|&r| r != request);
        if self.queue.len() != before {
            self.cancelled += 1;
            trace!(%request, "frame released");
        }
    }
}
