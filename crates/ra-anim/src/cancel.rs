//! Cross-owner cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable "stop animating" flag.
///
/// Each animation run gets its own handle; cancelling a stale handle from a
/// previous run has no effect on the current one.  The scheduler checks the
/// flag before every tick and before requesting every frame.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.  Idempotent; safe to call from any thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// `true` if both handles control the same run.
    pub fn same_run(&self, other: &CancelHandle) -> bool {
        Arc::ptr_eq(&self.flag, &other.flag)
    }
}
