//! In-flight guard shared by both controllers.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a form currently has a request in flight.
#[derive(Debug, Default)]
pub(crate) struct SubmissionLatch {
    in_flight: AtomicBool,
}

impl SubmissionLatch {
    /// Claims the latch, or returns `None` when a submission is running.
    pub(crate) fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { latch: self })
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the latch when dropped, including when the request future is
/// cancelled.
#[derive(Debug)]
pub(crate) struct InFlight<'a> {
    latch: &'a SubmissionLatch,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.latch.in_flight.store(false, Ordering::Release);
    }
}
