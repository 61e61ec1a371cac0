#![forbid(unsafe_code)]

//! Debounced popover auto-resize.
//!
//! The popover's reactive content reports its natural size on every layout
//! pass; applying each one would visibly jitter the popover during rapid
//! content changes (switching months quickly). [`PopoverSizeCoordinator`]
//! debounces on the trailing edge: each report cancels the previously
//! pending application and schedules a fresh one carrying the latest size.
//! When the deferred application fires it re-checks that the popover is
//! still shown and otherwise drops the geometry silently — a popover being
//! torn down must not receive stale sizes.

use std::cell::Cell;
use std::rc::Rc;

use menucal_core::{PopoverHost, Size};
use tracing::trace;
use web_time::Duration;

use crate::timer::{TimerQueue, TimerToken};

/// Quiet period after the last size report before geometry is applied.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(80);

/// Trailing-edge debouncer for popover content sizes.
///
/// At most one application is pending at any instant: this is a single
/// replaceable slot, not a queue. Within a debounce window the last
/// reported size wins.
pub struct PopoverSizeCoordinator {
    popover: Rc<dyn PopoverHost>,
    timers: TimerQueue,
    pending: Rc<Cell<Option<TimerToken>>>,
    debounce: Duration,
}

impl PopoverSizeCoordinator {
    /// Create a coordinator with the standard 80ms window.
    #[must_use]
    pub fn new(popover: Rc<dyn PopoverHost>, timers: TimerQueue) -> Self {
        Self::with_debounce(popover, timers, RESIZE_DEBOUNCE)
    }

    /// Create a coordinator with a custom debounce window.
    #[must_use]
    pub fn with_debounce(
        popover: Rc<dyn PopoverHost>,
        timers: TimerQueue,
        debounce: Duration,
    ) -> Self {
        Self {
            popover,
            timers,
            pending: Rc::new(Cell::new(None)),
            debounce,
        }
    }

    /// Handle a content size report.
    ///
    /// Zero sizes are not-yet-laid-out signals and are ignored. Anything
    /// else supersedes the pending application, if any.
    pub fn on_size_reported(&self, size: Size) {
        if size.is_zero() {
            trace!(target: "menucal.resize", "ignoring zero size report");
            return;
        }

        if let Some(token) = self.pending.take() {
            self.timers.cancel(token);
        }

        let popover = Rc::clone(&self.popover);
        let pending = Rc::clone(&self.pending);
        let token = self.timers.schedule(self.debounce, move || {
            pending.set(None);
            if !popover.is_shown() {
                // Expected when the popover closed during the quiet period.
                trace!(target: "menucal.resize", "dropping resize for closed popover");
                return;
            }
            trace!(
                target: "menucal.resize",
                width = size.width,
                height = size.height,
                "applying content size"
            );
            popover.set_content_size(size);
        });
        self.pending.set(Some(token));
    }

    /// Whether an application is currently pending.
    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl std::fmt::Debug for PopoverSizeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopoverSizeCoordinator")
            .field("pending", &self.pending.get())
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}
