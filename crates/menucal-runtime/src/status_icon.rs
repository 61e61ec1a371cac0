#![forbid(unsafe_code)]

//! Status-bar icon updates.
//!
//! Day-label changes are already rate-limited at their source (once per
//! day boundary plus app launch), so there is no debouncing here: every
//! emission renders and applies synchronously, in emission order.

use std::rc::Rc;

use menucal_core::{Observable, Subscription};
use menucal_glyph::{TemplateMask, status_glyph};
use tracing::debug;

/// The platform status-bar control.
///
/// Defined here, next to its only consumer; the shell's status item
/// implements it.
pub trait StatusControl {
    /// Replace the control's template image.
    fn set_image(&self, image: TemplateMask);

    /// Clear any text title. Presentation is image-only.
    fn clear_title(&self);
}

/// Keeps the status-bar image in sync with the day label.
///
/// Owns its subscription to the label source; dropping the controller
/// tears the subscription down with it.
pub struct StatusIconController {
    _subscription: Subscription,
}

impl StatusIconController {
    /// Subscribe to the label source and apply the current label once.
    #[must_use]
    pub fn new(labels: &Observable<String>, control: Rc<dyn StatusControl>) -> Self {
        apply(&control, &labels.get());
        let subscription = {
            let control = Rc::clone(&control);
            labels.subscribe(move |label| apply(&control, label))
        };
        Self {
            _subscription: subscription,
        }
    }
}

fn apply(control: &Rc<dyn StatusControl>, label: &str) {
    debug!(
        target: "menucal.status_icon",
        label = %label,
        generic = label.is_empty(),
        "updating status image"
    );
    control.set_image(status_glyph(label));
    control.clear_title();
}

impl std::fmt::Debug for StatusIconController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusIconController").finish_non_exhaustive()
    }
}
