#![forbid(unsafe_code)]

//! Singleton secondary windows (settings, event editor).
//!
//! Each window kind holds at most one live window. Opening an already
//! visible kind brings it to the front instead of creating a second
//! instance — deliberately without reapplying the payload, so an edit in
//! progress is never clobbered. The host fires a close event with the
//! window's identity; the manager clears exactly the matching slot, no
//! matter which kind fired or in what order windows were opened.

use std::rc::Rc;

use ahash::AHashMap;
use menucal_core::{DayEvent, Size, WindowDesc, WindowHandle, WindowHost, WindowId, WindowKind, WindowStyle};
use tracing::{debug, trace};

/// Create-or-focus lifecycle for the app's auxiliary windows.
///
/// The manager is the sole owner of window references: handles stay in
/// their slot (and `is_visible` stays answerable) until the close event
/// clears them.
pub struct SecondaryWindowManager {
    host: Rc<dyn WindowHost>,
    slots: AHashMap<WindowKind, Rc<dyn WindowHandle>>,
}

impl SecondaryWindowManager {
    /// Create a manager with all slots empty.
    #[must_use]
    pub fn new(host: Rc<dyn WindowHost>) -> Self {
        Self {
            host,
            slots: AHashMap::new(),
        }
    }

    /// Open a window of `kind`, or focus the existing one.
    ///
    /// A slot that holds a visible window is reused as-is; `payload` is
    /// ignored in that case. Otherwise a new window is constructed with
    /// the kind's fixed size and style and stored in the slot.
    pub fn open_or_focus(&mut self, kind: WindowKind, payload: Option<DayEvent>) {
        if let Some(handle) = self.slots.get(&kind) {
            if handle.is_visible() {
                debug!(
                    target: "menucal.windows",
                    ?kind,
                    id = handle.id(),
                    "focusing existing window"
                );
                self.host.focus(handle);
                return;
            }
        }

        let handle = self.host.create_window(describe(kind, payload));
        debug!(
            target: "menucal.windows",
            ?kind,
            id = handle.id(),
            "created window"
        );
        self.slots.insert(kind, handle);
    }

    /// Handle the host's window-close lifecycle event.
    ///
    /// Matches by identity: only the slot whose handle carries `id` is
    /// cleared. Unknown ids are stale completions and are ignored.
    pub fn on_window_closed(&mut self, id: WindowId) {
        let kind = self
            .slots
            .iter()
            .find(|(_, handle)| handle.id() == id)
            .map(|(kind, _)| *kind);
        match kind {
            Some(kind) => {
                self.slots.remove(&kind);
                debug!(target: "menucal.windows", ?kind, id, "cleared window slot");
            }
            None => {
                trace!(target: "menucal.windows", id, "close event for unknown window");
            }
        }
    }

    /// Whether a slot currently holds a handle (visible or not).
    #[must_use]
    pub fn holds(&self, kind: WindowKind) -> bool {
        self.slots.contains_key(&kind)
    }
}

impl std::fmt::Debug for SecondaryWindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecondaryWindowManager")
            .field("slots", &self.slots.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Fixed per-kind window geometry and chrome.
fn describe(kind: WindowKind, payload: Option<DayEvent>) -> WindowDesc {
    match kind {
        WindowKind::Settings => WindowDesc {
            kind,
            title: "Settings".into(),
            size: Size::new(420.0, 300.0),
            style: WindowStyle::TITLED | WindowStyle::CLOSABLE,
            payload: None,
        },
        WindowKind::EventEditor => WindowDesc {
            kind,
            title: "Edit Event".into(),
            size: Size::new(400.0, 300.0),
            style: WindowStyle::TITLED
                | WindowStyle::CLOSABLE
                | WindowStyle::MINIATURIZABLE
                | WindowStyle::RESIZABLE,
            payload,
        },
    }
}
