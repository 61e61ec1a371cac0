#![forbid(unsafe_code)]

//! Global keyboard shortcut for the settings window.
//!
//! The host installs a process-wide key monitor and forwards key-downs
//! here; a match opens (or focuses) the settings window regardless of
//! where input focus currently sits.

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;
use menucal_core::WindowKind;
use tracing::debug;

use crate::windows::SecondaryWindowManager;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE    = 0b0000;
        const SHIFT   = 0b0001;
        const ALT     = 0b0010;
        const CTRL    = 0b0100;
        /// Command on macOS, Super/Meta elsewhere.
        const COMMAND = 0b1000;
    }
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: char,
}

impl KeyCombo {
    /// Create a combo.
    #[must_use]
    pub const fn new(modifiers: Modifiers, key: char) -> Self {
        Self { modifiers, key }
    }
}

/// Routes the settings key-combination to the window manager.
pub struct ShortcutDispatcher {
    settings: KeyCombo,
    windows: Rc<RefCell<SecondaryWindowManager>>,
}

impl ShortcutDispatcher {
    /// Dispatcher with the standard Cmd+Comma settings shortcut.
    #[must_use]
    pub fn new(windows: Rc<RefCell<SecondaryWindowManager>>) -> Self {
        Self::with_settings_shortcut(windows, KeyCombo::new(Modifiers::COMMAND, ','))
    }

    /// Dispatcher with a custom settings shortcut.
    #[must_use]
    pub fn with_settings_shortcut(
        windows: Rc<RefCell<SecondaryWindowManager>>,
        settings: KeyCombo,
    ) -> Self {
        Self { settings, windows }
    }

    /// Handle a key-down. Returns `true` if the event was consumed and
    /// should not propagate further.
    pub fn on_key_down(&self, combo: KeyCombo) -> bool {
        if combo != self.settings {
            return false;
        }
        debug!(target: "menucal.shortcut", "settings shortcut");
        self.windows
            .borrow_mut()
            .open_or_focus(WindowKind::Settings, None);
        true
    }
}

impl std::fmt::Debug for ShortcutDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutDispatcher")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
