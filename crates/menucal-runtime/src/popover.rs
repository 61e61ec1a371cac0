#![forbid(unsafe_code)]

//! Popover lifecycle.
//!
//! Primary activation of the status item toggles the popover; secondary
//! activation shows a transient action menu without touching popover
//! state. Opening always resets the represented day to today first, so
//! the popover never reopens on whatever month it was left on. The
//! popover also closes when the application loses foreground focus,
//! independent of the toggle path.

use std::cell::RefCell;
use std::rc::Rc;

use menucal_core::{CalendarCommands, MenuHost, MenuItem, MenuSelection, PopoverHost, WindowKind};
use tracing::debug;

use crate::windows::SecondaryWindowManager;

/// Drives popover visibility and the status item's context menu.
pub struct PopoverLifecycleController {
    popover: Rc<dyn PopoverHost>,
    calendar: Rc<dyn CalendarCommands>,
    menu: Rc<dyn MenuHost>,
    windows: Rc<RefCell<SecondaryWindowManager>>,
    quit: Box<dyn Fn()>,
}

impl PopoverLifecycleController {
    /// Wire the controller to its collaborators. `quit` is the host's
    /// terminate action, invoked from the context menu.
    pub fn new(
        popover: Rc<dyn PopoverHost>,
        calendar: Rc<dyn CalendarCommands>,
        menu: Rc<dyn MenuHost>,
        windows: Rc<RefCell<SecondaryWindowManager>>,
        quit: impl Fn() + 'static,
    ) -> Self {
        Self {
            popover,
            calendar,
            menu,
            windows,
            quit: Box::new(quit),
        }
    }

    /// Primary click: toggle the popover.
    ///
    /// Opening resets the calendar to today before the popover becomes
    /// visible.
    pub fn on_primary_activate(&self) {
        if self.popover.is_shown() {
            debug!(target: "menucal.popover", "closing via toggle");
            self.popover.close();
        } else {
            debug!(target: "menucal.popover", "opening on today");
            self.calendar.reset_to_current_day();
            self.popover.show();
        }
    }

    /// Secondary click: present the transient action menu.
    ///
    /// The menu is built, shown, and discarded within this call; popover
    /// state is never touched, whatever the user picks.
    pub fn on_secondary_activate(&self) {
        let items = [
            MenuItem::action("Settings", Some(','), MenuSelection::OpenSettings),
            MenuItem::Separator,
            MenuItem::action("Quit", Some('q'), MenuSelection::Quit),
        ];
        match self.menu.present(&items) {
            Some(MenuSelection::OpenSettings) => {
                self.windows
                    .borrow_mut()
                    .open_or_focus(WindowKind::Settings, None);
            }
            Some(MenuSelection::Quit) => (self.quit)(),
            None => {}
        }
    }

    /// The application resigned foreground focus: close the popover.
    pub fn on_app_deactivated(&self) {
        if self.popover.is_shown() {
            debug!(target: "menucal.popover", "closing on app deactivation");
        }
        self.popover.close();
    }
}

impl std::fmt::Debug for PopoverLifecycleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopoverLifecycleController")
            .field("shown", &self.popover.is_shown())
            .finish_non_exhaustive()
    }
}
