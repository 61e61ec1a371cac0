#![forbid(unsafe_code)]

//! Presentation-state controllers for the menu-bar calendar.
//!
//! # Role in menucal
//! This crate is the coordination layer between the platform shell and
//! the calendar collaborators: it keeps the status-bar glyph in sync with
//! the day label, toggles the popover and debounces its auto-resize,
//! manages the singleton settings/event-editor windows, and routes the
//! global settings shortcut.
//!
//! # Concurrency model
//! Everything runs on one UI-affine context. The only asynchrony is the
//! [`TimerQueue`](timer::TimerQueue): explicit, cancellable, timer-based
//! deferral that the host pumps from its run loop. No controller touches
//! another's private state; shared collaborators are passed in at
//! construction time.

pub mod popover;
pub mod resize;
pub mod shortcut;
pub mod status_icon;
pub mod timer;
pub mod windows;

pub use popover::PopoverLifecycleController;
pub use resize::{PopoverSizeCoordinator, RESIZE_DEBOUNCE};
pub use shortcut::{KeyCombo, Modifiers, ShortcutDispatcher};
pub use status_icon::{StatusControl, StatusIconController};
pub use timer::{TimerQueue, TimerToken};
pub use windows::SecondaryWindowManager;
