#![forbid(unsafe_code)]

//! Shared types and collaborator seams for menucal.
//!
//! # Role in menucal
//! `menucal-core` defines everything the presentation-state controllers in
//! `menucal-runtime` need to talk about without touching the platform:
//! geometry, the observable value primitive used by the day-label source,
//! the calendar/settings collaborator traits, and the host seams the
//! platform shell implements (popover, windows, menus).
//!
//! # Design
//! Collaborators are consumed as traits so the controllers stay
//! platform-independent and every behavior is testable with in-process
//! fakes. Controllers receive their collaborators at construction time;
//! there is no process-wide singleton.

pub mod calendar;
pub mod geometry;
pub mod host;
pub mod observable;
pub mod settings;

pub use calendar::{CalendarCommands, CalendarDate, DayCell, DayEvent, DayFlags, HolidayOverride};
pub use geometry::Size;
pub use host::{
    MenuHost, MenuItem, MenuSelection, PopoverHost, WindowDesc, WindowHandle, WindowHost, WindowId,
    WindowKind, WindowStyle,
};
pub use observable::{Observable, Subscription};
pub use settings::SettingsView;
