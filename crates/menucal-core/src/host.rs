#![forbid(unsafe_code)]

//! Platform host seams.
//!
//! The platform shell (status item, popover, windows, menus) implements
//! these traits; the controllers in `menucal-runtime` drive them without
//! linking any windowing code. Tests substitute in-process fakes.
//!
//! Methods take `&self`: hosts wrap platform handles and keep whatever
//! interior state they need. Everything runs on the single UI-affine
//! context, so no trait here requires `Send`.

use std::rc::Rc;

use bitflags::bitflags;

use crate::calendar::DayEvent;
use crate::geometry::Size;

/// The single popover attached to the status item.
pub trait PopoverHost {
    /// Present the popover anchored to the status control.
    fn show(&self);

    /// Close the popover if it is shown.
    fn close(&self);

    /// Whether the popover is currently shown.
    fn is_shown(&self) -> bool;

    /// Apply new content geometry. Only called while the popover is shown;
    /// the size coordinator re-checks [`is_shown`](Self::is_shown) before
    /// applying a debounced size.
    fn set_content_size(&self, size: Size);
}

/// Identity of a live window, used to match close events to slots.
pub type WindowId = u64;

/// The kinds of secondary windows this app opens. Closed set: each kind is
/// a singleton while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Settings,
    EventEditor,
}

bitflags! {
    /// Window chrome for a secondary window.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowStyle: u8 {
        const TITLED        = 0b0001;
        const CLOSABLE      = 0b0010;
        const MINIATURIZABLE = 0b0100;
        const RESIZABLE     = 0b1000;
    }
}

/// Everything the host needs to construct a secondary window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDesc {
    pub kind: WindowKind,
    pub title: String,
    pub size: Size,
    pub style: WindowStyle,
    /// Event bound into the editor at creation. Ignored for kinds that
    /// carry no payload.
    pub payload: Option<DayEvent>,
}

/// A live window created by the host.
///
/// Handles stay valid after the user closes the window (the host retains
/// the platform object) until the manager drops its reference; `is_visible`
/// stays meaningful for the whole time the manager holds the handle.
pub trait WindowHandle {
    /// Stable identity for close-event matching.
    fn id(&self) -> WindowId;

    /// Whether the window is on screen.
    fn is_visible(&self) -> bool;
}

/// Creates and focuses secondary windows.
pub trait WindowHost {
    /// Construct a window, bind the payload, and present it.
    fn create_window(&self, desc: WindowDesc) -> Rc<dyn WindowHandle>;

    /// Bring an existing window to the front.
    fn focus(&self, handle: &Rc<dyn WindowHandle>);
}

/// What the user picked from the transient status-item menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    OpenSettings,
    Quit,
}

/// One entry of the transient status-item menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action {
        title: String,
        /// Key equivalent shown next to the title (e.g. `,` for Cmd+,).
        key_equivalent: Option<char>,
        selection: MenuSelection,
    },
    Separator,
}

impl MenuItem {
    /// Convenience constructor for an action entry.
    pub fn action(
        title: impl Into<String>,
        key_equivalent: Option<char>,
        selection: MenuSelection,
    ) -> Self {
        Self::Action {
            title: title.into(),
            key_equivalent,
            selection,
        }
    }
}

/// Presents a transient, auto-dismissing menu anchored to the status
/// control.
///
/// The menu is built, shown, and discarded within one call; it is never
/// part of persistent application state.
pub trait MenuHost {
    /// Present the menu and block until the user selects an entry or
    /// dismisses it. Returns `None` on dismissal.
    fn present(&self, items: &[MenuItem]) -> Option<MenuSelection>;
}
