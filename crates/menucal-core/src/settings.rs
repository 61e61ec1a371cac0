#![forbid(unsafe_code)]

//! Read-only view of the settings collaborator.

/// Settings the presentation layer reads. Persistence and the settings UI
/// live outside this workspace.
pub trait SettingsView {
    /// Whether the month grid shows the week-number column. Affects grid
    /// column count only; no controller in this workspace branches on it
    /// beyond passing it through.
    fn show_week_numbers(&self) -> bool;
}
