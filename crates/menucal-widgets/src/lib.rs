#![forbid(unsafe_code)]

//! Editable date fields for the popover header.
//!
//! The year and month readouts in the popover toggle between a display
//! label and an inline text editor. [`EditableDateField`] owns that
//! per-field state machine: entering edit mode snapshots the bound
//! component into a draft, committing validates the draft and delegates an
//! accepted change to the calendar collaborator, and losing focus commits
//! exactly like an explicit submit.

pub mod date_field;
pub mod focus;

pub use date_field::{DateComponent, EditableDateField, FieldMode};
pub use focus::FocusToken;
