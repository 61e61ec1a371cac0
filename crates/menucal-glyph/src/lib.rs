#![forbid(unsafe_code)]

//! Status-bar glyph rasterizer.
//!
//! # Role in menucal
//! `menucal-glyph` turns the current day label into the small monochrome
//! template image shown in the status bar: a rounded calendar card with a
//! filled header strip, two punched-out hinge dots, and the day number
//! centered in the body. An empty label selects a generic calendar glyph
//! instead; the two representations are mutually exclusive and chosen once
//! at the call site ([`status_glyph`]).
//!
//! # Determinism
//! Rendering is a pure function: no I/O, no clocks, no randomness. The same
//! label always produces a byte-identical [`TemplateMask`]. Coverage is
//! evaluated analytically per pixel (signed distance for the rounded shapes,
//! exact box overlap for rectangles), so output does not depend on any
//! platform rasterizer.
//!
//! # Template semantics
//! The output is a single-channel mask. The host tints it for the current
//! light/dark appearance; this crate never emits explicit colors.

pub mod mask;
pub mod renderer;

mod font;
mod raster;

pub use mask::TemplateMask;
pub use renderer::{CANVAS_SIZE, generic_calendar, render_day_card, status_glyph};
