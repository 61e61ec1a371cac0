#![forbid(unsafe_code)]

//! Analytic coverage rasterization.
//!
//! Shapes are evaluated per pixel: rounded rectangles and circles through a
//! signed distance at the pixel center with a one-pixel linear falloff,
//! axis-aligned boxes through exact pixel/rect overlap. Everything here is
//! pure arithmetic, which is what keeps the renderer byte-deterministic.

use crate::mask::TemplateMask;

/// A rounded rectangle in canvas coordinates (top-left origin, points).
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    /// Signed distance from a point to the rect's boundary. Negative inside.
    fn distance(&self, px: f32, py: f32) -> f32 {
        let hw = self.width * 0.5 - self.radius;
        let hh = self.height * 0.5 - self.radius;
        let cx = self.x + self.width * 0.5;
        let cy = self.y + self.height * 0.5;
        let qx = (px - cx).abs() - hw;
        let qy = (py - cy).abs() - hh;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - self.radius
    }
}

/// Coverage of a filled shape at signed distance `d` from its boundary.
#[inline]
fn fill_coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Coverage of a stroked boundary of width `w` at signed distance `d`.
#[inline]
fn stroke_coverage(d: f32, w: f32) -> f32 {
    (w * 0.5 - d.abs() + 0.5).clamp(0.0, 1.0)
}

/// Overlap of the unit pixel at `(px, py)` with the interval `[x0, x1]`
/// along one axis.
#[inline]
fn axis_overlap(p: f32, x0: f32, x1: f32) -> f32 {
    ((p + 1.0).min(x1) - p.max(x0)).clamp(0.0, 1.0)
}

/// Exact coverage of an axis-aligned box over the pixel at `(px, py)`.
#[inline]
fn box_coverage(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32) -> f32 {
    axis_overlap(px, x, x + w) * axis_overlap(py, y, y + h)
}

/// Visit every pixel as `(x, y, center_x, center_y)`.
fn for_each_pixel(mask: &mut TemplateMask, mut f: impl FnMut(&mut TemplateMask, u32, u32, f32, f32)) {
    let (w, h) = (mask.width(), mask.height());
    for y in 0..h {
        for x in 0..w {
            f(mask, x, y, x as f32 + 0.5, y as f32 + 0.5);
        }
    }
}

/// Fill the part of a rounded rectangle inside a horizontal band.
///
/// Used for the header strip: the band clips the card's rounded outline so
/// the strip inherits the card's top corners.
pub(crate) fn fill_rounded_rect_clipped(
    mask: &mut TemplateMask,
    rr: RoundedRect,
    band_y: f32,
    band_height: f32,
) {
    for_each_pixel(mask, |m, x, y, cx, cy| {
        let shape = fill_coverage(rr.distance(cx, cy));
        let band = axis_overlap(y as f32, band_y, band_y + band_height);
        m.blend_over(x, y, shape.min(band));
    });
}

/// Stroke a rounded rectangle's outline.
pub(crate) fn stroke_rounded_rect(mask: &mut TemplateMask, rr: RoundedRect, width: f32) {
    for_each_pixel(mask, |m, x, y, cx, cy| {
        m.blend_over(x, y, stroke_coverage(rr.distance(cx, cy), width));
    });
}

/// Punch a circular hole (subtractive compositing).
pub(crate) fn punch_circle(mask: &mut TemplateMask, cx: f32, cy: f32, diameter: f32) {
    let r = diameter * 0.5;
    for_each_pixel(mask, |m, x, y, px, py| {
        let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() - r;
        m.punch_out(x, y, fill_coverage(d));
    });
}

/// Fill an axis-aligned box with exact pixel coverage.
pub(crate) fn fill_box(mask: &mut TemplateMask, x: f32, y: f32, w: f32, h: f32) {
    for_each_pixel(mask, |m, px, py, _, _| {
        m.blend_over(px, py, box_coverage(px as f32, py as f32, x, y, w, h));
    });
}
