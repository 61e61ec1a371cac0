#![forbid(unsafe_code)]

//! Day-card and generic calendar glyph rendering.
//!
//! Draw order matters: the header strip is filled first, then the hinge
//! holes are punched out of it, and only then is the outline stroked —
//! punching after the stroke would erase the stroke where it crosses the
//! header.

use crate::font;
use crate::mask::TemplateMask;
use crate::raster::{
    RoundedRect, fill_box, fill_rounded_rect_clipped, punch_circle, stroke_rounded_rect,
};

/// Status-bar canvas edge length in points.
pub const CANVAS_SIZE: u32 = 20;

// Card geometry, in canvas points (top-left origin). The card is slightly
// wider than tall so it reads as a calendar page at status-bar size.
const CARD_X: f32 = 1.25;
const CARD_Y: f32 = 2.0;
const CARD_WIDTH: f32 = 17.5;
const CARD_HEIGHT: f32 = 16.0;
const CORNER_RADIUS: f32 = 2.5;
const HEADER_HEIGHT: f32 = 3.5;
const OUTLINE_WIDTH: f32 = 1.1;
const SEPARATOR_WIDTH: f32 = 0.8;
/// Hinge hole diameter; sized down from 1.8 so the narrow header doesn't
/// feel crowded.
const HINGE_DIAMETER: f32 = 1.4;
/// Hinge inset from each card edge.
const HINGE_INSET: f32 = 4.0;
/// Vertical nudge compensating the digit face's visual center.
const LABEL_NUDGE: f32 = 0.25;

fn card() -> RoundedRect {
    RoundedRect {
        x: CARD_X,
        y: CARD_Y,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        radius: CORNER_RADIUS,
    }
}

/// Draw the shared card chrome: header fill, hinge punch-outs, outline
/// stroke, header/body separator.
fn draw_card_chrome(mask: &mut TemplateMask) {
    let rr = card();

    fill_rounded_rect_clipped(mask, rr, CARD_Y, HEADER_HEIGHT);

    // Hinges, punched out of the header before the stroke.
    let hinge_cy = CARD_Y + HEADER_HEIGHT * 0.5;
    let left_cx = CARD_X + HINGE_INSET + HINGE_DIAMETER * 0.5;
    let right_cx = CARD_X + CARD_WIDTH - HINGE_INSET - HINGE_DIAMETER * 0.5;
    punch_circle(mask, left_cx, hinge_cy, HINGE_DIAMETER);
    punch_circle(mask, right_cx, hinge_cy, HINGE_DIAMETER);

    stroke_rounded_rect(mask, rr, OUTLINE_WIDTH);

    // Separator along the header/body boundary.
    let boundary = CARD_Y + HEADER_HEIGHT;
    fill_box(
        mask,
        CARD_X,
        boundary - SEPARATOR_WIDTH * 0.5,
        CARD_WIDTH,
        SEPARATOR_WIDTH,
    );
}

/// Render the numeric day card for a non-empty label.
///
/// The label is measured at the embedded digit face and centered in the
/// body region below the header. Long labels stay centered and may touch
/// the card edges; there is no truncation.
#[must_use]
pub fn render_day_card(label: &str) -> TemplateMask {
    let mut mask = TemplateMask::new(CANVAS_SIZE, CANVAS_SIZE);
    draw_card_chrome(&mut mask);

    let (text_w, text_h) = font::measure(label);
    if text_w > 0.0 {
        let body_y = CARD_Y + HEADER_HEIGHT;
        let body_h = CARD_HEIGHT - HEADER_HEIGHT;
        let x = CARD_X + (CARD_WIDTH - text_w) * 0.5;
        let y = body_y + (body_h - text_h) * 0.5 + LABEL_NUDGE;
        font::draw(&mut mask, label, x, y);
    }
    mask
}

/// Render the generic calendar glyph used when no day label is available.
///
/// Same card chrome as the numeric card, with a dot grid in the body
/// instead of a number.
#[must_use]
pub fn generic_calendar() -> TemplateMask {
    let mut mask = TemplateMask::new(CANVAS_SIZE, CANVAS_SIZE);
    draw_card_chrome(&mut mask);

    // Two rows of three day dots.
    const DOT: f32 = 2.0;
    let xs = [4.5, 9.0, 13.5];
    let ys = [7.5, 11.5];
    for y in ys {
        for x in xs {
            fill_box(&mut mask, x, y, DOT, DOT);
        }
    }
    mask
}

/// Select the status glyph for a day label.
///
/// The empty label is the "no numeric glyph" sentinel and selects the
/// generic calendar; the numeric-card path is never invoked for it.
#[must_use]
pub fn status_glyph(label: &str) -> TemplateMask {
    if label.is_empty() {
        generic_calendar()
    } else {
        render_day_card(label)
    }
}
