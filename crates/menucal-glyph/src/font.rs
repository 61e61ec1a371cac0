#![forbid(unsafe_code)]

//! Embedded monospaced digit face.
//!
//! A 5×7 bitmap face covering `0`-`9`, standing in for the platform's
//! small monospaced-digit font. Fixed advance keeps measurement trivial and
//! rendering deterministic. Unknown characters consume their advance but
//! draw nothing, so the renderer never assumes a label shape.

use crate::mask::TemplateMask;
use crate::raster::fill_box;

/// Glyph cell width in points.
pub(crate) const GLYPH_WIDTH: f32 = 5.0;
/// Glyph cell height in points.
pub(crate) const GLYPH_HEIGHT: f32 = 7.0;
/// Horizontal spacing between glyph cells.
pub(crate) const TRACKING: f32 = 1.0;

/// Row bitmaps per digit; bit 4 is the leftmost column.
const DIGITS: [[u8; 7]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    ch.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Measure a label's rendered size in points.
///
/// Width is `n` glyph cells plus tracking between them; the empty label
/// measures zero.
pub(crate) fn measure(label: &str) -> (f32, f32) {
    let n = label.chars().count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let width = n as f32 * GLYPH_WIDTH + (n as f32 - 1.0) * TRACKING;
    (width, GLYPH_HEIGHT)
}

/// Draw a label with its top-left corner at `(x, y)`.
///
/// Each lit font cell is blitted as a 1×1 box at its (possibly fractional)
/// position, so centered text keeps exact symmetric edge coverage.
pub(crate) fn draw(mask: &mut TemplateMask, label: &str, x: f32, y: f32) {
    let mut pen_x = x;
    for ch in label.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5 {
                    if bits & (0b10000 >> col) != 0 {
                        fill_box(mask, pen_x + col as f32, y + row as f32, 1.0, 1.0);
                    }
                }
            }
        }
        pen_x += GLYPH_WIDTH + TRACKING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_empty_label() {
        assert_eq!(measure(""), (0.0, 0.0));
    }

    #[test]
    fn measure_one_and_two_digits() {
        assert_eq!(measure("7"), (5.0, 7.0));
        assert_eq!(measure("28"), (11.0, 7.0));
    }

    #[test]
    fn draw_digit_produces_content() {
        let mut mask = TemplateMask::new(10, 10);
        draw(&mut mask, "8", 1.0, 1.0);
        assert!(mask.has_content());
    }

    #[test]
    fn unknown_char_draws_nothing_but_advances() {
        let mut blank = TemplateMask::new(20, 10);
        draw(&mut blank, "?", 1.0, 1.0);
        assert!(!blank.has_content());

        // "?5" places the 5 one advance to the right of where "5" alone sits.
        let mut shifted = TemplateMask::new(20, 10);
        draw(&mut shifted, "?5", 1.0, 1.0);
        let mut offset = TemplateMask::new(20, 10);
        draw(&mut offset, "5", 1.0 + GLYPH_WIDTH + TRACKING, 1.0);
        assert_eq!(shifted, offset);
    }

    #[test]
    fn digits_are_distinct() {
        let mut masks = Vec::new();
        for d in 0..10 {
            let mut mask = TemplateMask::new(7, 9);
            draw(&mut mask, &d.to_string(), 1.0, 1.0);
            masks.push(mask);
        }
        for i in 0..10 {
            for j in (i + 1)..10 {
                assert_ne!(masks[i], masks[j], "digits {i} and {j} render identically");
            }
        }
    }
}
