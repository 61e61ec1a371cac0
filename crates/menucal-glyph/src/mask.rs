#![forbid(unsafe_code)]

//! Single-channel coverage mask.

/// A monochrome template image: one coverage byte per pixel, row-major,
/// origin at the top-left.
///
/// `0` is fully transparent, `255` fully opaque foreground. The platform
/// recolors the mask per appearance; no color lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl TemplateMask {
    /// Create a fully transparent mask.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw coverage bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Coverage at a pixel. Out-of-bounds reads return 0.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    /// Whether any pixel has nonzero coverage.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.data.iter().any(|&a| a != 0)
    }

    /// Template-mode marker: masks are always single-channel and tinted by
    /// the host. Always `true`; exists so callers can assert the contract.
    #[inline]
    pub const fn is_template(&self) -> bool {
        true
    }

    /// Composite `cov` (0.0..=1.0) over the existing coverage.
    #[inline]
    pub(crate) fn blend_over(&mut self, x: u32, y: u32, cov: f32) {
        if x >= self.width || y >= self.height || cov <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) as usize;
        let src = cov.clamp(0.0, 1.0);
        let dst = f32::from(self.data[idx]) / 255.0;
        let out = src + dst * (1.0 - src);
        self.data[idx] = (out * 255.0).round() as u8;
    }

    /// Subtractive compositing: erase `cov` (0.0..=1.0) of the existing
    /// coverage, leaving the background visible through the hole.
    #[inline]
    pub(crate) fn punch_out(&mut self, x: u32, y: u32, cov: f32) {
        if x >= self.width || y >= self.height || cov <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) as usize;
        let keep = 1.0 - cov.clamp(0.0, 1.0);
        self.data[idx] = (f32::from(self.data[idx]) * keep).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_is_transparent() {
        let mask = TemplateMask::new(20, 20);
        assert!(!mask.has_content());
        assert_eq!(mask.data().len(), 400);
    }

    #[test]
    fn blend_over_accumulates() {
        let mut mask = TemplateMask::new(4, 4);
        mask.blend_over(1, 1, 0.5);
        let half = mask.coverage(1, 1);
        assert!(half > 0 && half < 255);
        mask.blend_over(1, 1, 1.0);
        assert_eq!(mask.coverage(1, 1), 255);
    }

    #[test]
    fn punch_out_erases() {
        let mut mask = TemplateMask::new(4, 4);
        mask.blend_over(2, 2, 1.0);
        mask.punch_out(2, 2, 1.0);
        assert_eq!(mask.coverage(2, 2), 0);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut mask = TemplateMask::new(2, 2);
        mask.blend_over(5, 5, 1.0);
        mask.punch_out(5, 5, 1.0);
        assert_eq!(mask.coverage(5, 5), 0);
        assert!(!mask.has_content());
    }

    #[test]
    fn masks_are_template_mode() {
        assert!(TemplateMask::new(1, 1).is_template());
    }
}
