//! Module computing the geometry of the demotivator canvas.

use model::constants::DEFAULT_FONT_SIZE;


/// Image width at which captions are rendered at their base size.
const BASE_IMAGE_WIDTH: f32 = 800.0;
/// Bounds on the automatic font scale factor.
const MIN_SCALE_FACTOR: f32 = 0.5;
const MAX_SCALE_FACTOR: f32 = 2.0;

/// Height of the canvas strip reserved for a single caption,
/// as a multiple of the font size.
const CAPTION_BLOCK_FACTOR: f32 = 1.5;
/// Offset of the first caption baseline below the image,
/// as a multiple of the font size.
const FIRST_BASELINE_FACTOR: f32 = 0.8;
/// Distance between consecutive caption baselines,
/// as a multiple of the font size.
const BASELINE_ADVANCE_FACTOR: f32 = 1.2;


/// Computed placement of everything that goes onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Layout {
    pub font_size: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Y coordinate of the first caption baseline.
    pub first_baseline: u32,
    /// Distance to the next caption baseline.
    pub baseline_advance: u32,
}


/// Pick a font size fitting an image of given width.
///
/// The size depends on the image width alone, not on the caption length,
/// so a sufficiently long caption on a narrow image can still overflow
/// the canvas horizontally.
pub(super) fn fit_font_size(image_width: u32) -> f32 {
    let scale_factor = (image_width as f32 / BASE_IMAGE_WIDTH)
        .max(MIN_SCALE_FACTOR)
        .min(MAX_SCALE_FACTOR);
    DEFAULT_FONT_SIZE * scale_factor
}

/// Lay out the canvas for an image of given dimensions.
///
/// The canvas fits the image surrounded by `padding` on every side,
/// plus a strip below for each non-empty caption.
/// The border does not factor in: it is drawn within the padding area.
pub(super) fn lay_out(image_width: u32, image_height: u32, padding: u32,
                      font_size: f32, has_top: bool, has_bottom: bool) -> Layout {
    let caption_height = (font_size * CAPTION_BLOCK_FACTOR) as u32;
    let mut text_height = 0;
    if has_top {
        text_height += caption_height;
    }
    if has_bottom {
        text_height += caption_height;
    }

    Layout{
        font_size: font_size,
        canvas_width: image_width + padding * 2,
        canvas_height: image_height + padding * 2 + text_height,
        first_baseline: padding + image_height
            + (font_size * FIRST_BASELINE_FACTOR) as u32,
        baseline_advance: (font_size * BASELINE_ADVANCE_FACTOR) as u32,
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::{fit_font_size, lay_out};

    #[test]
    fn no_captions_no_extra_height() {
        let layout = lay_out(640, 480, 80, 48.0, false, false);
        assert_eq!(640 + 160, layout.canvas_width);
        assert_eq!(480 + 160, layout.canvas_height);
    }

    #[test]
    fn single_caption_strip() {
        let expected_strip = (48.0 * 1.5) as u32;
        let top_only = lay_out(640, 480, 80, 48.0, true, false);
        let bottom_only = lay_out(640, 480, 80, 48.0, false, true);
        assert_eq!(480 + 160 + expected_strip, top_only.canvas_height);
        assert_eq!(480 + 160 + expected_strip, bottom_only.canvas_height);
    }

    #[test]
    fn both_captions_stack() {
        let layout = lay_out(640, 480, 80, 48.0, true, true);
        assert_eq!(480 + 160 + 2 * 72, layout.canvas_height);
    }

    #[test]
    fn baselines() {
        let layout = lay_out(640, 480, 80, 48.0, true, true);
        // floor(48 * 0.8) below the image, floor(48 * 1.2) between lines.
        assert_eq!(80 + 480 + 38, layout.first_baseline);
        assert_eq!(57, layout.baseline_advance);
    }

    #[test]
    fn auto_size_scales_with_width() {
        assert_that!(fit_font_size(400)).is_equal_to(24.0);
        assert_that!(fit_font_size(800)).is_equal_to(48.0);
        assert_that!(fit_font_size(1200)).is_equal_to(72.0);
    }

    #[test]
    fn auto_size_is_clamped() {
        // Narrower than half the base width: clamped at a factor of 0.5.
        assert_that!(fit_font_size(100)).is_equal_to(24.0);
        // Wider than twice the base width: clamped at a factor of 2.0.
        assert_that!(fit_font_size(3200)).is_equal_to(96.0);
    }

    #[test]
    fn auto_size_is_monotonic() {
        let widths = [1, 200, 400, 799, 800, 801, 1600, 3200, 10_000];
        for pair in widths.windows(2) {
            assert!(fit_font_size(pair[0]) <= fit_font_size(pair[1]),
                "font size not monotonic between widths {} and {}",
                pair[0], pair[1]);
        }
    }
}
