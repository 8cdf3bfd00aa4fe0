//! Module responsible for rendering text.

use std::collections::HashSet;
use std::fmt;

use image::{GenericImage, RgbaImage};
use rusttype::{point, Font, GlyphId, Point, Scale};

use model::Color;


/// Check if given font has all the glyphs for given text.
pub(super) fn check<'f, 's>(font: &'f Font<'f>, text: &'s str) {
    let mut missing = HashSet::new();
    for ch in text.chars() {
        let glyph = font.glyph(ch);
        if glyph.is_none() || glyph.unwrap().id() == GlyphId(0) {
            missing.insert(ch as u32);
        }
    }
    if !missing.is_empty() {
        warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
            missing.into_iter().map(|c| format!("{:#x}", c)).collect::<Vec<_>>().join(", "));
    }
}


/// Style that the text is rendered with.
pub(super) struct Style<'f> {
    font: &'f Font<'f>,
    size: f32,
    color: Color,
}

impl<'f> Style<'f> {
    #[inline]
    pub fn new(font: &'f Font, size: f32, color: Color) -> Self {
        if size <= 0.0 {
            panic!("text::Style got non-positive size ({})", size);
        }
        Style{font: font, size: size, color: color}
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl<'f> fmt::Debug for Style<'f> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Style")
            .field("font", &"Font{}")  // we don't have any displayable info here
            .field("size", &self.size)
            .field("color", &self.color)
            .finish()
    }
}


/// Renders a line of text onto given image,
/// with the pen starting at `position` on the baseline.
///
/// Text should be single-line (line breaks are ignored).
/// Pixels falling outside of the image are dropped silently.
pub(super) fn render_line(img: &mut RgbaImage, s: &str,
                          position: Point<f32>, style: &Style) {
    for glyph in style.font.layout(s, style.scale(), position) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, v| {
                let x = (bbox.min.x + x as i32) as u32;
                let y = (bbox.min.y + y as i32) as u32;
                let alpha = (v * 255f32) as u8;
                if img.in_bounds(x, y) {
                    img.blend_pixel(x, y, style.color.to_rgba(alpha));
                }
            });
        }
    }
}

/// Compute the pixel width of given text.
pub(super) fn text_width(s: &str, style: &Style) -> f32 {
    // Compute text width as the final X position of the "caret"
    // after laying out all the glyphs, starting from X=0.
    let glyphs: Vec<_> = style.font
        .layout(s, style.scale(), point(0.0, /* unused */ 0.0))
        .collect();
    glyphs.iter()
        .rev()
        .filter_map(|g| g.pixel_bounding_box().map(|bb| {
            bb.min.x as f32 + g.unpositioned().h_metrics().advance_width
        }))
        .next().unwrap_or(0.0)
}

/// Integer offsets at which outline passes are rendered,
/// relative to the position of the final fill pass.
/// The origin itself is excluded.
pub(super) fn outline_offsets(width: u32) -> Vec<(i32, i32)> {
    let w = width as i32;
    let mut offsets = Vec::with_capacity(((2 * w + 1) * (2 * w + 1) - 1) as usize);
    for dx in -w..w + 1 {
        for dy in -w..w + 1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            offsets.push((dx, dy));
        }
    }
    offsets
}
