//! Module implementing the actual generation task.
//! Most if not all of the compositing logic lives here.

use std::cmp;
use std::ops::Deref;
use std::sync::Arc;

use image::{DynamicImage, GenericImage, Pixel, Rgba, RgbaImage};
use rusttype::point;

use model::Config;
use model::constants::DEFAULT_FONT;
use resources::{self, Font, FontError};
use util::cache::ThreadSafeCache;
use super::error::CaptionError;
use super::layout::{self, Layout};
use super::text::{self, Style};


/// Represents a single generation task and contains all the relevant logic.
///
/// This is a separate struct so that the per-call state
/// (the config snapshot, the source image) can be easily carried
/// between its methods.
pub(super) struct CaptionTask<'g> {
    config: Config,
    font_cache: &'g ThreadSafeCache<String, Font>,
    image: &'g DynamicImage,
}

impl<'g> Deref for CaptionTask<'g> {
    type Target = Config;
    fn deref(&self) -> &Self::Target {
        &self.config  // makes the rendering code a little terser
    }
}

impl<'g> CaptionTask<'g> {
    #[inline]
    pub fn new(config: Config,
               font_cache: &'g ThreadSafeCache<String, Font>,
               image: &'g DynamicImage) -> Self {
        CaptionTask{config: config, font_cache: font_cache, image: image}
    }
}

impl<'g> CaptionTask<'g> {
    /// Perform the generation task.
    pub fn perform(self) -> Result<RgbaImage, CaptionError> {
        let (width, height) = self.image.dimensions();
        debug!("Generating a demotivator for a {}x{} image", width, height);

        let (top_text, bottom_text) = self.caption_texts();

        let font_size = if self.auto_font_size {
            layout::fit_font_size(width)
        } else {
            self.font_size
        };
        if !(font_size > 0.0) {
            return Err(CaptionError::Font(FontError::Face(font_size)));
        }

        let layout = layout::lay_out(width, height, self.padding, font_size,
            !top_text.is_empty(), !bottom_text.is_empty());
        trace!("Canvas laid out as {}x{} with {}pt text",
            layout.canvas_width, layout.canvas_height, layout.font_size);

        let mut canvas = self.compose_canvas(&layout);

        let font = self.resolve_font().map_err(CaptionError::Font)?;

        let mut baseline = layout.first_baseline;
        if !top_text.is_empty() {
            self.draw_caption(&mut canvas, &top_text, baseline, &font, &layout);
            baseline += layout.baseline_advance;
        }
        if !bottom_text.is_empty() {
            self.draw_caption(&mut canvas, &bottom_text, baseline, &font, &layout);
        }

        Ok(canvas)
    }

    /// Caption texts with the case transform applied.
    fn caption_texts(&self) -> (String, String) {
        if self.text_uppercase {
            (self.top_text.to_uppercase(), self.bottom_text.to_uppercase())
        } else {
            (self.top_text.clone(), self.bottom_text.clone())
        }
    }

    /// Fill the canvas, paint the border, and blit the source image onto it.
    fn compose_canvas(&self, layout: &Layout) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(
            layout.canvas_width, layout.canvas_height,
            self.background_color.to_rgba(0xff));

        let (width, height) = self.image.dimensions();
        let padding = self.padding as i32;
        let border = self.border as i32;

        // The border is a stack of progressively smaller filled rectangles;
        // the innermost ones are painted over by the image blit below.
        let border_color = self.border_color.to_rgba(0xff);
        for i in 0..border {
            fill_rect(&mut canvas,
                padding - border + i,
                padding - border + i,
                padding + width as i32 + border - i,
                padding + height as i32 + border - i,
                border_color);
        }

        trace!("Blitting the source image at ({}, {})", self.padding, self.padding);
        let source = self.image.to_rgba();
        for y in 0..height {
            for x in 0..width {
                canvas.get_pixel_mut(self.padding + x, self.padding + y)
                    .blend(source.get_pixel(x, y));
            }
        }

        canvas
    }

    /// Draw a single caption centered at given baseline.
    fn draw_caption(&self, canvas: &mut RgbaImage, caption: &str,
                    baseline: u32, font: &Font, layout: &Layout) {
        debug!("Rendering caption: {:?}", caption);
        text::check(font, caption);

        let fill = Style::new(font, layout.font_size, self.text_color);
        let width = text::text_width(caption, &fill).ceil() as i32;
        let x = (canvas.width() as i32 - width) / 2;
        let baseline = baseline as i32;

        if self.text_outline_width > 0 {
            let outline = Style::new(
                font, layout.font_size, self.text_outline_color);
            for (dx, dy) in text::outline_offsets(self.text_outline_width) {
                text::render_line(canvas, caption,
                    point((x + dx) as f32, (baseline + dy) as f32), &outline);
            }
        }

        // The fill goes last so that it sits on top of the outline.
        text::render_line(canvas, caption,
            point(x as f32, baseline as f32), &fill);
    }

    /// Resolve the font to render captions with.
    ///
    /// Raw font data takes precedence over a font file path;
    /// with neither configured, the embedded default face is used.
    /// Only fonts loaded from files are kept in the cache;
    /// raw data and the embedded face are re-parsed on every call.
    fn resolve_font(&self) -> Result<Arc<Font>, FontError> {
        if let Some(ref data) = self.font_data {
            trace!("Using raw font data ({} byte(s))", data.len());
            return resources::parse_font(data.clone()).map(Arc::new);
        }

        if let Some(ref path) = self.font_path {
            let key = path.display().to_string();
            if let Some(font) = self.font_cache.get(&key) {
                trace!("Font {} found in the cache", key);
                return Ok(font);
            }
            debug!("Loading font from {}...", path.display());
            let bytes = resources::load_font_file(path)?;
            let font = resources::parse_font(bytes)?;
            return Ok(self.font_cache.put(key, font));
        }

        trace!("Using the built-in `{}` font", DEFAULT_FONT);
        let bytes = resources::builtin_font(DEFAULT_FONT)
            .expect("default built-in font").to_vec();
        resources::parse_font(bytes).map(Arc::new)
    }
}


/// Fill a rectangle given as `[min, max)` bounds, clipped to the image.
fn fill_rect(img: &mut RgbaImage, min_x: i32, min_y: i32,
             max_x: i32, max_y: i32, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let x0 = cmp::max(min_x, 0) as u32;
    let y0 = cmp::max(min_y, 0) as u32;
    let x1 = cmp::max(cmp::min(max_x, width as i32), 0) as u32;
    let y1 = cmp::max(cmp::min(max_y, height as i32), 0) as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}


#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use super::fill_rect;

    #[test]
    fn fill_rect_clips_to_image() {
        let background = Rgba{data: [0u8, 0, 0, 255]};
        let white = Rgba{data: [255u8, 255, 255, 255]};
        let mut img = RgbaImage::from_pixel(4, 4, background);

        fill_rect(&mut img, -2, -2, 2, 2, white);
        assert_eq!(white, *img.get_pixel(0, 0));
        assert_eq!(white, *img.get_pixel(1, 1));
        assert_eq!(background, *img.get_pixel(2, 2));
    }

    #[test]
    fn fill_rect_negative_area() {
        let background = Rgba{data: [0u8, 0, 0, 255]};
        let white = Rgba{data: [255u8, 255, 255, 255]};
        let mut img = RgbaImage::from_pixel(4, 4, background);

        // Entirely outside of the image: nothing to paint.
        fill_rect(&mut img, -8, -8, -4, -4, white);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(background, *img.get_pixel(x, y));
            }
        }
    }
}
