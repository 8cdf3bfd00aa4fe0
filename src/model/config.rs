//! Module with the generator configuration.

use std::path::PathBuf;

use super::color::Color;
use super::constants::*;


/// Configuration of the demotivator generator.
///
/// All fields are public and can be modified freely;
/// a generation run takes a snapshot of the configuration,
/// so changes never affect a render that is already underway.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// First (upper) caption line, rendered beneath the image.
    /// Empty string means no caption.
    pub top_text: String,
    /// Second (lower) caption line.
    pub bottom_text: String,

    /// Size of the caption text, in points.
    /// Ignored when `auto_font_size` is enabled.
    pub font_size: f32,
    /// Path to a TTF/OTF file to render the captions with.
    pub font_path: Option<PathBuf>,
    /// Raw font data to render the captions with.
    /// Takes precedence over `font_path`.
    pub font_data: Option<Vec<u8>>,

    /// Width of the empty canvas area around the image, in pixels.
    pub padding: u32,
    /// Thickness of the border drawn around the image, in pixels.
    /// The border is painted within the padding area.
    pub border: u32,

    /// Color of the canvas background.
    pub background_color: Color,
    /// Color of the border around the image.
    pub border_color: Color,
    /// Color of the caption text.
    pub text_color: Color,
    /// Color of the outline around caption glyphs.
    pub text_outline_color: Color,
    /// Width of the outline around caption glyphs, in pixels.
    /// Zero disables the outline.
    ///
    /// Note that the rendering cost grows quadratically with this width.
    pub text_outline_width: u32,

    /// Whether caption texts are converted to uppercase before rendering.
    pub text_uppercase: bool,
    /// Whether the font size is derived from the image width,
    /// overriding `font_size`.
    pub auto_font_size: bool,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config{
            top_text: String::new(),
            bottom_text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_path: None,
            font_data: None,
            padding: DEFAULT_PADDING,
            border: DEFAULT_BORDER,
            background_color: DEFAULT_BACKGROUND_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            text_outline_color: DEFAULT_OUTLINE_COLOR,
            text_outline_width: DEFAULT_OUTLINE_WIDTH,
            text_uppercase: true,
            auto_font_size: true,
        }
    }
}
