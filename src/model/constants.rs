//! Module defining constants relevant to the data model.

use super::color::Color;


/// Name of the default (embedded) font.
pub const DEFAULT_FONT: &'static str = "bold";

/// Default size of the caption text, in points.
pub const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Default width of the empty canvas area around the image, in pixels.
pub const DEFAULT_PADDING: u32 = 80;
/// Default thickness of the border drawn around the image, in pixels.
pub const DEFAULT_BORDER: u32 = 10;

/// Default color of the canvas background.
pub const DEFAULT_BACKGROUND_COLOR: Color = Color(0x0, 0x0, 0x0);
/// Default color of the border around the image.
pub const DEFAULT_BORDER_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Default color of the caption text.
pub const DEFAULT_TEXT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Default color of the text outline.
/// This should be the inversion of DEFAULT_TEXT_COLOR.
pub const DEFAULT_OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Default width of the outline around caption glyphs, in pixels.
pub const DEFAULT_OUTLINE_WIDTH: u32 = 6;
