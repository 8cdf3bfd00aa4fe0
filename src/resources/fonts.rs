//! Module for loading the fonts used to render captions.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rusttype::{self, FontCollection};

use super::filesystem::{self, MAX_FONT_FILE_SIZE};


pub const FILE_EXTENSION: &'static str = "ttf";


/// Font that captions are rendered with.
macro_attr! {
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font(...)")
    }
}


// Embedded fonts

static DEJAVU_SANS_TTF: &'static [u8] =
    include_bytes!("../../data/fonts/DejaVuSans.ttf");
static DEJAVU_SANS_BOLD_TTF: &'static [u8] =
    include_bytes!("../../data/fonts/DejaVuSans-Bold.ttf");

lazy_static! {
    /// Fonts embedded in the library, keyed by name.
    pub static ref BUILTIN_FONTS: HashMap<&'static str, &'static [u8]> = hashmap!{
        "regular" => DEJAVU_SANS_TTF,
        "bold" => DEJAVU_SANS_BOLD_TTF,
    };
}

/// Return the data of an embedded font with given name, if it exists.
pub fn builtin_font(name: &str) -> Option<&'static [u8]> {
    BUILTIN_FONTS.get(name).map(|bytes| *bytes)
}


/// Parse font data into a usable `Font`.
///
/// This is the authoritative validity check for font bytes;
/// the signature sniffing done when loading files is only advisory.
pub(crate) fn parse_font(bytes: Vec<u8>) -> Result<Font, FontError> {
    let fonts: Vec<_> = FontCollection::from_bytes(bytes).into_fonts().collect();
    match fonts.len() {
        0 => {
            error!("Alleged font data contains no fonts");
            Err(FontError::Parse("no fonts found in the data".into()))
        }
        1 => {
            debug!("Font parsed successfully");
            Ok(fonts.into_iter().next().unwrap().into())
        }
        count => {
            error!("Font data contains {} fonts, expected one", count);
            Err(FontError::Parse(
                format!("expected a single font, found {}", count)))
        }
    }
}

/// Check that the file at given path can be used as a caption font.
///
/// Unlike the advisory signature sniffing, this parses the complete
/// font data, so a file that passes here will render.
pub fn validate_font_file<P: AsRef<Path>>(path: P) -> Result<(), FontError> {
    let bytes = filesystem::load_font_file(path)?;
    parse_font(bytes).map(|_| ())
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// Font file does not exist.
    Missing(PathBuf),
    /// Font file could not be read.
    Access(PathBuf, io::Error),
    /// Font file is empty.
    Empty(PathBuf),
    /// Font file exceeds the size limit.
    TooLarge(PathBuf, u64),
    /// Font file is too small to possibly be a font.
    TooSmall(PathBuf, usize),
    /// Font data could not be parsed.
    Parse(String),
    /// A render face could not be created from the font.
    Face(f32),
}

impl Error for FontError {
    fn description(&self) -> &str { "font loading error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            FontError::Access(_, ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::Missing(ref p) =>
                write!(fmt, "font file {} does not exist", p.display()),
            FontError::Access(ref p, ref e) =>
                write!(fmt, "cannot read font file {}: {}", p.display(), e),
            FontError::Empty(ref p) =>
                write!(fmt, "font file {} is empty", p.display()),
            FontError::TooLarge(ref p, size) =>
                write!(fmt, "font file {} is too large: {} > {} bytes",
                    p.display(), size, MAX_FONT_FILE_SIZE),
            FontError::TooSmall(ref p, size) =>
                write!(fmt, "font file {} is too small to be a font: {} byte(s)",
                    p.display(), size),
            FontError::Parse(ref detail) =>
                write!(fmt, "cannot parse font data: {}", detail),
            FontError::Face(size) =>
                write!(fmt, "cannot create a render face of size {}", size),
        }
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::{builtin_font, parse_font, FontError, BUILTIN_FONTS};

    #[test]
    fn builtin_fonts_are_known() {
        assert_that!(BUILTIN_FONTS.len()).is_equal_to(2);
        assert_that!(builtin_font("regular")).is_some();
        assert_that!(builtin_font("bold")).is_some();
        assert_that!(builtin_font("comic-sans")).is_none();
    }

    #[test]
    fn parse_builtin() {
        let bytes = builtin_font("bold").unwrap().to_vec();
        assert_that!(parse_font(bytes)).is_ok();
    }

    #[test]
    fn parse_garbage() {
        let result = parse_font(b"definitely not a font".to_vec());
        match result {
            Err(FontError::Parse(..)) => {}
            other => panic!("expected a parse error, got {:?}",
                other.map(|_| "a font")),
        }
    }
}
