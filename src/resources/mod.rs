//! Module handling the font resources used for captioning.

mod filesystem;
mod fonts;


pub use self::filesystem::{MAX_FONT_FILE_SIZE, MIN_FONT_FILE_SIZE};
pub use self::fonts::{builtin_font, validate_font_file,
                      Font, FontError, BUILTIN_FONTS,
                      FILE_EXTENSION as FONT_FILE_EXTENSION};

pub(crate) use self::filesystem::load_font_file;
pub(crate) use self::fonts::parse_font;
