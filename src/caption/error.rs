//! Captioning error.

use std::error::Error;
use std::fmt;

use resources::FontError;


/// Error that may occur during demotivator generation.
#[derive(Debug)]
pub enum CaptionError {
    /// Failure to load or instantiate the caption font.
    Font(FontError),
}

impl Error for CaptionError {
    fn description(&self) -> &str { "captioning error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            CaptionError::Font(ref e) => Some(e),
        }
    }
}

impl fmt::Display for CaptionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CaptionError::Font(ref e) => write!(fmt, "cannot load font: {}", e),
        }
    }
}

impl From<FontError> for CaptionError {
    fn from(input: FontError) -> Self {
        CaptionError::Font(input)
    }
}
