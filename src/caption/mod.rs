//! Module implementing demotivator generation.

mod error;
mod generator;
mod layout;
mod task;
mod text;


pub use self::error::CaptionError;
pub use self::generator::{generate_with_text, generate_with_custom_font, Generator};
