//! Module implementing the loading of font files.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use super::fonts::FontError;


/// Maximum size of a font file we are willing to load, in bytes.
pub const MAX_FONT_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Minimum size of a font file, in bytes.
/// Files smaller than this cannot even carry a font signature.
pub const MIN_FONT_FILE_SIZE: usize = 4;


/// Load the content of a font file, validating it along the way.
///
/// The validation is limited to what can be told without parsing the data:
/// the file has to exist, be readable, and of sensible size.
/// An unrecognized TTF/OTF signature is merely logged;
/// the authoritative check is the parsing step that follows.
pub(crate) fn load_font_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FontError> {
    let path = path.as_ref();

    let stat = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FontError::Missing(path.to_owned())
        } else {
            error!("Failed to stat font file {}: {}", path.display(), e);
            FontError::Access(path.to_owned(), e)
        }
    })?;
    if stat.len() == 0 {
        return Err(FontError::Empty(path.to_owned()));
    }
    if stat.len() > MAX_FONT_FILE_SIZE {
        return Err(FontError::TooLarge(path.to_owned(), stat.len()));
    }

    trace!("Reading font file {} ({} byte(s))", path.display(), stat.len());
    let file = fs::File::open(path).map_err(|e| {
        error!("Failed to open font file {}: {}", path.display(), e);
        FontError::Access(path.to_owned(), e)
    })?;
    let mut bytes = Vec::with_capacity(stat.len() as usize);
    let mut reader = BufReader::new(file);
    reader.read_to_end(&mut bytes).map_err(|e| {
        error!("Failed to read content of font file {}: {}", path.display(), e);
        FontError::Access(path.to_owned(), e)
    })?;

    if bytes.len() < MIN_FONT_FILE_SIZE {
        return Err(FontError::TooSmall(path.to_owned(), bytes.len()));
    }
    if !has_font_signature(&bytes) {
        // Unusual but possibly valid container; let the parser decide.
        warn!("Font file {} has an unrecognized signature, parsing anyway",
            path.display());
    }

    Ok(bytes)
}

/// Check whether the bytes start with a known TTF/OTF signature.
fn has_font_signature(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && (
        bytes[..4] == [0x00, 0x01, 0x00, 0x00]  // TrueType
        || &bytes[..4] == b"OTTO"               // OpenType with CFF outlines
        || &bytes[..4] == b"true"               // legacy Apple TrueType
    )
}


#[cfg(test)]
mod tests {
    use std::env;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process;

    use spectral::prelude::*;

    use resources::FontError;
    use super::{has_font_signature, load_font_file};

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = env::temp_dir()
            .join(format!("demotive-fs-test-{}-{}", process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("demotive-no-such-font.ttf");
        match load_font_file(&path) {
            Err(FontError::Missing(p)) => assert_eq!(path, p),
            other => panic!("expected a missing-file error, got {:?}",
                other.map(|b| b.len())),
        }
    }

    #[test]
    fn empty_file() {
        let path = temp_file("empty.ttf", b"");
        match load_font_file(&path) {
            Err(FontError::Empty(..)) => {}
            other => panic!("expected an empty-file error, got {:?}",
                other.map(|b| b.len())),
        }
    }

    #[test]
    fn tiny_file() {
        let path = temp_file("tiny.ttf", b"ab");
        match load_font_file(&path) {
            Err(FontError::TooSmall(_, 2)) => {}
            other => panic!("expected a too-small error, got {:?}",
                other.map(|b| b.len())),
        }
    }

    #[test]
    fn unrecognized_signature_still_loads() {
        // Signature sniffing is advisory; the bytes come back regardless.
        let path = temp_file("odd.ttf", b"wotf rest of the data");
        assert_that!(load_font_file(&path)).is_ok();
    }

    #[test]
    fn known_signatures() {
        assert!(has_font_signature(b"\x00\x01\x00\x00rest"));
        assert!(has_font_signature(b"OTTOrest"));
        assert!(has_font_signature(b"truerest"));
        assert!(!has_font_signature(b"wOF2"));
        assert!(!has_font_signature(b"ab"));
    }
}
