//! Encoding and file output helpers.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Resolve a WHATWG encoding label (`"utf-8"`, `"latin1"`, `"windows-1252"`, ...).
///
/// # Examples
///
/// ```
/// use balisage::util::encoding_for_label;
///
/// assert_eq!(encoding_for_label("UTF-8").unwrap().name(), "UTF-8");
/// assert_eq!(encoding_for_label("latin1").unwrap().name(), "windows-1252");
/// assert!(encoding_for_label("klingon").is_err());
/// ```
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Resolve a label to an encoding a document can be saved in.
///
/// Labels resolving to UTF-16 or the replacement encoding are rejected:
/// an encoder writes UTF-8 for those, so the declared charset would not
/// match the bytes on disk.
///
/// ```
/// use balisage::util::output_encoding_for_label;
///
/// assert_eq!(output_encoding_for_label("latin1").unwrap().name(), "windows-1252");
/// assert!(output_encoding_for_label("iso-2022-kr").is_err());
/// assert!(output_encoding_for_label("utf-16le").is_err());
/// ```
pub fn output_encoding_for_label(label: &str) -> Result<&'static Encoding> {
    let encoding = encoding_for_label(label)?;
    if encoding.output_encoding() != encoding {
        log::debug!(
            "Charset {label:?} resolves to {}, which cannot be written",
            encoding.name()
        );
        return Err(Error::UnknownEncoding(label.to_string()));
    }
    Ok(encoding)
}

/// Encode text for output.
///
/// Characters the target encoding cannot represent are written as HTML
/// numeric character references (`&#8364;`), so the document still reads
/// correctly. UTF-16 and the replacement encoding fall back to UTF-8; see
/// [`output_encoding_for_label`].
pub fn encode_text<'a>(text: &'a str, encoding: &'static Encoding) -> Cow<'a, [u8]> {
    let (bytes, used, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        log::debug!(
            "Replaced unmappable characters with character references for {}",
            used.name()
        );
    }
    bytes
}

/// Write a rendered document to `path`, creating or truncating the file.
///
/// The file handle lives only for the duration of this call and is closed
/// on every return path.
pub(crate) fn write_document(path: &Path, html: &str, encoding: &'static Encoding) -> Result<()> {
    let bytes = encode_text(html, encoding);

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    log::debug!(
        "Saved {} bytes of {} to {}",
        bytes.len(),
        encoding.name(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_utf8_borrows() {
        let bytes = encode_text("caf\u{e9}", encoding_rs::UTF_8);
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(&*bytes, "caf\u{e9}".as_bytes());
    }

    #[test]
    fn test_encode_windows_1252() {
        let bytes = encode_text("caf\u{e9}", encoding_rs::WINDOWS_1252);
        assert_eq!(&*bytes, b"caf\xe9");
    }

    #[test]
    fn test_encode_unmappable_uses_character_reference() {
        let bytes = encode_text("\u{2603}", encoding_rs::WINDOWS_1252);
        assert_eq!(&*bytes, b"&#9731;");
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(
            encoding_for_label("no-such-charset"),
            Err(Error::UnknownEncoding(label)) if label == "no-such-charset"
        ));
    }

    #[test]
    fn test_output_encoding_rejects_non_writable() {
        for label in ["iso-2022-kr", "replacement", "utf-16", "UTF-16BE"] {
            assert!(
                matches!(output_encoding_for_label(label), Err(Error::UnknownEncoding(_))),
                "{label}"
            );
        }
        assert_eq!(output_encoding_for_label(" utf8 ").unwrap(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_write_document_missing_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.html");
        let err = write_document(&path, "<p></p>", encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
