//! Persistence tests.
//!
//! Pages and elements written to disk: encodings, overwriting, failures.

use std::fs;

use balisage::{Error, Indenter, Page, heading1, paragraph};
use tempfile::TempDir;

fn sample_page() -> Page {
    let mut page = Page::new("Caf\u{e9}").with_stylesheet("style.css");
    page.add(heading1("Men\u{fc}")).unwrap();
    page.add(paragraph("Snow \u{2603} and euro \u{20ac}")).unwrap();
    page
}

#[test]
fn test_save_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.html");

    let page = sample_page();
    page.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), page.render());
}

#[test]
fn test_save_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");

    let page = sample_page();
    page.save(&first).unwrap();
    page.save(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, "x".repeat(10_000)).unwrap();

    Page::new("Short").save(&path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.ends_with("</html>"));
}

#[test]
fn test_save_windows_1252() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.html");

    let page = sample_page().with_charset("windows-1252");
    page.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let as_text = String::from_utf8_lossy(&bytes);
    assert!(as_text.contains("<meta charset=\"windows-1252\" />"));
    // é and ü as single bytes, the euro sign as 0x80
    assert!(bytes.windows(4).any(|w| w == b"Caf\xe9"));
    assert!(bytes.windows(4).any(|w| w == b"Men\xfc"));
    assert!(bytes.contains(&0x80));
    // The snowman has no windows-1252 byte
    assert!(as_text.contains("&#9731;"));
}

#[test]
fn test_save_formatted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pretty.html");

    let page = sample_page().with_formatter(Indenter::default());
    page.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\n  <body>\n"));
    assert_eq!(written, page.render());
}

#[test]
fn test_unknown_encoding_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.html");

    let page = Page::new("T").with_charset("x-martian");
    let err = page.save(&path).unwrap_err();

    assert!(matches!(err, Error::UnknownEncoding(label) if label == "x-martian"));
    assert!(!path.exists());
}

#[test]
fn test_non_writable_charset_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.html");

    for label in ["iso-2022-kr", "utf-16le"] {
        let err = Page::new("caf\u{e9}").with_charset(label).save(&path).unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(l) if l == label));
        assert!(!path.exists());
    }
}

#[test]
fn test_save_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("dir.html");

    let err = Page::new("T").save(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_element_save_is_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fragment.html");

    let p = paragraph("na\u{ef}ve");
    p.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<p>na\u{ef}ve</p>");
}
