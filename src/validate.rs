//! Pure validation helpers for tag, attribute and class names.
//!
//! All checks are syntactic. Attribute names are checked against the HTML
//! attribute-name production only; there is no whitelist of known
//! attributes, so `data-*`, `aria-*` and custom names are all accepted.
//! Class names are held to a stricter pattern so they stay usable as CSS
//! selectors.

use crate::error::{Error, Result};

/// Elements that never have content and render as `<tag />`.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `tag` is a void element.
///
/// # Examples
///
/// ```
/// use balisage::validate::is_void_tag;
///
/// assert!(is_void_tag("br"));
/// assert!(is_void_tag("IMG"));
/// assert!(!is_void_tag("div"));
/// ```
pub fn is_void_tag(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Tag names start with an ASCII letter followed by letters, digits or hyphens.
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Attribute names are non-empty and free of whitespace, controls,
/// quotes, `>`, `/`, `=` and Unicode noncharacters.
///
/// # Examples
///
/// ```
/// use balisage::validate::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-user-id"));
/// assert!(is_valid_attribute_name("aria-label"));
/// assert!(!is_valid_attribute_name(""));
/// assert!(!is_valid_attribute_name("on click"));
/// assert!(!is_valid_attribute_name("a=b"));
/// ```
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_attribute_name_char)
}

fn is_attribute_name_char(c: char) -> bool {
    !(c.is_whitespace()
        || c.is_control()
        || matches!(c, '"' | '\'' | '>' | '/' | '=')
        || is_noncharacter(c))
}

fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE
}

/// Class names match `-?[_a-zA-Z]+[_a-zA-Z0-9-]*`.
///
/// # Examples
///
/// ```
/// use balisage::validate::is_valid_class_name;
///
/// assert!(is_valid_class_name("btn-primary"));
/// assert!(is_valid_class_name("_private"));
/// assert!(is_valid_class_name("-webkit-thing"));
/// assert!(!is_valid_class_name("2col"));
/// assert!(!is_valid_class_name("has space"));
/// assert!(!is_valid_class_name(""));
/// ```
pub fn is_valid_class_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    // At least one letter or underscore before any digit or hyphen
    let lead_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'_') {
        i += 1;
    }
    if i == lead_start {
        return false;
    }

    bytes[i..]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

pub fn validate_tag_name(name: &str) -> Result<()> {
    if is_valid_tag_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidTagName(name.to_string()))
    }
}

pub fn validate_attribute_name(name: &str) -> Result<()> {
    if is_valid_attribute_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidAttribute(name.to_string()))
    }
}

pub fn validate_class_name(name: &str) -> Result<()> {
    if is_valid_class_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidClassName(name.to_string()))
    }
}

/// Turn free text into a class name: trim, lower-case, spaces to hyphens.
///
/// Returns `None` when the result is still not a valid class name.
///
/// # Examples
///
/// ```
/// use balisage::validate::sanitize_class_name;
///
/// assert_eq!(sanitize_class_name(" Unit Price ").as_deref(), Some("unit-price"));
/// assert_eq!(sanitize_class_name("2024 totals"), None);
/// ```
pub fn sanitize_class_name(name: &str) -> Option<String> {
    let sanitized = name.trim().to_lowercase().replace(' ', "-");
    is_valid_class_name(&sanitized).then_some(sanitized)
}
