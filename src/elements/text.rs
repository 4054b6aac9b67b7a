use crate::node::{Element, Node};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// `<hN>` heading. Levels outside `1..=6` are clamped.
///
/// ```
/// use balisage::elements::heading;
///
/// assert_eq!(heading(3, "Usage").render(), "<h3>Usage</h3>");
/// assert_eq!(heading(9, "Deep").tag(), "h6");
/// ```
pub fn heading(level: u8, content: impl Into<Node>) -> Element {
    let index = usize::from(level.clamp(1, 6)) - 1;
    let mut el = Element::known(HEADING_TAGS[index]);
    el.push(content);
    el
}

pub fn heading1(content: impl Into<Node>) -> Element {
    heading(1, content)
}

pub fn heading2(content: impl Into<Node>) -> Element {
    heading(2, content)
}

pub fn heading3(content: impl Into<Node>) -> Element {
    heading(3, content)
}

pub fn heading4(content: impl Into<Node>) -> Element {
    heading(4, content)
}

pub fn heading5(content: impl Into<Node>) -> Element {
    heading(5, content)
}

pub fn heading6(content: impl Into<Node>) -> Element {
    heading(6, content)
}

/// `<p>` paragraph.
pub fn paragraph(content: impl Into<Node>) -> Element {
    let mut el = Element::known("p");
    el.push(content);
    el
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading1("a").render(), "<h1>a</h1>");
        assert_eq!(heading4("d").tag(), "h4");
        assert_eq!(heading6("f").tag(), "h6");
    }

    #[test]
    fn test_heading_clamps_level() {
        assert_eq!(heading(0, "x").tag(), "h1");
        assert_eq!(heading(7, "x").tag(), "h6");
    }

    #[test]
    fn test_paragraph_escapes_text() {
        assert_eq!(paragraph("1 < 2").render(), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn test_paragraph_accepts_element() {
        let mut inner = Element::new("em").unwrap();
        inner.add("hi").unwrap();
        assert_eq!(paragraph(inner).render(), "<p><em>hi</em></p>");
    }
}
