//! HTML serializer - turns element trees into HTML text.
//!
//! Output is flat (no added whitespace) and fully determined by the tree:
//!
//! - text is escaped (`&`, `<`, `>`, `"`, `'`)
//! - attributes render in insertion order as `name="value"`, with the
//!   `class` attribute last
//! - void elements close as `<tag />` and never emit children
//!
//! Text inside `script` and `style` is escaped like any other text. HTML
//! parsers read those elements as raw text, so parsing the output back
//! yields the entity references literally (`a&amp;b`, not `a&b`).
//!
//! Serialization cannot fail for any tree the composition API can build.
//! Re-indenting for humans is a separate step, see [`crate::format`].

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::node::{Element, Node};

/// Doctype line emitted at the top of every page.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Render a node to a string.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_node(&mut out, node);
    out
}

/// Render an element to a string.
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    let _ = write_element(&mut out, element);
    out
}

/// Serialize a node into any [`fmt::Write`] sink.
pub fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    Serializer::new(out).write_node(node)
}

/// Serialize an element into any [`fmt::Write`] sink.
pub fn write_element<W: Write>(out: &mut W, element: &Element) -> fmt::Result {
    Serializer::new(out).write_element(element)
}

/// Streaming serializer over a [`fmt::Write`] sink.
///
/// [`Serializer::start_element`] and [`Serializer::end_element`] are exposed
/// so callers can wrap borrowed subtrees in scaffolding without cloning them.
pub struct Serializer<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Serializer<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn write_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Text(text) => write_escaped(&mut *self.out, text),
            Node::Element(element) => self.write_element(element),
        }
    }

    pub fn write_element(&mut self, element: &Element) -> fmt::Result {
        self.start_element(element)?;
        if element.is_void() {
            return Ok(());
        }
        for child in element.children() {
            self.write_node(child)?;
        }
        self.end_element(element)
    }

    /// Emit the opening tag with attributes. Void elements are closed here.
    pub fn start_element(&mut self, element: &Element) -> fmt::Result {
        write!(self.out, "<{}", element.tag())?;

        for (name, value) in element.attributes().iter() {
            self.write_attr(name, value)?;
        }

        let classes = element.classes();
        if !classes.is_empty() {
            // Class names are validated to contain nothing that needs escaping
            write!(self.out, " class=\"{}\"", classes)?;
        }

        if element.is_void() {
            self.out.write_str(" />")
        } else {
            self.out.write_char('>')
        }
    }

    /// Emit the closing tag. Does nothing for void elements.
    pub fn end_element(&mut self, element: &Element) -> fmt::Result {
        if element.is_void() {
            return Ok(());
        }
        write!(self.out, "</{}>", element.tag())
    }

    /// Emit escaped text.
    pub fn write_text(&mut self, text: &str) -> fmt::Result {
        write_escaped(&mut *self.out, text)
    }

    /// Emit markup verbatim.
    pub fn write_raw(&mut self, markup: &str) -> fmt::Result {
        self.out.write_str(markup)
    }

    fn write_attr(&mut self, name: &str, value: &str) -> fmt::Result {
        write!(self.out, " {}=\"", name)?;
        write_escaped(&mut *self.out, value)?;
        self.out.write_char('"')
    }
}

fn replacement(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

fn write_escaped<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        if let Some(rep) = replacement(b) {
            // Escaped bytes are ASCII, so `i` is always a char boundary
            out.write_str(&text[last..i])?;
            out.write_str(rep)?;
            last = i + 1;
        }
    }
    out.write_str(&text[last..])
}

/// Escape the five HTML-significant characters.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use balisage::serialize::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#39;bye&#39;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| replacement(b).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let _ = write_escaped(&mut out, text);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str) -> Element {
        Element::new(tag).unwrap()
    }

    #[test]
    fn test_render_text_escapes() {
        assert_eq!(render(&Node::text("<script>")), "&lt;script&gt;");
        assert_eq!(render(&Node::text("a & b")), "a &amp; b");
        assert_eq!(render(&Node::text("it's")), "it&#39;s");
    }

    #[test]
    fn test_render_empty_element() {
        assert_eq!(el("div").render(), "<div></div>");
    }

    #[test]
    fn test_render_void_element() {
        let br = el("br");
        assert_eq!(br.render(), "<br />");

        let img = el("img")
            .with_attribute("src", "a.png")
            .and_then(|e| e.with_attribute("alt", ""))
            .unwrap();
        assert_eq!(img.render(), r#"<img src="a.png" alt="" />"#);
    }

    #[test]
    fn test_attribute_value_escaped() {
        let a = el("a").with_attribute("title", r#"say "hi""#).unwrap();
        assert_eq!(a.render(), r#"<a title="say &quot;hi&quot;"></a>"#);
    }

    #[test]
    fn test_boolean_attribute_renders_empty_value() {
        let input = el("input").with_attribute("disabled", "").unwrap();
        assert_eq!(input.render(), r#"<input disabled="" />"#);
    }

    #[test]
    fn test_class_rendered_after_attributes() {
        let mut p = el("p");
        p.add_class("lead").unwrap();
        p.set_attribute("id", "intro").unwrap();
        p.add_class("wide").unwrap();
        p.set_attribute("title", "x").unwrap();
        assert_eq!(
            p.render(),
            r#"<p id="intro" title="x" class="lead wide"></p>"#
        );
    }

    #[test]
    fn test_nested_render() {
        let mut ul = el("ul");
        for item in ["one", "two"] {
            ul.add(el("li").with_child(item).unwrap()).unwrap();
        }
        assert_eq!(ul.render(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_display_matches_render() {
        let p = el("p").with_child("x < y").unwrap();
        assert_eq!(p.to_string(), p.render());
        let node = Node::from(p);
        assert_eq!(node.to_string(), node.render());
    }

    #[test]
    fn test_serializer_scaffolding() {
        let body = el("body").with_child("hi").unwrap();
        let html = el("html");
        let mut out = String::new();
        let mut ser = Serializer::new(&mut out);
        ser.write_raw(DOCTYPE).unwrap();
        ser.start_element(&html).unwrap();
        ser.write_element(&body).unwrap();
        ser.end_element(&html).unwrap();
        assert_eq!(out, "<!DOCTYPE html><html><body>hi</body></html>");
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("clean"), Cow::Borrowed(_)));
        assert!(matches!(escape_html("d\u{e9}j\u{e0} <vu>"), Cow::Owned(_)));
        assert_eq!(escape_html("d\u{e9}j\u{e0} <vu>"), "d\u{e9}j\u{e0} &lt;vu&gt;");
    }
}
