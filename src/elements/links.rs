use crate::node::{Element, Node};

/// `<a href="..">` wrapping `content`.
pub fn hyperlink(href: impl Into<String>, content: impl Into<Node>) -> Element {
    let mut el = Element::known("a");
    let _ = el.set_attribute("href", href);
    el.push(content);
    el
}

/// `<link rel="stylesheet" href=".." />` for the document head.
pub fn stylesheet_link(href: impl Into<String>) -> Element {
    let mut el = Element::known("link");
    let _ = el.set_attribute("rel", "stylesheet");
    let _ = el.set_attribute("href", href);
    el
}
