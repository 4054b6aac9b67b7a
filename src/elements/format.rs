use crate::node::{Element, Node};

/// Empty `<div>` container.
pub fn div() -> Element {
    Element::known("div")
}

/// Inline `<span>`.
pub fn span(content: impl Into<Node>) -> Element {
    let mut el = Element::known("span");
    el.push(content);
    el
}

/// `<br />`
pub fn line_break() -> Element {
    Element::known("br")
}

/// `<hr />`
pub fn horizontal_rule() -> Element {
    Element::known("hr")
}
