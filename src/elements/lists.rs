//! List constructors. Nothing stops non-`li` children from being added to a
//! list; the tree accepts whatever the caller builds.

use crate::node::{Element, Node};

/// Empty `<ol>`.
pub fn ordered_list() -> Element {
    Element::known("ol")
}

/// Empty `<ul>`.
pub fn unordered_list() -> Element {
    Element::known("ul")
}

/// `<li>` holding `content`.
pub fn list_item(content: impl Into<Node>) -> Element {
    let mut el = Element::known("li");
    el.push(content);
    el
}

/// `<ol>` with every item wrapped in `<li>`.
///
/// ```
/// use balisage::elements::ordered_list_of;
///
/// let steps = ordered_list_of(["Mix", "Bake"]);
/// assert_eq!(steps.render(), "<ol><li>Mix</li><li>Bake</li></ol>");
/// ```
pub fn ordered_list_of<I, C>(items: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Node>,
{
    fill(ordered_list(), items)
}

/// `<ul>` with every item wrapped in `<li>`.
pub fn unordered_list_of<I, C>(items: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Node>,
{
    fill(unordered_list(), items)
}

fn fill<I, C>(mut list: Element, items: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Node>,
{
    for item in items {
        list.push(list_item(item));
    }
    list
}
