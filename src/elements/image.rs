use crate::node::Element;

/// `<img src=".." alt=".." />`
///
/// Both attributes are always present; an empty `alt` marks the image as
/// decorative.
pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Element {
    let mut el = Element::known("img");
    // Fixed, valid attribute names
    let _ = el.set_attribute("src", src);
    let _ = el.set_attribute("alt", alt);
    el
}
