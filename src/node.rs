//! Element tree: nodes, elements and the composition API.
//!
//! A [`Node`] is either an [`Element`] or a run of text. Elements own their
//! children outright; there are no parent links, so a tree is always built
//! top-down by moving finished subtrees into their parent.
//!
//! Every mutation validates its input before touching the element. A failed
//! call leaves the element exactly as it was.

use std::fmt;
use std::path::Path;

use crate::attributes::{Attributes, ClassList};
use crate::error::{Error, Result};
use crate::serialize;
use crate::util;
use crate::validate::{is_void_tag, validate_tag_name};

/// A node in the element tree.
///
/// Anything that can become a child converts into `Node`: string slices and
/// strings become text, elements are wrapped as-is.
///
/// ```
/// use balisage::{Node, paragraph};
///
/// let text: Node = "plain".into();
/// let element: Node = paragraph("hello").into();
/// assert!(text.is_text());
/// assert!(element.is_element());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text, escaped when rendered.
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Render to an HTML string.
    pub fn render(&self) -> String {
        serialize::render(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&String> for Node {
    fn from(text: &String) -> Self {
        Node::Text(text.clone())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize::write_node(f, self)
    }
}

/// An HTML element: tag, attributes, classes and ordered children.
///
/// Void elements (`br`, `img`, `link`, ...) are recognised from the tag and
/// reject children at the point they are added.
///
/// ```
/// use balisage::Element;
///
/// let mut nav = Element::new("nav")?;
/// nav.set_attribute("id", "top")?
///     .add_class("menu")?
///     .add("Home")?;
/// assert_eq!(nav.render(), r#"<nav id="top" class="menu">Home</nav>"#);
/// # Ok::<(), balisage::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    classes: ClassList,
    children: Vec<Node>,
    void: bool,
}

impl Element {
    /// Create an element, lower-casing and validating the tag name.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into().to_ascii_lowercase();
        validate_tag_name(&tag)?;
        Ok(Self::with_tag(tag))
    }

    /// Create an element from a tag known to be valid.
    pub(crate) fn known(tag: &'static str) -> Self {
        debug_assert!(crate::validate::is_valid_tag_name(tag));
        Self::with_tag(tag.to_string())
    }

    fn with_tag(tag: String) -> Self {
        let void = is_void_tag(&tag);
        Self {
            tag,
            attributes: Attributes::new(),
            classes: ClassList::new(),
            children: Vec::new(),
            void,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to existing children. The child count cannot change
    /// through this slice; use [`Element::add`] and friends for that.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    // --- Attributes ---

    /// Look up an explicitly set attribute. Classes live in [`Element::classes`].
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute, overwriting any previous value.
    ///
    /// Names are case-insensitive and stored lower-cased. Setting `class`
    /// (in any case) replaces the class list with the whitespace-separated
    /// names in `value`, each validated as a class name.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let name = name.into().to_ascii_lowercase();
        if name == "class" {
            let value: String = value.into();
            self.classes = ClassList::parse(&value)?;
        } else {
            self.attributes.set(name, value)?;
        }
        Ok(self)
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        self.set_attribute(name, value)?;
        Ok(self)
    }

    /// Remove an attribute, returning its value. Removing `class` clears the
    /// class list and returns it joined.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        if name.eq_ignore_ascii_case("class") {
            if self.classes.is_empty() {
                return None;
            }
            let joined = self.classes.to_string();
            self.classes.clear();
            return Some(joined);
        }
        self.attributes.remove(name)
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    // --- Classes ---

    /// Add a class. Adding a class that is already present does nothing.
    pub fn add_class(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.classes.add(name)?;
        Ok(self)
    }

    pub fn with_class(mut self, name: impl Into<String>) -> Result<Self> {
        self.add_class(name)?;
        Ok(self)
    }

    /// Replace all classes. The list is untouched if any name is invalid.
    pub fn set_classes<I, S>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes = ClassList::new();
        classes.extend(names)?;
        self.classes = classes;
        Ok(self)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn remove_class(&mut self, name: &str) -> bool {
        self.classes.remove(name)
    }

    pub fn clear_classes(&mut self) {
        self.classes.clear();
    }

    // --- Children ---

    /// Append a child. Strings become text nodes.
    ///
    /// Fails with [`Error::VoidElement`] on void elements.
    pub fn add(&mut self, child: impl Into<Node>) -> Result<&mut Self> {
        self.ensure_not_void()?;
        self.children.push(child.into());
        Ok(self)
    }

    /// Append several children. On a void element nothing is added unless
    /// the input is empty.
    pub fn add_all<I, C>(&mut self, children: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        let children: Vec<Node> = children.into_iter().map(Into::into).collect();
        if !children.is_empty() {
            self.ensure_not_void()?;
        }
        self.children.extend(children);
        Ok(self)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Result<Self> {
        self.add(child)?;
        Ok(self)
    }

    pub fn with_children<I, C>(mut self, children: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.add_all(children)?;
        Ok(self)
    }

    /// Insert a child at `index`, shifting later children right.
    pub fn insert(&mut self, index: usize, child: impl Into<Node>) -> Result<&mut Self> {
        self.ensure_not_void()?;
        if index > self.children.len() {
            return Err(Error::ChildIndex {
                index,
                len: self.children.len(),
            });
        }
        self.children.insert(index, child.into());
        Ok(self)
    }

    /// Replace the child at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, child: impl Into<Node>) -> Result<Node> {
        self.ensure_not_void()?;
        let len = self.children.len();
        let slot = self
            .children
            .get_mut(index)
            .ok_or(Error::ChildIndex { index, len })?;
        Ok(std::mem::replace(slot, child.into()))
    }

    pub fn remove(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.children.pop()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Append without the void check, for constructors whose tag is known
    /// to accept content.
    pub(crate) fn push(&mut self, child: impl Into<Node>) {
        debug_assert!(!self.void);
        self.children.push(child.into());
    }

    fn ensure_not_void(&self) -> Result<()> {
        if self.void {
            return Err(Error::VoidElement(self.tag.clone()));
        }
        Ok(())
    }

    // --- Output ---

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Render to an HTML string.
    pub fn render(&self) -> String {
        serialize::render_element(self)
    }

    /// Render and write to `path` as UTF-8, creating or truncating the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        util::write_document(path.as_ref(), &self.render(), encoding_rs::UTF_8)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize::write_element(f, self)
    }
}
