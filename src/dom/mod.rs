//! Parse HTML text back into element trees.
//!
//! Parsing goes through html5ever, so any input a browser accepts yields a
//! tree; missing `html`, `head` and `body` elements are supplied and
//! misnested markup is repaired the standard way. Comments, doctypes and
//! processing instructions are dropped.
//!
//! Attributes pass through the same checks as the builder API, with `class`
//! split into the class list. A name the builder would reject fails the
//! parse with the matching error.
//!
//! ```
//! use balisage::dom::parse_fragment;
//!
//! let nodes = parse_fragment(r#"<p class="lead">Hello <b>there</b></p>"#)?;
//! let p = nodes[0].as_element().unwrap();
//! assert!(p.has_class("lead"));
//! assert_eq!(p.text_content(), "Hello there");
//! # Ok::<(), balisage::Error>(())
//! ```

mod arena;
mod tree_sink;

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;

use crate::error::Result;
use crate::node::{Element, Node};
use arena::{Arena, NodeData, NodeId};
use tree_sink::ArenaSink;

/// Parse a complete document and return its `<html>` element.
pub fn parse_document(html: &str) -> Result<Element> {
    let arena = parse_arena(html);
    match arena.child_element(arena.document(), "html") {
        Some(root) => convert_element(&arena, root),
        // The tree builder always creates the root; an empty one is the
        // closest answer if it ever does not
        None => Ok(Element::known("html")),
    }
}

/// Parse a fragment and return the nodes that end up in `<body>`.
///
/// Content the parser places in `<head>` (a stray `<title>`, say) is not
/// part of the result.
pub fn parse_fragment(html: &str) -> Result<Vec<Node>> {
    let arena = parse_arena(html);
    let body = arena
        .child_element(arena.document(), "html")
        .and_then(|root| arena.child_element(root, "body"));

    match body {
        Some(body) => convert_children(&arena, body),
        None => Ok(Vec::new()),
    }
}

fn parse_arena(html: &str) -> Arena {
    let arena = html5ever::parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_arena();
    log::trace!("Parsed {} bytes into {} arena nodes", html.len(), arena.len());
    arena
}

fn convert_children(arena: &Arena, parent: NodeId) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for child in arena.children(parent) {
        let Some(node) = arena.get(child) else {
            continue;
        };
        match &node.data {
            NodeData::Element { .. } => nodes.push(Node::Element(convert_element(arena, child)?)),
            NodeData::Text(text) => nodes.push(Node::Text(text.clone())),
            NodeData::Document | NodeData::Ignored => {}
        }
    }
    Ok(nodes)
}

fn convert_element(arena: &Arena, id: NodeId) -> Result<Element> {
    let Some(NodeData::Element { name, attrs }) = arena.get(id).map(|n| &n.data) else {
        return Ok(Element::known("html"));
    };

    let mut element = Element::new(&*name.local)?;
    for (attr, value) in attrs {
        element.set_attribute(attr.as_str(), value.as_str())?;
    }

    let children = convert_children(arena, id)?;
    if !children.is_empty() {
        element.add_all(children)?;
    }
    Ok(element)
}
