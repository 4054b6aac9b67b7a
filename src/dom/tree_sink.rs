//! html5ever TreeSink that builds an [`Arena`].

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{Arena, NodeData, NodeId};

/// Handle the tree builder uses to address arena nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub NodeId);

/// TreeSink over an [`Arena`].
///
/// html5ever's TreeSink methods take `&self`, so the arena sits behind a
/// RefCell.
pub struct ArenaSink {
    arena: RefCell<Arena>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            arena: RefCell::new(Arena::new()),
        }
    }

    pub fn into_arena(self) -> Arena {
        self.arena.into_inner()
    }
}

/// Attribute names as written in markup, with any namespace prefix.
fn convert_attrs(attrs: Vec<Html5Attribute>) -> Vec<(String, String)> {
    attrs
        .into_iter()
        .map(|attr| {
            let name = match &attr.name.prefix {
                Some(prefix) => format!("{}:{}", prefix, attr.name.local),
                None => attr.name.local.to_string(),
            };
            (name, attr.value.to_string())
        })
        .collect()
}

impl TreeSink for ArenaSink {
    type Handle = Handle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        // Recover like a browser would
        log::trace!("HTML parse error: {msg}");
    }

    fn get_document(&self) -> Self::Handle {
        Handle(self.arena.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let arena = self.arena.borrow();
        match arena.get(target.0).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => {
                let name: &QualName = name;
                // SAFETY: names are boxed and nodes are never removed from the
                // arena, so the QualName stays at this address for as long as
                // the sink lives. The RefCell guard only hides that lifetime.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = convert_attrs(attrs);
        Handle(self.arena.borrow_mut().create_element(name, attrs))
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        log::trace!("Dropping comment ({} bytes)", text.len());
        Handle(self.arena.borrow_mut().create_ignored())
    }

    fn create_pi(&self, target: StrTendril, _data: StrTendril) -> Self::Handle {
        log::trace!("Dropping processing instruction {target:?}");
        Handle(self.arena.borrow_mut().create_ignored())
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => arena.append(parent.0, node.0),
            NodeOrText::AppendText(text) => arena.append_text(parent.0, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self
            .arena
            .borrow()
            .get(element.0)
            .is_some_and(|n| n.parent.is_some());

        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        log::trace!("Dropping doctype {name:?}");
        let mut arena = self.arena.borrow_mut();
        let doctype = arena.create_ignored();
        let document = arena.document();
        arena.append(document, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template content is parsed straight into the template element
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => arena.insert_before(sibling.0, node.0),
            NodeOrText::AppendText(text) => arena.insert_text_before(sibling.0, &text),
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut arena = self.arena.borrow_mut();
        if let Some(node) = arena.get_mut(target.0)
            && let NodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for (name, value) in convert_attrs(attrs) {
                if !existing.iter().any(|(n, _)| *n == name) {
                    existing.push((name, value));
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.arena.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut arena = self.arena.borrow_mut();
        let children: Vec<NodeId> = arena.children(node.0).collect();
        for child in children {
            arena.detach(child);
            arena.append(new_parent.0, child);
        }
    }
}
