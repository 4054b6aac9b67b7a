//! Arena tree that html5ever parses into.
//!
//! html5ever addresses nodes by handle and rearranges them freely while
//! recovering from bad markup, so parsing goes into a flat arena with index
//! links first. The finished arena is then converted into owned
//! [`Element`](crate::Element) trees.

use html5ever::QualName;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for a missing link.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element {
        // Boxed so references handed to the tree builder survive arena growth
        name: Box<QualName>,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    /// Comments, doctypes and processing instructions. Kept as placeholders
    /// so the tree builder can still address them, skipped on conversion.
    Ignored,
}

#[derive(Debug)]
pub struct ArenaNode {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl ArenaNode {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Flat node storage with parent, child and sibling links.
#[derive(Debug)]
pub struct Arena {
    nodes: Vec<ArenaNode>,
    document: NodeId,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        arena.document = arena.alloc(NodeData::Document);
        arena
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ArenaNode::new(data));
        id
    }

    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<(String, String)>) -> NodeId {
        self.alloc(NodeData::Element {
            name: Box::new(name),
            attrs,
        })
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Text(text))
    }

    pub fn create_ignored(&mut self) -> NodeId {
        self.alloc(NodeData::Ignored)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last_child;
            node.next_sibling = NodeId::NONE;
        }
        if let Some(last) = self.get_mut(last_child) {
            last.next_sibling = child;
        }
        if let Some(parent) = self.get_mut(parent) {
            if parent.first_child.is_none() {
                parent.first_child = child;
            }
            parent.last_child = child;
        }
    }

    /// Insert `node` directly before `sibling`, under the same parent.
    pub fn insert_before(&mut self, sibling: NodeId, node: NodeId) {
        let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) else {
            return;
        };

        if let Some(new) = self.get_mut(node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }
        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = node;
        }
        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = node;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = node;
        }
    }

    /// Append text to `parent`, merging with a trailing text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);
        if let Some(ArenaNode {
            data: NodeData::Text(existing),
            ..
        }) = self.get_mut(last_child)
        {
            existing.push_str(text);
            return;
        }

        let node = self.create_text(text.to_string());
        self.append(parent, node);
    }

    /// Insert text before `sibling`, merging with a preceding text node.
    pub fn insert_text_before(&mut self, sibling: NodeId, text: &str) {
        let prev = self.get(sibling).map_or(NodeId::NONE, |n| n.prev_sibling);
        if let Some(ArenaNode {
            data: NodeData::Text(existing),
            ..
        }) = self.get_mut(prev)
        {
            existing.push_str(text);
            return;
        }

        let node = self.create_text(text.to_string());
        self.insert_before(sibling, node);
    }

    /// Unlink a node from its parent and siblings. The node stays in the
    /// arena and can be attached elsewhere.
    pub fn detach(&mut self, id: NodeId) {
        let Some((parent, prev, next)) = self
            .get(id)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            arena: self,
            current: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Local name of an element node.
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    /// First child element of `parent` with the given local name.
    pub fn child_element(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&child| self.element_name(child) == Some(tag))
    }
}

pub struct Children<'a> {
    arena: &'a Arena,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.arena.get(id).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(id)
    }
}
