//! Arena-backed node tree
//!
//! Nodes live in a [`Tree`] and refer to each other by [`NodeId`]. Every node
//! carries five links:
//!
//! ```text
//!            parent
//!              │
//! previous ── node ── next
//!            ╱    ╲
//!      first_child  last_child
//! ```
//!
//! The children of a node form one doubly-linked list: walking `next` from
//! `first_child` reaches `last_child`, walking `previous` from `last_child`
//! reaches `first_child`, and every member points back at the same parent.
//! The four insertion operations ([`Tree::set_first`], [`Tree::set_last`],
//! [`Tree::set_previous`], [`Tree::set_next`]) preserve that.
//!
//! A node is either a leaf (holds a value, no children) or a parent (has
//! children, no value).

use serde_json::Value;

/// Index of a node in its [`Tree`]. A tree holds at most `u32::MAX + 1`
/// nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id for arena slot `index`, if it fits.
    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(NodeId)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: u32,
    value: Option<Value>,
    parent: Option<NodeId>,
    previous_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
}

impl Node {
    fn new(kind: u32, value: Option<Value>) -> Self {
        Self {
            kind,
            value,
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
        }
    }

    /// The grammar-defined type tag.
    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn previous_sibling(&self) -> Option<NodeId> {
        self.previous_sibling
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn is_parent(&self) -> bool {
        self.first_child.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached leaf.
    ///
    /// # Panics
    ///
    /// When the tree already holds the maximum number of nodes.
    pub fn add_leaf(&mut self, kind: u32, value: impl Into<Value>) -> NodeId {
        self.push(Node::new(kind, Some(value.into())))
    }

    /// Add a detached node that will receive children.
    ///
    /// # Panics
    ///
    /// When the tree already holds the maximum number of nodes.
    pub fn add_parent(&mut self, kind: u32) -> NodeId {
        self.push(Node::new(kind, None))
    }

    /// # Panics
    ///
    /// When `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// A borrowed view of `id` for walking, rendering and serializing.
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub fn is_parent(&self, id: NodeId) -> bool {
        self.node(id).is_parent()
    }

    /// Children of `id`, first to last.
    pub fn children(&self, id: NodeId) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.node(id).first_child,
            forward: true,
        }
    }

    /// Children of `id`, last to first.
    pub fn children_rev(&self, id: NodeId) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.node(id).last_child,
            forward: false,
        }
    }

    /// Insert `child` as the first child of `parent`.
    pub fn set_first(&mut self, parent: NodeId, child: NodeId) {
        match self.node(parent).first_child {
            Some(first) => self.set_previous(first, child),
            None => self.adopt_only_child(parent, child),
        }
    }

    /// Insert `child` as the last child of `parent`.
    pub fn set_last(&mut self, parent: NodeId, child: NodeId) {
        match self.node(parent).last_child {
            Some(last) => self.set_next(last, child),
            None => self.adopt_only_child(parent, child),
        }
    }

    /// Splice `sibling` in immediately before `node`.
    pub fn set_previous(&mut self, node: NodeId, sibling: NodeId) {
        let parent = self.node(node).parent;
        let before = self.node(node).previous_sibling;

        let inserted = self.node_mut(sibling);
        inserted.parent = parent;
        inserted.previous_sibling = before;
        inserted.next_sibling = Some(node);
        self.node_mut(node).previous_sibling = Some(sibling);

        match (before, parent) {
            (Some(before), _) => self.node_mut(before).next_sibling = Some(sibling),
            (None, Some(parent)) => self.node_mut(parent).first_child = Some(sibling),
            (None, None) => {}
        }
    }

    /// Splice `sibling` in immediately after `node`.
    pub fn set_next(&mut self, node: NodeId, sibling: NodeId) {
        let parent = self.node(node).parent;
        let after = self.node(node).next_sibling;

        let inserted = self.node_mut(sibling);
        inserted.parent = parent;
        inserted.previous_sibling = Some(node);
        inserted.next_sibling = after;
        self.node_mut(node).next_sibling = Some(sibling);

        match (after, parent) {
            (Some(after), _) => self.node_mut(after).previous_sibling = Some(sibling),
            (None, Some(parent)) => self.node_mut(parent).last_child = Some(sibling),
            (None, None) => {}
        }
    }

    /// Drop every node from index `len` on.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    fn adopt_only_child(&mut self, parent: NodeId, child: NodeId) {
        let node = self.node_mut(parent);
        node.first_child = Some(child);
        node.last_child = Some(child);
        // A parent never keeps a value.
        node.value = None;

        let child = self.node_mut(child);
        child.parent = Some(parent);
        child.previous_sibling = None;
        child.next_sibling = None;
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let Some(id) = NodeId::from_index(self.nodes.len()) else {
            panic!("node arena is full: {} nodes", self.nodes.len());
        };
        self.nodes.push(node);
        id
    }
}

/// Iterator over a sibling list.
#[derive(Debug, Clone)]
pub struct Siblings<'t> {
    tree: &'t Tree,
    next: Option<NodeId>,
    forward: bool,
}

impl<'t> Iterator for Siblings<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.node(id);
        self.next = if self.forward {
            node.next_sibling
        } else {
            node.previous_sibling
        };
        Some(self.tree.get(id))
    }
}

/// A node together with the tree it lives in.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    pub fn node(&self) -> &'t Node {
        self.tree.node(self.id)
    }

    pub fn kind(&self) -> u32 {
        self.node().kind
    }

    pub fn value(&self) -> Option<&'t Value> {
        self.node().value.as_ref()
    }

    pub fn is_parent(&self) -> bool {
        self.node().is_parent()
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node().parent.map(|id| self.tree.get(id))
    }

    pub fn children(&self) -> Siblings<'t> {
        self.tree.children(self.id)
    }
}
