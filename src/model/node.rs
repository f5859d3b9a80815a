//! Node module for the ownership tree.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a [GenTree](crate::model::GenTree).
///
/// A node owns its payload and refers to its relatives by [NodeIndex]:
/// - **parent**: `None` for the root, otherwise the index of the parent
///   (a non-owning back-reference)
/// - **children**: ordered child indices; insertion order is display order
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - every child lists this node as its parent
/// - the parent chain is finite (trees are acyclic by construction)
#[derive(PartialEq, Debug, Clone)]
pub struct Node<T> {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Index of the parent node, `None` for the root
    parent: Option<NodeIndex>,
    /// Indices of the child nodes, in display order
    children: Vec<NodeIndex>,
    /// Payload of this node
    data: T,
}

impl<T> Node<T> {
    /// Creates a new root node (no parent, no children).
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `data` - Payload
    pub(crate) fn new_root(index: NodeIndex, data: T) -> Self {
        Node {
            index,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Creates a new node attached below `parent`.
    ///
    /// The parent's child list is *not* updated here; that is the job of
    /// [GenTree::add_child](crate::model::GenTree::add_child).
    pub(crate) fn new_child(index: NodeIndex, parent: NodeIndex, data: T) -> Self {
        Node {
            index,
            parent: Some(parent),
            children: Vec::new(),
            data,
        }
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns `true` if this node has a parent.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns `true` if this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the child indices in display order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a reference to the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the payload.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
