//! Provides the generic ownership tree.
//!
//! Provides core data structures for representing lineage trees:
//! * [`GenTree<T>`] - Tree structure using the arena pattern, generic over
//!   the payload carried by each node.
//! * [LineageTree](crate::model::LineageTree) as realization with
//!   [LineageNodeData](crate::model::LineageNodeData)
//! * [NodeIndex] as type used to index nodes in tree

use crate::model::node::Node;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted tree with ordered children, represented using the arena
/// pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// Children are owned by their parent in one direction only; the parent
/// link of a node is a plain index, so no reference cycles can form.
///
/// # Structure
/// - All nodes are stored in the arena, the root always at index `0`.
/// - Children keep their insertion order, which is their display order.
/// - The depth of a node is the number of its ancestors. It is derived from
///   the parent chain on request and never stored, so it cannot drift.
///
/// # Construction
/// Trees are built top-down: create the root with [`GenTree::with_root()`],
/// then append children with [`GenTree::add_child()`]. Nodes are never
/// removed or re-parented.
#[derive(Debug, Clone)]
pub struct GenTree<T> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<T>>,
}

/// Index of the root, which is always the first node created.
const ROOT_INDEX: NodeIndex = 0;

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> GenTree<T> {
    /// Creates a new tree consisting of a single root carrying `data`.
    pub fn with_root(data: T) -> Self {
        GenTree {
            nodes: vec![Node::new_root(ROOT_INDEX, data)],
        }
    }

    /// Creates a new tree with its root and capacity for `capacity` nodes.
    pub fn with_root_and_capacity(data: T, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new_root(ROOT_INDEX, data));
        GenTree { nodes }
    }

    /// Appends a new child carrying `data` to the children of `parent`,
    /// assigning a unique index, which gets returned.
    ///
    /// The new node becomes the last child of `parent` and thus has depth
    /// `depth(parent) + 1`.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_child(&mut self, parent: NodeIndex, data: T) -> NodeIndex {
        assert!(
            parent < self.nodes.len(),
            "Parent index {parent} out of bounds for tree with {} nodes",
            self.nodes.len()
        );
        let index = self.nodes.len();
        self.nodes.push(Node::new_child(index, parent, data));
        self.nodes[parent].push_child(index);
        index
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        ROOT_INDEX
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node<T> {
        &self.nodes[ROOT_INDEX]
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        &self[index]
    }

    /// Returns a mutable reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        &mut self.nodes[index]
    }

    /// Returns the number of nodes in this tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the parent node of `index`, or `None` for the root.
    pub fn parent(&self, index: NodeIndex) -> Option<&Node<T>> {
        self[index].parent_index().map(|p| &self[p])
    }

    /// Returns the child indices of `index` in display order.
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self[index].children()
    }

    /// Returns the depth of `index`, i.e. its number of ancestors.
    ///
    /// The root has depth `0`. Computed by walking the parent chain.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = &self[index];
        while let Some(parent) = current.parent_index() {
            depth += 1;
            current = &self[parent];
        }
        depth
    }

    /// Returns the maximum depth of any node.
    pub fn max_depth(&self) -> usize {
        // Depths are accumulated top-down in a single pre-order pass
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max_depth = 0;
        for node in self.pre_order_iter() {
            if let Some(parent) = node.parent_index() {
                depths[node.index()] = depths[parent] + 1;
                max_depth = max_depth.max(depths[node.index()]);
            }
        }
        max_depth
    }

    /// Returns `true` if `index` has a sibling after it in its parent's
    /// child list. The root has no siblings.
    pub fn has_next_sibling(&self, index: NodeIndex) -> bool {
        match self[index].parent_index() {
            Some(parent) => self[parent].children().last() != Some(&index),
            None => false,
        }
    }

    /// Returns `true` if `index` is the last child of its parent.
    pub fn is_last_child(&self, index: NodeIndex) -> bool {
        self[index].has_parent() && !self.has_next_sibling(index)
    }

    /// Returns `true` if `index` is the first child of its parent.
    pub fn is_first_child(&self, index: NodeIndex) -> bool {
        match self[index].parent_index() {
            Some(parent) => self[parent].children().first() == Some(&index),
            None => false,
        }
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Node indices match their position in the arena
    /// - Exactly one root (at index `0`)
    /// - All child indices are in bounds and point back to the correct parent
    /// - All parent indices are in bounds and list this node as a child
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.nodes.is_empty() || !self.nodes[ROOT_INDEX].is_root() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            match node.parent_index() {
                None if index != ROOT_INDEX => return false,
                None => {}
                Some(parent) => {
                    // Parents are always created before their children
                    if parent >= index {
                        return false;
                    }
                    if !self.nodes[parent].children().contains(&index) {
                        return false;
                    }
                }
            }

            for &child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent_index() != Some(index) {
                    return false;
                }
            }
        }

        true
    }
}

impl<T> std::ops::Index<NodeIndex> for GenTree<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<T> std::ops::IndexMut<NodeIndex> for GenTree<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<T> GenTree<T> {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Post-order traversal visits each node's children, left to right,
    /// before visiting the node itself. This is useful for aggregating data
    /// from leaves upward, e.g. subtree bounding boxes.
    ///
    /// # Example
    /// ```
    /// use lineage_render::model::GenTree;
    ///
    /// let mut tree = GenTree::with_root("root");
    /// let a = tree.add_child(0, "a");
    /// tree.add_child(a, "a1");
    /// tree.add_child(0, "b");
    ///
    /// let order: Vec<_> = tree.post_order_iter().map(|n| *n.data()).collect();
    /// assert_eq!(order, vec!["a1", "a", "b", "root"]);
    /// ```
    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self, ROOT_INDEX)
    }

    /// Returns a post-order iterator over the subtree rooted at `index`.
    pub fn post_order_from(&self, index: NodeIndex) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self, index)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Pre-order traversal visits each node before visiting its children,
    /// left to right. This is useful for propagating data from root to leaves.
    ///
    /// # Example
    /// ```
    /// use lineage_render::model::GenTree;
    ///
    /// let mut tree = GenTree::with_root("root");
    /// let a = tree.add_child(0, "a");
    /// tree.add_child(a, "a1");
    /// tree.add_child(0, "b");
    ///
    /// let order: Vec<_> = tree.pre_order_iter().map(|n| *n.data()).collect();
    /// assert_eq!(order, vec!["root", "a", "a1", "b"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self, ROOT_INDEX)
    }

    /// Returns a pre-order iterator over the subtree rooted at `index`.
    pub fn pre_order_from(&self, index: NodeIndex) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self, index)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a, T> {
    tree: &'a GenTree<T>,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a, T> PostOrderIter<'a, T> {
    fn new(tree: &'a GenTree<T>, start: NodeIndex) -> Self {
        PostOrderIter {
            tree,
            stack: vec![(start, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_leaf() {
                return Some(node);
            }

            self.stack.push((index, true));
            // Push children in reverse, so the leftmost is processed first
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a, T> {
    tree: &'a GenTree<T>,
    stack: Vec<NodeIndex>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(tree: &'a GenTree<T>, start: NodeIndex) -> Self {
        PreOrderIter {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse, so the leftmost is processed first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}
