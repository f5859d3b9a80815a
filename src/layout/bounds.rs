//! Render bounds and the per-node layout side table.

use crate::model::{GenTree, NodeIndex};

// =#========================================================================#=
// RENDER BOUNDS
// =#========================================================================#=
/// Axis-aligned rectangle; `x`/`y` is the top-left corner, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        RenderBounds {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &RenderBounds) -> RenderBounds {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        RenderBounds::new(left, top, right - left, bottom - top)
    }

    /// Returns `true` if `self` reaches into `other` from the left.
    pub fn overlaps_horizontally(&self, other: &RenderBounds) -> bool {
        self.right() > other.left()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

// =#========================================================================#=
// LAYOUT
// =#========================================================================#=
/// Bounds of every node of a tree, indexed by [NodeIndex].
///
/// The layout is a side table next to the tree rather than part of the node
/// payload, so the tree itself stays immutable during layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    bounds: Vec<RenderBounds>,
}

impl Layout {
    pub(crate) fn from_bounds(bounds: Vec<RenderBounds>) -> Self {
        Layout { bounds }
    }

    /// Returns the bounds of the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn bounds(&self, index: NodeIndex) -> &RenderBounds {
        &self.bounds[index]
    }

    pub(crate) fn bounds_mut(&mut self, index: NodeIndex) -> &mut RenderBounds {
        &mut self.bounds[index]
    }

    /// Returns the number of laid out nodes.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Iterates over `(index, bounds)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &RenderBounds)> {
        self.bounds.iter().enumerate()
    }

    /// Bounding box of the node at `index` and all its descendants.
    pub fn subtree_bounds<T>(&self, tree: &GenTree<T>, index: NodeIndex) -> RenderBounds {
        tree.pre_order_from(index)
            .map(|node| self.bounds[node.index()])
            .fold(self.bounds[index], |acc, b| acc.union(&b))
    }

    /// Bounding box of all nodes; the default rectangle if the layout is empty.
    pub fn tree_bounds(&self) -> RenderBounds {
        let mut iter = self.bounds.iter();
        match iter.next() {
            Some(first) => iter.fold(*first, |acc, b| acc.union(b)),
            None => RenderBounds::default(),
        }
    }

    /// Moves the node at `index` and all its descendants horizontally by `dx`.
    pub fn translate_subtree<T>(&mut self, tree: &GenTree<T>, index: NodeIndex, dx: f64) {
        for node in tree.pre_order_from(index) {
            self.bounds[node.index()].translate(dx, 0.0);
        }
    }

    /// Moves every node by `(dx, dy)`.
    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        for bounds in &mut self.bounds {
            bounds.translate(dx, dy);
        }
    }
}
