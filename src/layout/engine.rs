//! Top-down placement of lineage trees with subtree overlap correction.

use crate::layout::bounds::{Layout, RenderBounds};
use crate::layout::measure::{LabelSize, TextMeasure};
use crate::model::{GenTree, LineageTree, NodeIndex};
use tracing::{debug, trace};

/// Vertical gap between a node and its children, in multiples of the
/// node's own height
const LEVEL_SPACING: f64 = 1.5;

/// Default horizontal space added to each measured label
const DEFAULT_HORIZONTAL_PADDING: f64 = 10.0;

// =$========================================================================$=
// LAYOUT ENGINE
// =$========================================================================$=
/// Computes non-overlapping positions for every node of a tree.
///
/// The engine works in three passes:
/// 1. **Placement** (pre-order): the root is centered on `x = 0` with its top
///    at `y = 0`. The children of a node are put side by side, their joint
///    width centered below the node, `1.5 × height` below its bottom edge.
/// 2. **Overlap resolution** (post-order): wherever the subtree boxes of
///    adjacent children overlap, the children left of the middle are pushed
///    left and those right of it are pushed right, walking outward from the
///    middle. With an odd number of children the middle child stays put;
///    with an even number the innermost pair shares the correction. Then
///    the parent is re-centered over the span of its children's subtrees.
///    Going bottom-up means every subtree is final before its parent
///    re-centers over it.
/// 3. **Normalization**: everything is shifted so the smallest `x` is `0`.
///
/// # Example
/// ```
/// use lineage_render::layout::{LabelSize, LayoutEngine};
/// use lineage_render::model::GenTree;
///
/// let mut tree = GenTree::with_root(());
/// tree.add_child(0, ());
/// tree.add_child(0, ());
///
/// let sizes = vec![LabelSize::new(10.0, 4.0); 3];
/// let layout = LayoutEngine::new(0.0).layout_measured(&tree, &sizes);
///
/// assert_eq!(layout.bounds(1).x, 0.0);
/// assert_eq!(layout.bounds(2).x, 10.0);
/// assert_eq!(layout.bounds(0).x, 5.0);
/// assert_eq!(layout.bounds(1).y, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Horizontal space added to each measured label width
    horizontal_padding: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZONTAL_PADDING)
    }
}

impl LayoutEngine {
    /// Creates an engine adding `horizontal_padding` to every label width.
    pub fn new(horizontal_padding: f64) -> Self {
        LayoutEngine { horizontal_padding }
    }

    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    /// Measures the short display name of every species with `measure` and
    /// lays out the tree.
    pub fn layout<M: TextMeasure + ?Sized>(&self, tree: &LineageTree, measure: &M) -> Layout {
        let sizes: Vec<LabelSize> = (0..tree.len())
            .map(|index| measure.measure(tree[index].data().species.short_display_name()))
            .collect();
        self.layout_measured(tree, &sizes)
    }

    /// Lays out `tree` given the measured label size of every node,
    /// indexed by [NodeIndex].
    ///
    /// # Panics
    /// Panics if `sizes` holds fewer entries than the tree has nodes.
    pub fn layout_measured<T>(&self, tree: &GenTree<T>, sizes: &[LabelSize]) -> Layout {
        assert!(
            sizes.len() >= tree.len(),
            "{} label sizes given for {} nodes",
            sizes.len(),
            tree.len()
        );
        debug_assert!(
            sizes.iter().all(|s| s.width >= 0.0 && s.height >= 0.0),
            "label sizes must be non-negative"
        );

        let mut layout = self.place(tree, sizes);
        let corrections = resolve_overlaps(tree, &mut layout);
        normalize(&mut layout);

        let extent = layout.tree_bounds();
        debug!(
            nodes = tree.len(),
            corrections,
            width = extent.width,
            height = extent.height,
            "laid out lineage tree"
        );
        layout
    }

    fn node_width(&self, size: LabelSize) -> f64 {
        size.width + self.horizontal_padding
    }

    /// Pass 1: children side by side, centered below their parent.
    fn place<T>(&self, tree: &GenTree<T>, sizes: &[LabelSize]) -> Layout {
        let mut bounds = vec![RenderBounds::default(); tree.len()];

        let root = tree.root_index();
        let root_width = self.node_width(sizes[root]);
        bounds[root] = RenderBounds::new(-root_width / 2.0, 0.0, root_width, sizes[root].height);

        // Pre-order guarantees a parent is placed before its children
        for node in tree.pre_order_iter() {
            if node.is_leaf() {
                continue;
            }

            let parent = bounds[node.index()];
            let total_width: f64 = node.children().iter().map(|&c| self.node_width(sizes[c])).sum();
            let y = parent.bottom() + LEVEL_SPACING * parent.height;
            let mut x = parent.center_x() - total_width / 2.0;

            for &child in node.children() {
                let width = self.node_width(sizes[child]);
                bounds[child] = RenderBounds::new(x, y, width, sizes[child].height);
                x += width;
            }
        }

        Layout::from_bounds(bounds)
    }
}

/// Pass 2: separates overlapping sibling subtrees bottom-up and re-centers
/// every parent over its children. Returns the number of subtree shifts.
fn resolve_overlaps<T>(tree: &GenTree<T>, layout: &mut Layout) -> usize {
    let mut corrections = 0;

    for node in tree.post_order_iter() {
        let children = node.children();
        let (Some(&first), Some(&last)) = (children.first(), children.last()) else {
            continue;
        };

        if children.len() > 1 {
            corrections += separate_siblings(tree, layout, children);
        }

        let span_left = layout.subtree_bounds(tree, first).left();
        let span_right = layout.subtree_bounds(tree, last).right();
        let bounds = layout.bounds_mut(node.index());
        bounds.x = (span_left + span_right) / 2.0 - bounds.width / 2.0;
    }

    corrections
}

/// Pushes the subtrees of `children` apart so adjacent subtree boxes no
/// longer overlap, walking outward from the middle child.
fn separate_siblings<T>(tree: &GenTree<T>, layout: &mut Layout, children: &[NodeIndex]) -> usize {
    let overlap_between = |layout: &Layout, left: NodeIndex, right: NodeIndex| {
        layout.subtree_bounds(tree, left).right() - layout.subtree_bounds(tree, right).left()
    };

    let any_overlap = children.windows(2).any(|pair| {
        let left = layout.subtree_bounds(tree, pair[0]);
        let right = layout.subtree_bounds(tree, pair[1]);
        left.overlaps_horizontally(&right)
    });
    if !any_overlap {
        return 0;
    }

    let count = children.len();
    let middle = count / 2;
    let is_even = count % 2 == 0;
    // With an even count, the pair straddling the middle splits its overlap
    let innermost_half = if is_even {
        overlap_between(&*layout, children[middle - 1], children[middle]) / 2.0
    } else {
        0.0
    };

    let mut corrections = 0;
    let mut shift = |layout: &mut Layout, index: NodeIndex, dx: f64| {
        trace!(node = index, dx, "shifting subtree");
        layout.translate_subtree(tree, index, dx);
        corrections += 1;
    };

    // Left half, from the middle outward
    for i in (0..middle).rev() {
        let overlap = if is_even && i == middle - 1 {
            innermost_half
        } else {
            overlap_between(&*layout, children[i], children[i + 1])
        };
        if overlap > 0.0 {
            shift(&mut *layout, children[i], -overlap);
        }
    }

    // Right half, from the middle outward; an odd middle child is the pivot
    let right_start = if is_even { middle } else { middle + 1 };
    for i in right_start..count {
        let overlap = if is_even && i == middle {
            innermost_half
        } else {
            overlap_between(&*layout, children[i - 1], children[i])
        };
        if overlap > 0.0 {
            shift(&mut *layout, children[i], overlap);
        }
    }

    corrections
}

/// Pass 3: shifts the layout so the smallest `x` of any node is `0`.
fn normalize(layout: &mut Layout) {
    let min_x = layout
        .iter()
        .map(|(_, bounds)| bounds.left())
        .fold(f64::INFINITY, f64::min);
    if min_x.is_finite() {
        layout.translate_all(-min_x, 0.0);
    }
}
