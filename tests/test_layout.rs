use lineage_render::layout::{LabelSize, Layout, LayoutEngine, RenderBounds};
use lineage_render::model::{GenTree, LineageNodeData, LineageTree, Species, SpeciesId};
use proptest::prelude::*;

/// Float comparison tolerance
const EPSILON: f64 = 1e-6;

fn unit_sizes(n: usize) -> Vec<LabelSize> {
    vec![LabelSize::new(10.0, 4.0); n]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Checks sibling separation, parent centering and normalization for every node.
fn check_invariants<T>(tree: &GenTree<T>, layout: &Layout) -> Result<(), String> {
    for node in tree.pre_order_iter() {
        let children = node.children();
        if children.is_empty() {
            continue;
        }

        for pair in children.windows(2) {
            let left = layout.subtree_bounds(tree, pair[0]);
            let right = layout.subtree_bounds(tree, pair[1]);
            if left.right() > right.left() + EPSILON {
                return Err(format!("subtrees {} and {} overlap", pair[0], pair[1]));
            }
        }

        let span_left = layout.subtree_bounds(tree, children[0]).left();
        let span_right = layout.subtree_bounds(tree, *children.last().unwrap()).right();
        let center = layout.bounds(node.index()).center_x();
        if (center - (span_left + span_right) / 2.0).abs() > EPSILON {
            return Err(format!("node {} is not centered over its children", node.index()));
        }

        let parent = layout.bounds(node.index());
        for &child in children {
            let expected_y = parent.bottom() + 1.5 * parent.height;
            if (layout.bounds(child).y - expected_y).abs() > EPSILON {
                return Err(format!("child {child} has wrong vertical offset"));
            }
        }
    }

    let min_x = layout.iter().map(|(_, b)| b.x).fold(f64::INFINITY, f64::min);
    if min_x != 0.0 {
        return Err(format!("minimum x is {min_x}"));
    }
    Ok(())
}

#[test]
fn test_two_children_without_overlap() {
    let mut tree = GenTree::with_root(());
    let left = tree.add_child(0, ());
    let right = tree.add_child(0, ());

    let sizes = vec![LabelSize::new(8.0, 4.0), LabelSize::new(10.0, 4.0), LabelSize::new(10.0, 4.0)];
    let layout = LayoutEngine::new(0.0).layout_measured(&tree, &sizes);

    // Before normalization: children at -10 and 0, root centered on 0
    let root = layout.bounds(0);
    assert_close(layout.bounds(left).x, 0.0);
    assert_close(layout.bounds(right).x, 10.0);
    assert_close(root.x, 6.0);
    assert_close(root.center_x(), 10.0);
    assert_close(root.y, 0.0);
    assert_close(layout.bounds(left).y, 4.0 + 1.5 * 4.0);
    assert_close(layout.bounds(right).y, 10.0);
}

#[test]
fn test_padding_widens_labels() {
    let mut tree = GenTree::with_root(());
    tree.add_child(0, ());

    let layout = LayoutEngine::new(6.0).layout_measured(&tree, &unit_sizes(2));
    assert_close(layout.bounds(0).width, 16.0);
    assert_close(layout.bounds(1).width, 16.0);
    assert_close(layout.bounds(0).height, 4.0);
}

#[test]
fn test_odd_children_keep_middle_as_pivot() {
    // Middle child B spreads three children as wide as the whole level
    let mut tree = GenTree::with_root("root");
    let a = tree.add_child(0, "A");
    let b = tree.add_child(0, "B");
    let c = tree.add_child(0, "C");
    let b1 = tree.add_child(b, "B1");
    let b2 = tree.add_child(b, "B2");
    let b3 = tree.add_child(b, "B3");

    let layout = LayoutEngine::new(0.0).layout_measured(&tree, &unit_sizes(tree.len()));

    assert_close(layout.bounds(a).x, 0.0);
    assert_close(layout.bounds(b).x, 20.0);
    assert_close(layout.bounds(c).x, 40.0);
    assert_close(layout.bounds(b1).x, 10.0);
    assert_close(layout.bounds(b2).x, 20.0);
    assert_close(layout.bounds(b3).x, 30.0);
    assert_close(layout.bounds(0).x, 20.0);
    check_invariants(&tree, &layout).unwrap();
}

#[test]
fn test_even_children_split_innermost_overlap() {
    let mut tree = GenTree::with_root("root");
    let a = tree.add_child(0, "A");
    let b = tree.add_child(0, "B");
    let a1 = tree.add_child(a, "A1");
    let a2 = tree.add_child(a, "A2");
    let b1 = tree.add_child(b, "B1");
    let b2 = tree.add_child(b, "B2");

    let layout = LayoutEngine::new(0.0).layout_measured(&tree, &unit_sizes(tree.len()));

    assert_close(layout.bounds(a1).x, 0.0);
    assert_close(layout.bounds(a2).x, 10.0);
    assert_close(layout.bounds(b1).x, 20.0);
    assert_close(layout.bounds(b2).x, 30.0);
    assert_close(layout.bounds(a).x, 5.0);
    assert_close(layout.bounds(b).x, 25.0);
    assert_close(layout.bounds(0).x, 15.0);
    check_invariants(&tree, &layout).unwrap();
}

#[test]
fn test_outer_siblings_are_pushed_in_sequence() {
    // Four children, the inner two with wide subtrees: the outer ones must
    // move out far enough to clear their shifted neighbours
    let mut tree = GenTree::with_root(());
    let children: Vec<_> = (0..4).map(|_| tree.add_child(0, ())).collect();
    for &inner in &children[1..3] {
        for _ in 0..4 {
            tree.add_child(inner, ());
        }
    }

    let layout = LayoutEngine::new(0.0).layout_measured(&tree, &unit_sizes(tree.len()));
    check_invariants(&tree, &layout).unwrap();

    let total = layout.tree_bounds();
    assert_close(total.x, 0.0);
    assert_close(total.width, 100.0);
}

#[test]
fn test_single_child_chain_is_centered() {
    let mut tree = GenTree::with_root(());
    let child = tree.add_child(0, ());
    let grandchild = tree.add_child(child, ());

    let sizes = vec![LabelSize::new(30.0, 4.0), LabelSize::new(10.0, 2.0), LabelSize::new(20.0, 4.0)];
    let layout = LayoutEngine::new(0.0).layout_measured(&tree, &sizes);

    assert_close(layout.bounds(0).center_x(), layout.bounds(child).center_x());
    assert_close(layout.bounds(child).center_x(), layout.bounds(grandchild).center_x());
    assert_close(layout.bounds(0).x, 0.0);
    assert_close(layout.bounds(grandchild).y, layout.bounds(child).bottom() + 3.0);
    check_invariants(&tree, &layout).unwrap();
}

#[test]
fn test_layout_measures_short_names() {
    let name = |id, name: &str| LineageNodeData::descendant(Species::new(SpeciesId(id), name, 0));
    let mut tree = LineageTree::with_root(name(0, "abcd"));
    tree.add_child(0, name(1, "ab"));

    let measure = |label: &str| LabelSize::new(label.len() as f64 * 2.0, 5.0);
    let layout = LayoutEngine::new(1.0).layout(&tree, &measure);

    assert_close(layout.bounds(0).width, 9.0);
    assert_close(layout.bounds(1).width, 5.0);
    assert_close(layout.bounds(1).y, 12.5);
}

#[test]
fn test_render_bounds_geometry() {
    let a = RenderBounds::new(0.0, 0.0, 10.0, 4.0);
    let b = RenderBounds::new(8.0, 6.0, 10.0, 4.0);

    assert!(a.overlaps_horizontally(&b));
    assert!(!b.overlaps_horizontally(&RenderBounds::new(18.0, 0.0, 1.0, 1.0)));
    assert_eq!(a.union(&b), RenderBounds::new(0.0, 0.0, 18.0, 10.0));
    assert_close(b.center_x(), 13.0);
    assert_close(b.center_y(), 8.0);
}

#[test]
fn test_translate_subtree_moves_descendants_only() {
    let mut tree = GenTree::with_root(());
    let a = tree.add_child(0, ());
    let a1 = tree.add_child(a, ());
    let b = tree.add_child(0, ());

    let mut layout = LayoutEngine::new(0.0).layout_measured(&tree, &unit_sizes(4));
    let before = layout.clone();
    layout.translate_subtree(&tree, a, -3.0);

    assert_close(layout.bounds(a).x, before.bounds(a).x - 3.0);
    assert_close(layout.bounds(a1).x, before.bounds(a1).x - 3.0);
    assert_eq!(layout.bounds(b), before.bounds(b));
    assert_eq!(layout.bounds(0), before.bounds(0));
}

// --- PROPERTIES ---

/// Random tree shapes with random label sizes.
fn arb_measured_tree() -> impl Strategy<Value = (GenTree<()>, Vec<LabelSize>)> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(any::<prop::sample::Index>(), n),
                proptest::collection::vec((1.0f64..50.0, 1.0f64..20.0), n),
            )
        })
        .prop_map(|(picks, dims)| {
            let mut tree = GenTree::with_root(());
            for (i, pick) in picks.iter().enumerate().skip(1) {
                tree.add_child(pick.index(i), ());
            }
            let sizes = dims.into_iter().map(|(w, h)| LabelSize::new(w, h)).collect();
            (tree, sizes)
        })
}

proptest! {
    #[test]
    fn prop_layout_invariants((tree, sizes) in arb_measured_tree(), padding in 0.0f64..10.0) {
        let layout = LayoutEngine::new(padding).layout_measured(&tree, &sizes);
        prop_assert_eq!(layout.len(), tree.len());
        if let Err(msg) = check_invariants(&tree, &layout) {
            prop_assert!(false, "{}", msg);
        }
    }

    #[test]
    fn prop_layout_keeps_measured_sizes((tree, sizes) in arb_measured_tree()) {
        let engine = LayoutEngine::default();
        let layout = engine.layout_measured(&tree, &sizes);
        for (index, bounds) in layout.iter() {
            prop_assert!((bounds.width - sizes[index].width - engine.horizontal_padding()).abs() < EPSILON);
            prop_assert!((bounds.height - sizes[index].height).abs() < EPSILON);
        }
    }
}
