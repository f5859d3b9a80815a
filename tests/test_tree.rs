use lineage_render::model::GenTree;

/// ```text
/// root
/// ├─ a
/// │  ├─ a1
/// │  └─ a2
/// │     └─ a2x
/// └─ b
/// ```
fn sample_tree() -> GenTree<&'static str> {
    let mut tree = GenTree::with_root("root");
    let a = tree.add_child(0, "a");
    tree.add_child(a, "a1");
    let a2 = tree.add_child(a, "a2");
    tree.add_child(a2, "a2x");
    tree.add_child(0, "b");
    tree
}

fn index_of(tree: &GenTree<&'static str>, label: &str) -> usize {
    tree.pre_order_iter()
        .find(|n| *n.data() == label)
        .map(|n| n.index())
        .unwrap()
}

#[test]
fn test_building_tree() {
    let tree = sample_tree();

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.num_leaves(), 3);
    assert!(tree.is_valid());

    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.index(), tree.root_index());
    assert_eq!(*root.data(), "root");
    assert_eq!(root.num_children(), 2);

    let a = index_of(&tree, "a");
    let a1 = index_of(&tree, "a1");
    let a2 = index_of(&tree, "a2");
    assert_eq!(tree.children(a), &[a1, a2]);
    assert_eq!(tree[a1].parent_index(), Some(a));
    assert_eq!(*tree.parent(a2).unwrap().data(), "a");
    assert!(tree.parent(tree.root_index()).is_none());
}

#[test]
fn test_depth_follows_parent_chain() {
    let tree = sample_tree();

    assert_eq!(tree.depth(tree.root_index()), 0);
    assert_eq!(tree.depth(index_of(&tree, "a")), 1);
    assert_eq!(tree.depth(index_of(&tree, "b")), 1);
    assert_eq!(tree.depth(index_of(&tree, "a2")), 2);
    assert_eq!(tree.depth(index_of(&tree, "a2x")), 3);
    assert_eq!(tree.max_depth(), 3);

    for node in tree.pre_order_iter() {
        if let Some(parent) = node.parent_index() {
            assert_eq!(tree.depth(node.index()), tree.depth(parent) + 1);
        }
    }
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = GenTree::with_root(0);
    for i in 1..=5 {
        tree.add_child(0, i);
    }

    let data: Vec<_> = tree.children(0).iter().map(|&c| *tree[c].data()).collect();
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pre_order() {
    let tree = sample_tree();
    let order: Vec<_> = tree.pre_order_iter().map(|n| *n.data()).collect();
    assert_eq!(order, vec!["root", "a", "a1", "a2", "a2x", "b"]);
}

#[test]
fn test_post_order() {
    let tree = sample_tree();
    let order: Vec<_> = tree.post_order_iter().map(|n| *n.data()).collect();
    assert_eq!(order, vec!["a1", "a2x", "a2", "a", "b", "root"]);
}

#[test]
fn test_subtree_traversals() {
    let tree = sample_tree();
    let a = index_of(&tree, "a");

    let pre: Vec<_> = tree.pre_order_from(a).map(|n| *n.data()).collect();
    assert_eq!(pre, vec!["a", "a1", "a2", "a2x"]);

    let post: Vec<_> = tree.post_order_from(a).map(|n| *n.data()).collect();
    assert_eq!(post, vec!["a1", "a2x", "a2", "a"]);

    let leaf = index_of(&tree, "b");
    assert_eq!(tree.pre_order_from(leaf).count(), 1);
    assert_eq!(tree.post_order_from(leaf).count(), 1);
}

#[test]
fn test_single_node_tree() {
    let tree = GenTree::with_root("solo");

    assert_eq!(tree.len(), 1);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.max_depth(), 0);
    assert_eq!(tree.pre_order_iter().count(), 1);
    assert_eq!(tree.post_order_iter().count(), 1);
    assert!(tree.is_valid());
}

#[test]
fn test_sibling_queries() {
    let tree = sample_tree();
    let a = index_of(&tree, "a");
    let b = index_of(&tree, "b");
    let a2x = index_of(&tree, "a2x");

    assert!(tree.has_next_sibling(a));
    assert!(!tree.has_next_sibling(b));
    assert!(!tree.has_next_sibling(a2x));
    assert!(!tree.has_next_sibling(tree.root_index()));

    assert!(!tree.is_last_child(a));
    assert!(tree.is_last_child(b));
    assert!(tree.is_last_child(a2x));
    assert!(!tree.is_last_child(tree.root_index()));

    assert!(tree.is_first_child(a));
    assert!(!tree.is_first_child(b));
    assert!(tree.is_first_child(a2x));
    assert!(!tree.is_first_child(tree.root_index()));
}

#[test]
fn test_deep_chain_traversal_without_recursion() {
    let mut tree = GenTree::with_root(0usize);
    let mut tip = tree.root_index();
    for i in 1..100_000 {
        tip = tree.add_child(tip, i);
    }

    assert_eq!(tree.pre_order_iter().count(), 100_000);
    assert_eq!(tree.post_order_iter().next().map(|n| *n.data()), Some(99_999));
    assert_eq!(tree.max_depth(), 99_999);
}

#[test]
#[should_panic]
fn test_add_child_to_unknown_parent_panics() {
    let mut tree = GenTree::with_root("root");
    tree.add_child(7, "orphan");
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = GenTree::with_root("root");
    let _ = &tree[55];
}
