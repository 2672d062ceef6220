use crate::tree::FractalTree;

#[test]
fn fresh_tree_holds_only_active_root() {
    let tree = FractalTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.active_count(), 1);
    assert!(tree.node(FractalTree::ROOT).active);
    assert!(tree.node(FractalTree::ROOT).parent.is_none());
}

#[test]
fn children_keep_slot_order() {
    let mut tree = FractalTree::new();
    let a = tree.add_child(FractalTree::ROOT, true);
    let b = tree.add_child(FractalTree::ROOT, false);
    let c = tree.add_child(FractalTree::ROOT, true);

    assert_eq!(tree.node(FractalTree::ROOT).children, vec![a, b, c]);
    assert_eq!(tree.node(b).parent, Some(FractalTree::ROOT));
    assert_eq!(tree.active_count(), 3);
}

#[test]
fn deactivation_keeps_structure() {
    let mut tree = FractalTree::new();
    let child = tree.add_child(FractalTree::ROOT, true);
    tree.add_child(child, true);

    tree.deactivate(child);
    assert!(!tree.node(child).active);
    assert_eq!(tree.node(child).children.len(), 1);
    assert_eq!(tree.active_count(), 2);
}

#[test]
fn active_paths_record_every_active_node_in_preorder() {
    // root -> [active, inactive]; first child -> [inactive, active]
    let mut tree = FractalTree::new();
    let a = tree.add_child(FractalTree::ROOT, true);
    tree.add_child(FractalTree::ROOT, false);
    tree.add_child(a, false);
    tree.add_child(a, true);

    let paths = tree.active_paths();
    assert_eq!(paths, vec![vec![0], vec![0, 0], vec![0, 0, 1]]);
}

#[test]
fn inactive_subtrees_still_walked_for_active_descendants() {
    // a pruned parent keeps its surviving children reachable
    let mut tree = FractalTree::new();
    let pruned = tree.add_child(FractalTree::ROOT, false);
    tree.add_child(pruned, true);

    let paths = tree.active_paths();
    assert!(paths.contains(&vec![0, 0, 0]));
    assert!(!paths.contains(&vec![0, 0]));
}
