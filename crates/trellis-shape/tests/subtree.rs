use trellis_map::NodeKeyMap;
use trellis_model::{Ident, Record, Tree};
use trellis_shape::{build_tree, select_subtree, ShapeError};

fn id(text: &str) -> Ident {
    Ident::text(text)
}

fn sample_tree() -> Tree {
    let records = vec![
        Record::new().with("id", "r"),
        Record::new().with("id", "a").with("parent", "r"),
        Record::new().with("id", "b").with("parent", "r"),
        Record::new().with("id", "a1").with("parent", "a"),
        Record::new().with("id", "a2").with("parent", "a"),
    ];
    build_tree(&records, &NodeKeyMap::default()).expect("build tree")
}

#[test]
fn selecting_the_sole_root_returns_the_whole_tree() {
    let tree = sample_tree();
    let selected = select_subtree(&tree, &id("r")).expect("subtree");
    assert_eq!(selected, tree);
}

#[test]
fn selecting_a_branch_keeps_only_descendants() {
    let tree = sample_tree();
    let selected = select_subtree(&tree, &id("a")).expect("subtree");

    let ids: Vec<&Ident> = selected.ids().collect();
    assert_eq!(ids, vec![&id("a"), &id("a1"), &id("a2")]);
    assert!(!selected.contains(&id("r")));
    assert!(!selected.contains(&id("b")));
}

#[test]
fn selected_root_keeps_its_original_parent_link() {
    let tree = sample_tree();
    let selected = select_subtree(&tree, &id("a")).expect("subtree");

    // Links are cloned as-is; the selected root still points at r even
    // though r is no longer in the tree.
    let a = selected.get(&id("a")).expect("node a");
    assert_eq!(a.parent, Some(id("r")));
    assert_eq!(a.children, vec![id("a1"), id("a2")]);
}

#[test]
fn leaf_selection_is_a_single_node() {
    let tree = sample_tree();
    let selected = select_subtree(&tree, &id("a2")).expect("subtree");
    assert_eq!(selected.len(), 1);
}

#[test]
fn unknown_root_fails_with_not_found() {
    let tree = sample_tree();
    let err = select_subtree(&tree, &id("nope")).expect_err("unknown root");
    assert_eq!(err, ShapeError::NotFound { id: id("nope") });
    assert_eq!(
        err.to_string(),
        "id not found in tree: nope"
    );
}

#[test]
fn cyclic_links_still_terminate() {
    let records = vec![
        Record::new().with("id", "a").with("parent", "b"),
        Record::new().with("id", "b").with("parent", "a"),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");
    let selected = select_subtree(&tree, &id("a")).expect("subtree");
    assert_eq!(selected.len(), 2);
}
