use trellis_map::{AttributeKeys, FieldName, NodeKeyMap};
use trellis_model::{Ident, Record, Value};
use trellis_shape::{build_tree, ShapeError};

fn id(text: &str) -> Ident {
    Ident::text(text)
}

fn record(fields: &[(&str, &str)]) -> Record {
    let mut out = Record::new();
    for (field, value) in fields {
        out.insert(*field, *value);
    }
    out
}

fn children(ids: &[&str]) -> Value {
    Value::List(ids.iter().map(|child| Value::from(*child)).collect())
}

#[test]
fn parent_field_links_nodes() {
    let records = vec![
        record(&[("id", "root")]),
        record(&[("id", "left"), ("parent", "root")]),
        record(&[("id", "right"), ("parent", "root")]),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    assert_eq!(tree.len(), 3);
    let root = tree.get(&id("root")).expect("root node");
    assert!(root.is_root());
    assert_eq!(root.children, vec![id("left"), id("right")]);
    assert_eq!(
        tree.get(&id("left")).and_then(|node| node.parent.clone()),
        Some(id("root"))
    );
}

#[test]
fn children_field_claims_nodes() {
    let records = vec![
        record(&[("id", "a")]).with("children", children(&["b", "c"])),
        record(&[("id", "b")]),
        record(&[("id", "c")]),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    let a = tree.get(&id("a")).expect("node a");
    assert_eq!(a.children, vec![id("b"), id("c")]);
    assert_eq!(
        tree.get(&id("b")).and_then(|node| node.parent.clone()),
        Some(id("a"))
    );
    assert_eq!(
        tree.get(&id("c")).and_then(|node| node.parent.clone()),
        Some(id("a"))
    );
}

#[test]
fn later_hint_overrides_earlier_claim() {
    // a claims b as a child, but b's own record then names c as parent.
    let records = vec![
        record(&[("id", "a")]).with("children", children(&["b"])),
        record(&[("id", "b"), ("parent", "c")]),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    let b = tree.get(&id("b")).expect("node b");
    assert_eq!(b.parent, Some(id("c")));
    let a = tree.get(&id("a")).expect("node a");
    assert!(a.children.is_empty());
    // c never had a record, so the link dangles rather than creating a node.
    assert!(tree.get(&id("c")).is_none());
}

#[test]
fn hints_resolve_in_record_order() {
    // Within one record the parent field applies before the children field,
    // and later records apply after earlier ones.
    let records = vec![
        record(&[("id", "x"), ("parent", "a")]),
        record(&[("id", "a")]).with("children", children(&["x"])),
        record(&[("id", "b")]).with("children", children(&["x"])),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    assert_eq!(
        tree.get(&id("x")).and_then(|node| node.parent.clone()),
        Some(id("b"))
    );
    assert!(tree.get(&id("a")).expect("node a").children.is_empty());
    assert_eq!(tree.get(&id("b")).expect("node b").children, vec![id("x")]);
}

#[test]
fn duplicate_ids_keep_first_position_with_last_attributes() {
    let records = vec![
        record(&[("id", "a"), ("label", "first")]),
        record(&[("id", "b")]),
        record(&[("id", "a"), ("label", "second")]),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    assert_eq!(tree.len(), 2);
    let ids: Vec<&Ident> = tree.ids().collect();
    assert_eq!(ids, vec![&id("a"), &id("b")]);
    let a = tree.get(&id("a")).expect("node a");
    assert_eq!(a.attributes.label, Some(Value::from("second")));
}

#[test]
fn missing_id_fails() {
    let records = vec![record(&[("id", "a")]), record(&[("label", "no id")])];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("missing id");
    assert_eq!(
        err,
        ShapeError::MissingIdentifier {
            field: "id".to_string(),
            index: 1,
        }
    );
}

#[test]
fn blank_id_fails() {
    let records = vec![record(&[("id", "   ")])];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("blank id");
    assert_eq!(
        err,
        ShapeError::MissingIdentifier {
            field: "id".to_string(),
            index: 0,
        }
    );
}

#[test]
fn non_identifier_id_fails() {
    let records = vec![Record::new().with("id", true)];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("bool id");
    assert_eq!(
        err,
        ShapeError::InvalidIdentifier {
            field: "id".to_string(),
            index: 0,
        }
    );
}

#[test]
fn non_identifier_parent_fails() {
    let records = vec![Record::new().with("id", "a").with("parent", 1.5)];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("float parent");
    assert_eq!(
        err,
        ShapeError::InvalidIdentifier {
            field: "parent".to_string(),
            index: 0,
        }
    );
}

#[test]
fn blank_parent_reads_as_absent() {
    let records = vec![record(&[("id", "a"), ("parent", "  ")])];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");
    assert!(tree.get(&id("a")).expect("node a").is_root());
}

#[test]
fn scalar_children_field_fails() {
    let records = vec![record(&[("id", "a"), ("children", "b")])];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("scalar children");
    assert_eq!(
        err,
        ShapeError::InvalidChildren {
            field: "children".to_string(),
            index: 0,
        }
    );
}

#[test]
fn non_identifier_children_entry_fails() {
    let records =
        vec![Record::new().with("id", "a").with("children", Value::List(vec![Value::from(true)]))];
    let err = build_tree(&records, &NodeKeyMap::default()).expect_err("bool child");
    assert_eq!(
        err,
        ShapeError::InvalidIdentifier {
            field: "children".to_string(),
            index: 0,
        }
    );
}

#[test]
fn integer_and_text_ids_stay_distinct() {
    let records = vec![
        Record::new().with("id", 1_i64).with("parent", "1"),
        record(&[("id", "root")]),
    ];
    let tree = build_tree(&records, &NodeKeyMap::default()).expect("build tree");

    let node = tree.get(&Ident::int(1)).expect("int node");
    assert_eq!(node.parent, Some(id("1")));
    // "1" only ever appears as a hint, so there is no node under it.
    assert!(tree.get(&id("1")).is_none());
}

#[test]
fn attributes_map_through_configured_fields() {
    let records = vec![record(&[
        ("key", "n1"),
        ("up", "n0"),
        ("name", "Node One"),
        ("shade", "#336699"),
    ])];
    let keys = NodeKeyMap::new()
        .with_id(FieldName::new("key").expect("field name"))
        .with_parent(FieldName::new("up").expect("field name"))
        .with_attributes(
            AttributeKeys::new()
                .with_label(FieldName::new("name").expect("field name"))
                .with_color(FieldName::new("shade").expect("field name")),
        );
    let tree = build_tree(&records, &keys).expect("build tree");

    let node = tree.get(&id("n1")).expect("node n1");
    assert_eq!(node.parent, Some(id("n0")));
    assert_eq!(node.attributes.label, Some(Value::from("Node One")));
    assert_eq!(node.attributes.color, Some(Value::from("#336699")));
    assert_eq!(node.attributes.group, None);
}

#[test]
fn empty_input_builds_empty_tree() {
    let tree = build_tree(&[], &NodeKeyMap::default()).expect("build tree");
    assert!(tree.is_empty());
}
