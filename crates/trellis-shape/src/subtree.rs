#![deny(unsafe_code)]

use tracing::debug;
use trellis_model::{Ident, Tree};

use crate::ShapeError;

/// Selects the subtree rooted at `root_id`: the node itself plus every
/// descendant reachable through stored children lists.
///
/// Children are visited depth-first in stored order, so the selection
/// lists nodes in pre-order. Children entries naming absent ids are
/// skipped. Selected nodes keep their parent and children fields as-is,
/// even where those now point outside the selection.
pub fn select_subtree(tree: &Tree, root_id: &Ident) -> Result<Tree, ShapeError> {
    if !tree.contains(root_id) {
        return Err(ShapeError::NotFound {
            id: root_id.clone(),
        });
    }

    let mut selected = Tree::new();
    let mut stack = vec![root_id.clone()];
    while let Some(id) = stack.pop() {
        if selected.contains(&id) {
            continue;
        }
        let Some(node) = tree.get(&id) else {
            continue;
        };
        selected.insert(node.clone());
        for child in node.children.iter().rev() {
            stack.push(child.clone());
        }
    }

    debug!(root = %root_id, selected = selected.len(), total = tree.len(), "selected subtree");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_model::Node;

    #[test]
    fn selection_is_preorder() {
        let tree = Tree::from_nodes(vec![
            Node::new("r").with_children(vec!["a".into(), "b".into()]),
            Node::new("b").with_parent("r"),
            Node::new("a")
                .with_parent("r")
                .with_children(vec!["a1".into()]),
            Node::new("a1").with_parent("a"),
        ]);

        let selected = select_subtree(&tree, &Ident::text("r")).expect("subtree");
        let ids: Vec<&Ident> = selected.ids().collect();
        assert_eq!(
            ids,
            vec![
                &Ident::text("r"),
                &Ident::text("a"),
                &Ident::text("a1"),
                &Ident::text("b"),
            ]
        );
    }

    #[test]
    fn shared_descendants_are_selected_once() {
        // Both a and b list x as a child; the walk keeps the first visit.
        let tree = Tree::from_nodes(vec![
            Node::new("r").with_children(vec!["a".into(), "b".into()]),
            Node::new("a").with_children(vec!["x".into()]),
            Node::new("b").with_children(vec!["x".into()]),
            Node::new("x"),
        ]);
        let selected = select_subtree(&tree, &Ident::text("r")).expect("subtree");
        assert_eq!(selected.len(), 4);
    }
}
