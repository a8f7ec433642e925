#![deny(unsafe_code)]

use std::collections::HashSet;

use tracing::debug;
use trellis_model::{Attributes, Hierarchy, HierarchyNode, Ident, Node, Tree, PSEUDO_ROOT_ID};

use crate::subtree::select_subtree;
use crate::ShapeError;

/// Options for hierarchy materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyOptions {
    /// Restrict materialization to this node and its descendants.
    pub root_id: Option<Ident>,
    /// Identifier given to a synthesized root over a multi-root forest.
    /// Real nodes must not use it; a tree that does produces an
    /// unspecified shape or a cycle error.
    pub pseudo_root_id: Ident,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            root_id: None,
            pseudo_root_id: Ident::text(PSEUDO_ROOT_ID),
        }
    }
}

impl HierarchyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root_id: impl Into<Ident>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    pub fn with_pseudo_root_id(mut self, pseudo_root_id: impl Into<Ident>) -> Self {
        self.pseudo_root_id = pseudo_root_id.into();
        self
    }
}

/// Materializes a tree into a single-rooted, depth-annotated [`Hierarchy`].
///
/// A node is a root candidate when it has no parent link or its parent id
/// does not resolve to a node in the working set. Exactly one candidate
/// becomes the root directly; several get a synthesized pseudo-root as
/// their common parent, with the candidates as its children in tree order.
/// No candidate at all means every node sits on a parent cycle.
///
/// Traversal follows stored children lists. Entries naming absent ids are
/// skipped, and nodes the traversal never reaches surface as a cycle error
/// rather than being dropped.
pub fn materialize_hierarchy(
    tree: &Tree,
    options: &HierarchyOptions,
) -> Result<Hierarchy, ShapeError> {
    let selected;
    let working = match &options.root_id {
        Some(root_id) => {
            selected = select_subtree(tree, root_id)?;
            &selected
        }
        None => tree,
    };
    if working.is_empty() {
        return Err(ShapeError::NoRoot);
    }

    let candidates: Vec<&Node> = working
        .nodes()
        .filter(|node| is_root_candidate(node, working))
        .collect();

    let mut arena: Vec<HierarchyNode> = Vec::with_capacity(working.len() + 1);
    let mut visited: HashSet<Ident> = HashSet::new();
    let mut stack: Vec<(Ident, usize)> = Vec::new();

    let synthesized = match candidates.as_slice() {
        [] => return Err(ShapeError::NoRoot),
        [root] => {
            arena.push(HierarchyNode {
                id: root.id.clone(),
                attributes: root.attributes.clone(),
                parent: None,
                children: Vec::new(),
                depth: 0,
            });
            visited.insert(root.id.clone());
            for child in root.children.iter().rev() {
                stack.push((child.clone(), 0));
            }
            false
        }
        _ => {
            debug!(
                candidates = candidates.len(),
                pseudo_root = %options.pseudo_root_id,
                "multiple root candidates, synthesizing pseudo-root"
            );
            arena.push(HierarchyNode {
                id: options.pseudo_root_id.clone(),
                attributes: Attributes::default(),
                parent: None,
                children: Vec::new(),
                depth: 0,
            });
            visited.insert(options.pseudo_root_id.clone());
            for candidate in candidates.iter().rev() {
                stack.push((candidate.id.clone(), 0));
            }
            true
        }
    };

    while let Some((id, parent_index)) = stack.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        let Some(node) = working.get(&id) else {
            // A hint-only id: referenced in a children list but never a node.
            continue;
        };
        let index = arena.len();
        let depth = arena[parent_index].depth + 1;
        arena.push(HierarchyNode {
            id: node.id.clone(),
            attributes: node.attributes.clone(),
            parent: Some(parent_index),
            children: Vec::new(),
            depth,
        });
        arena[parent_index].children.push(index);
        for child in node.children.iter().rev() {
            stack.push((child.clone(), index));
        }
    }

    let materialized = arena.len() - usize::from(synthesized);
    if materialized < working.len() {
        return Err(ShapeError::CycleDetected {
            unreachable: working.len() - materialized,
        });
    }

    debug!(nodes = arena.len(), synthesized = synthesized, "materialized hierarchy");
    Ok(Hierarchy::new(arena))
}

fn is_root_candidate(node: &Node, working: &Tree) -> bool {
    match &node.parent {
        None => true,
        Some(parent) => !working.contains(parent),
    }
}
