#![deny(unsafe_code)]

use crate::{Attributes, Ident};

/// Reserved identifier for a synthesized root over a multi-root forest.
pub const PSEUDO_ROOT_ID: &str = "PSEUDO_ROOT";

/// One node of a materialized hierarchy.
///
/// `parent` and `children` are arena indices into the owning [`Hierarchy`],
/// not identifiers. The root has `parent: None` and `depth: 0`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HierarchyNode {
    pub id: Ident,
    pub attributes: Attributes,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A materialized, navigable hierarchy: a single-rooted arena in pre-order.
///
/// The root sits at index 0 and every node's children indices point at later
/// entries. The structure is read-only; it is derived from a tree and never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Wraps an arena produced by a materializer.
    ///
    /// Callers must supply nodes in pre-order with index 0 as the root and
    /// all parent/children indices in range.
    pub fn new(nodes: Vec<HierarchyNode>) -> Self {
        Self { nodes }
    }

    /// The root node.
    ///
    /// # Panics
    ///
    /// Panics if the arena is empty; materializers never produce an empty
    /// hierarchy.
    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[0]
    }

    pub fn node(&self, index: usize) -> Option<&HierarchyNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter()
    }

    /// Arena index of the node with the given id, scanning in pre-order.
    pub fn index_of(&self, id: &Ident) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == *id)
    }

    pub fn parent_of(&self, index: usize) -> Option<&HierarchyNode> {
        let parent = self.nodes.get(index)?.parent?;
        self.nodes.get(parent)
    }

    /// Children of the node at `index`, in stored order.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes
            .get(index)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|&child| self.nodes.get(child))
    }

    pub fn depth_of(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).map(|node| node.depth)
    }
}
