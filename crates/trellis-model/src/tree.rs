#![deny(unsafe_code)]

use indexmap::IndexMap;

use crate::{Ident, Node};

/// A reconciled tree: nodes keyed by id, in first-appearance order.
///
/// Later nodes with an already-present id replace the earlier node but keep
/// its position. Equality ignores order; two trees are equal when they hold
/// the same nodes under the same ids.
///
/// Serializes as a sequence of nodes (each node carries its own id) and
/// deserializes from the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: IndexMap<Ident, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from nodes in order, applying the replace-keep-position
    /// rule to duplicate ids.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut tree = Self::new();
        for node in nodes {
            tree.insert(node);
        }
        tree
    }

    /// Inserts a node keyed by its id, returning the node it replaced.
    ///
    /// A new id appends at the end; an existing id keeps its position.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id.clone(), node)
    }

    pub fn get(&self, id: &Ident) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &Ident) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &Ident> {
        self.nodes.keys()
    }

    /// Nodes in stored order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Node)> {
        self.nodes.iter()
    }

    /// Nodes without a parent link. Note that a node whose parent id never
    /// became a node still carries `Some(parent)` here; resolving that case
    /// is the hierarchy materializer's concern.
    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|node| node.is_root())
    }
}

impl FromIterator<Node> for Tree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl IntoIterator for Tree {
    type Item = Node;
    type IntoIter = indexmap::map::IntoValues<Ident, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_values()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a Ident, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, Ident, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl serde::Serialize for Tree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes.values())
    }
}

impl<'de> serde::Deserialize<'de> for Tree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes = Vec::<Node>::deserialize(deserializer)?;
        Ok(Self::from_nodes(nodes))
    }
}
