#![deny(unsafe_code)]

use crate::{Graph, Tree};

/// A normalized dataset: either tree-shaped or graph-shaped.
///
/// The two shapes share the attribute model but have disjoint operations, so
/// consumers match on the variant instead of probing a common interface.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DataShape {
    Tree(Tree),
    Graph(Graph),
}

impl DataShape {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tree(_) => "tree",
            Self::Graph(_) => "graph",
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, Self::Tree(_))
    }

    pub fn is_graph(&self) -> bool {
        matches!(self, Self::Graph(_))
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Graph(_) => None,
        }
    }

    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            Self::Graph(graph) => Some(graph),
            Self::Tree(_) => None,
        }
    }

    pub fn into_tree(self) -> Option<Tree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Graph(_) => None,
        }
    }

    pub fn into_graph(self) -> Option<Graph> {
        match self {
            Self::Graph(graph) => Some(graph),
            Self::Tree(_) => None,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Tree(tree) => tree.len(),
            Self::Graph(graph) => graph.node_count(),
        }
    }
}

impl From<Tree> for DataShape {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

impl From<Graph> for DataShape {
    fn from(graph: Graph) -> Self {
        Self::Graph(graph)
    }
}
