#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{Edge, GraphNode, Ident, Record};

/// A graph: node list plus edge list.
///
/// Node order follows first endpoint appearance (or the explicit node
/// collection); edge order follows the edge records.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &Ident) -> bool {
        self.nodes.iter().any(|node| node.id == *id)
    }

    pub fn node(&self, id: &Ident) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == *id)
    }
}

/// Raw input for graph building.
///
/// A bare record list is read as edge records; a container holds named
/// collections with nodes and edges looked up by configured names.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum GraphSource {
    Edges(Vec<Record>),
    Container(GraphContainer),
}

impl From<Vec<Record>> for GraphSource {
    fn from(records: Vec<Record>) -> Self {
        Self::Edges(records)
    }
}

impl From<GraphContainer> for GraphSource {
    fn from(container: GraphContainer) -> Self {
        Self::Container(container)
    }
}

/// Named record collections, as loaded from a keyed document.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GraphContainer {
    collections: BTreeMap<String, Vec<Record>>,
}

impl GraphContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.collections.insert(name.into(), records);
        self
    }

    pub fn collection(&self, name: &str) -> Option<&[Record]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }
}
