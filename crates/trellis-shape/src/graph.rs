#![deny(unsafe_code)]

use indexmap::IndexMap;
use tracing::debug;
use trellis_map::{extract, GraphKeyMap};
use trellis_model::{Edge, Graph, GraphNode, GraphSource, Ident, Record};

use crate::fields;
use crate::ShapeError;

/// Builds a [`Graph`] from edge records or a keyed container.
///
/// A bare record list is treated as edges and the node list is synthesized
/// from their endpoints. A container must hold the configured edges
/// collection; its nodes collection is optional and, when present, replaces
/// synthesis entirely (no check that edge endpoints appear in it).
pub fn build_graph(source: &GraphSource, keys: &GraphKeyMap) -> Result<Graph, ShapeError> {
    let edge_records = match source {
        GraphSource::Edges(records) => records.as_slice(),
        GraphSource::Container(container) => container
            .collection(keys.edges_collection.as_str())
            .ok_or_else(|| ShapeError::MissingCollection {
                name: keys.edges_collection.as_str().to_string(),
            })?,
    };
    let edges = map_edges(edge_records, keys)?;

    let explicit_nodes = match source {
        GraphSource::Container(container) => container.collection(keys.nodes_collection.as_str()),
        GraphSource::Edges(_) => None,
    };
    let nodes = match explicit_nodes {
        Some(records) => map_nodes(records, keys)?,
        None => synthesize_nodes(edge_records, &edges, keys),
    };

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        synthesized = explicit_nodes.is_none(),
        "built graph"
    );
    Ok(Graph { nodes, edges })
}

fn map_edges(records: &[Record], keys: &GraphKeyMap) -> Result<Vec<Edge>, ShapeError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let source = fields::require_ident(record, &keys.edge.source, index)?;
            let target = fields::require_ident(record, &keys.edge.target, index)?;
            Ok(Edge {
                source,
                target,
                attributes: extract::attributes(record, &keys.edge.attributes),
            })
        })
        .collect()
}

fn map_nodes(records: &[Record], keys: &GraphKeyMap) -> Result<Vec<GraphNode>, ShapeError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = fields::require_ident(record, &keys.node_id, index)?;
            Ok(GraphNode {
                id,
                attributes: extract::attributes(record, &keys.node_attributes),
            })
        })
        .collect()
}

/// Derives the node list from edge endpoints.
///
/// Endpoint attributes are read off the raw edge record through the
/// source/target key sets. Each id appears once, at its first-appearance
/// position; a later edge touching the same id replaces the node's
/// attributes in place.
fn synthesize_nodes(records: &[Record], edges: &[Edge], keys: &GraphKeyMap) -> Vec<GraphNode> {
    let mut nodes: IndexMap<Ident, GraphNode> = IndexMap::new();
    for (record, edge) in records.iter().zip(edges) {
        nodes.insert(
            edge.source.clone(),
            GraphNode {
                id: edge.source.clone(),
                attributes: extract::attributes(record, &keys.source_node),
            },
        );
        nodes.insert(
            edge.target.clone(),
            GraphNode {
                id: edge.target.clone(),
                attributes: extract::attributes(record, &keys.target_node),
            },
        );
    }
    nodes.into_values().collect()
}
