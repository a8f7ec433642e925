#![deny(unsafe_code)]

use std::fmt;

use crate::KeyMapError;

/// A validated source field name.
///
/// Names are trimmed on construction; empty names are the one configuration
/// error this layer rejects.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> Result<Self, KeyMapError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(KeyMapError::EmptyFieldName(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Constructor for names known to be non-empty, used by the defaults.
    fn known(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source field names feeding the canonical attribute bag.
///
/// Defaults use the canonical slot names themselves, so records that already
/// carry `label`, `color`, etc. need no configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttributeKeys {
    pub label: FieldName,
    pub value: FieldName,
    pub group: FieldName,
    pub color: FieldName,
    pub order: FieldName,
    pub description: FieldName,
}

impl Default for AttributeKeys {
    fn default() -> Self {
        Self {
            label: FieldName::known("label"),
            value: FieldName::known("value"),
            group: FieldName::known("group"),
            color: FieldName::known("color"),
            order: FieldName::known("order"),
            description: FieldName::known("description"),
        }
    }
}

impl AttributeKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot names prefixed with `{prefix}_`, e.g. `source_label` for the
    /// attributes read off an edge record for its source endpoint.
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            label: FieldName::known(format!("{prefix}_label")),
            value: FieldName::known(format!("{prefix}_value")),
            group: FieldName::known(format!("{prefix}_group")),
            color: FieldName::known(format!("{prefix}_color")),
            order: FieldName::known(format!("{prefix}_order")),
            description: FieldName::known(format!("{prefix}_description")),
        }
    }

    pub fn with_label(mut self, label: FieldName) -> Self {
        self.label = label;
        self
    }

    pub fn with_value(mut self, value: FieldName) -> Self {
        self.value = value;
        self
    }

    pub fn with_group(mut self, group: FieldName) -> Self {
        self.group = group;
        self
    }

    pub fn with_color(mut self, color: FieldName) -> Self {
        self.color = color;
        self
    }

    pub fn with_order(mut self, order: FieldName) -> Self {
        self.order = order;
        self
    }

    pub fn with_description(mut self, description: FieldName) -> Self {
        self.description = description;
        self
    }
}

/// Key map for reading tree node records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeKeyMap {
    pub id: FieldName,
    pub parent: FieldName,
    pub children: FieldName,
    pub attributes: AttributeKeys,
}

impl Default for NodeKeyMap {
    fn default() -> Self {
        Self {
            id: FieldName::known("id"),
            parent: FieldName::known("parent"),
            children: FieldName::known("children"),
            attributes: AttributeKeys::default(),
        }
    }
}

impl NodeKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: FieldName) -> Self {
        self.id = id;
        self
    }

    pub fn with_parent(mut self, parent: FieldName) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_children(mut self, children: FieldName) -> Self {
        self.children = children;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeKeys) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Key map for reading edge records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgeKeyMap {
    pub source: FieldName,
    pub target: FieldName,
    pub attributes: AttributeKeys,
}

impl Default for EdgeKeyMap {
    fn default() -> Self {
        Self {
            source: FieldName::known("source"),
            target: FieldName::known("target"),
            attributes: AttributeKeys::default(),
        }
    }
}

impl EdgeKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: FieldName) -> Self {
        self.source = source;
        self
    }

    pub fn with_target(mut self, target: FieldName) -> Self {
        self.target = target;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeKeys) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Key map for graph building.
///
/// Covers both input shapes: collection names for the container form, and
/// the endpoint attribute keys used when nodes are synthesized from edge
/// records alone.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphKeyMap {
    /// Collection holding explicit node records, when the source is a container.
    pub nodes_collection: FieldName,
    /// Collection holding edge records, when the source is a container.
    pub edges_collection: FieldName,
    pub node_id: FieldName,
    pub node_attributes: AttributeKeys,
    pub edge: EdgeKeyMap,
    /// Attributes read off an edge record for its source endpoint.
    pub source_node: AttributeKeys,
    /// Attributes read off an edge record for its target endpoint.
    pub target_node: AttributeKeys,
}

impl Default for GraphKeyMap {
    fn default() -> Self {
        Self {
            nodes_collection: FieldName::known("nodes"),
            edges_collection: FieldName::known("edges"),
            node_id: FieldName::known("id"),
            node_attributes: AttributeKeys::default(),
            edge: EdgeKeyMap::default(),
            source_node: AttributeKeys::prefixed("source"),
            target_node: AttributeKeys::prefixed("target"),
        }
    }
}

impl GraphKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collections(mut self, nodes: FieldName, edges: FieldName) -> Self {
        self.nodes_collection = nodes;
        self.edges_collection = edges;
        self
    }

    pub fn with_node_id(mut self, node_id: FieldName) -> Self {
        self.node_id = node_id;
        self
    }

    pub fn with_node_attributes(mut self, attributes: AttributeKeys) -> Self {
        self.node_attributes = attributes;
        self
    }

    pub fn with_edge(mut self, edge: EdgeKeyMap) -> Self {
        self.edge = edge;
        self
    }

    pub fn with_source_node(mut self, attributes: AttributeKeys) -> Self {
        self.source_node = attributes;
        self
    }

    pub fn with_target_node(mut self, attributes: AttributeKeys) -> Self {
        self.target_node = attributes;
        self
    }
}
