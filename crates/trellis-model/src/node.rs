#![deny(unsafe_code)]

use crate::{Ident, Value};

/// The canonical attribute bag shared by tree nodes, graph nodes, and edges.
///
/// Every slot is optional; a slot is `None` when the mapped source field was
/// absent from the record.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Attributes {
    pub label: Option<Value>,
    pub value: Option<Value>,
    pub group: Option<Value>,
    pub color: Option<Value>,
    pub order: Option<Value>,
    pub description: Option<Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.value.is_none()
            && self.group.is_none()
            && self.color.is_none()
            && self.order.is_none()
            && self.description.is_none()
    }

    pub fn with_label(mut self, label: impl Into<Value>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<Value>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<Value>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_order(mut self, order: impl Into<Value>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A reconciled tree node.
///
/// `parent` is the final resolved parent after all hints for this id were
/// applied. `children` holds ids only; entries may refer to ids that never
/// became nodes, and consumers skip those during traversal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: Ident,
    #[serde(default)]
    pub parent: Option<Ident>,
    #[serde(default)]
    pub children: Vec<Ident>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<Ident>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            children: Vec::new(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<Ident>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Ident>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A graph node: an identifier plus its attribute bag.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphNode {
    pub id: Ident,
    #[serde(default)]
    pub attributes: Attributes,
}

impl GraphNode {
    pub fn new(id: impl Into<Ident>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A directed edge between two node identifiers.
///
/// Endpoints are not validated against the node list; dangling references
/// pass through for the consumer to interpret.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub source: Ident,
    pub target: Ident,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<Ident>, target: impl Into<Ident>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
