pub mod dataset;
pub mod graph;
pub mod hierarchy;
pub mod ident;
pub mod node;
pub mod tree;
pub mod value;

pub use dataset::DataShape;
pub use graph::{Graph, GraphContainer, GraphSource};
pub use hierarchy::{Hierarchy, HierarchyNode, PSEUDO_ROOT_ID};
pub use ident::Ident;
pub use node::{Attributes, Edge, GraphNode, Node};
pub use tree::Tree;
pub use value::{Record, Value};
