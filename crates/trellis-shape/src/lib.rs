//! Shape builders: flat records in, navigable structures out.
//!
//! Everything here is a pure function over its inputs:
//!
//! - **tree**: reconcile records with parent/children hints into a tree
//! - **graph**: map edge records or a keyed container into a graph
//! - **hierarchy**: materialize a tree into a rooted, depth-annotated arena
//! - **subtree**: select a node and its descendants as a new tree
//!
//! # Example
//!
//! ```ignore
//! use trellis_map::NodeKeyMap;
//! use trellis_shape::{build_tree, materialize_hierarchy, HierarchyOptions};
//!
//! let tree = build_tree(&records, &NodeKeyMap::default())?;
//! let hierarchy = materialize_hierarchy(&tree, &HierarchyOptions::default())?;
//! ```

#![deny(unsafe_code)]

pub mod error;
mod fields;
pub mod graph;
pub mod hierarchy;
pub mod subtree;
pub mod tree;

pub use error::{Result, ShapeError};
pub use graph::build_graph;
pub use hierarchy::{materialize_hierarchy, HierarchyOptions};
pub use subtree::select_subtree;
pub use tree::build_tree;
