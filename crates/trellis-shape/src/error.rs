#![deny(unsafe_code)]

use trellis_model::Ident;

/// Errors from shape building and traversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A record lacks its identifier field, or the cell is blank.
    #[error("record {index} is missing identifier field {field:?}")]
    MissingIdentifier { field: String, index: usize },

    /// The value in an identifier position is not text or an integer.
    #[error("record {index} field {field:?} does not hold an identifier")]
    InvalidIdentifier { field: String, index: usize },

    /// The children field holds something other than a list.
    #[error("record {index} field {field:?} does not hold a children list")]
    InvalidChildren { field: String, index: usize },

    /// The container has no collection under the configured edges name.
    #[error("container is missing collection {name:?}")]
    MissingCollection { name: String },

    /// The requested id is not present in the tree.
    #[error("id not found in tree: {id}")]
    NotFound { id: Ident },

    /// No node qualifies as a root after parent resolution.
    #[error("tree has no root candidate")]
    NoRoot,

    /// Some nodes never connect to the root; their parent links loop.
    #[error("{unreachable} node(s) unreachable from the root; parent links form a cycle")]
    CycleDetected { unreachable: usize },
}

pub type Result<T> = std::result::Result<T, ShapeError>;
