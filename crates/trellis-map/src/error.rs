//! Error types for key-map configuration.

use std::fmt;

/// Errors from building a key map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMapError {
    /// Source field name empty after trimming.
    EmptyFieldName(String),
}

impl fmt::Display for KeyMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFieldName(name) => write!(f, "Empty source field name: {name:?}"),
        }
    }
}

impl std::error::Error for KeyMapError {}
