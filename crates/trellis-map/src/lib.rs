//! Key-mapping layer: declarative field-name configuration.
//!
//! A key map names the source record fields to read for each canonical
//! slot. Shape builders take records plus a key map and never hard-code
//! field names:
//!
//! - **keymap**: field names for node records, edge records, and containers
//! - **extract**: pure helpers copying mapped fields into canonical bags

#![deny(unsafe_code)]

pub mod error;
pub mod extract;
pub mod keymap;

pub use error::KeyMapError;
pub use keymap::{AttributeKeys, EdgeKeyMap, FieldName, GraphKeyMap, NodeKeyMap};
