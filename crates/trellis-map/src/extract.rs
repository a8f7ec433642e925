#![deny(unsafe_code)]

//! Record field extraction through a key map.
//!
//! Extraction is copy-only: values move from source fields into canonical
//! slots without coercion, and absent fields stay absent.

use trellis_model::{Attributes, Record, Value};

use crate::keymap::{AttributeKeys, FieldName};

/// Reads the mapped field from a record, if present.
pub fn field<'a>(record: &'a Record, key: &FieldName) -> Option<&'a Value> {
    record.get(key.as_str())
}

/// Builds the canonical attribute bag for one record.
pub fn attributes(record: &Record, keys: &AttributeKeys) -> Attributes {
    Attributes {
        label: field(record, &keys.label).cloned(),
        value: field(record, &keys.value).cloned(),
        group: field(record, &keys.group).cloned(),
        color: field(record, &keys.color).cloned(),
        order: field(record, &keys.order).cloned(),
        description: field(record, &keys.description).cloned(),
    }
}
