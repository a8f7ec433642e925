#![deny(unsafe_code)]

use trellis_map::{extract, FieldName};
use trellis_model::{Ident, Record};

use crate::ShapeError;

/// Reads a required identifier from a record.
///
/// Absent and blank cells both fail; so do values that are not text or
/// integers.
pub(crate) fn require_ident(
    record: &Record,
    key: &FieldName,
    index: usize,
) -> Result<Ident, ShapeError> {
    let Some(value) = extract::field(record, key) else {
        return Err(ShapeError::MissingIdentifier {
            field: key.as_str().to_string(),
            index,
        });
    };
    if value.is_blank() {
        return Err(ShapeError::MissingIdentifier {
            field: key.as_str().to_string(),
            index,
        });
    }
    value.as_ident().ok_or_else(|| ShapeError::InvalidIdentifier {
        field: key.as_str().to_string(),
        index,
    })
}

/// Reads an optional identifier from a record.
///
/// Absent and blank cells yield `None`; present non-identifier values are
/// an error rather than silently dropped.
pub(crate) fn optional_ident(
    record: &Record,
    key: &FieldName,
    index: usize,
) -> Result<Option<Ident>, ShapeError> {
    let Some(value) = extract::field(record, key) else {
        return Ok(None);
    };
    if value.is_blank() {
        return Ok(None);
    }
    match value.as_ident() {
        Some(ident) => Ok(Some(ident)),
        None => Err(ShapeError::InvalidIdentifier {
            field: key.as_str().to_string(),
            index,
        }),
    }
}
