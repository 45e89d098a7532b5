use serde_json::Value;

use crate::error::ImgError;

/// Literal the table dump uses for a Postgres NULL
pub const NULL_MARKER: &str = "\\N";

/// Expected shape of an indexed column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Postgres array literal, e.g. `{a,b,c}`
    Array,
    /// Passed through as-is
    String,
    /// `t` or `f`
    Bool,
}

/// Indexed columns that override the `_value` payload, in the order they
/// are applied
///
/// TODO: derive this from the imgapi_images bucket definition instead of
/// keeping it by hand.
pub const COLUMN_TYPES: &[(&str, ColumnType)] = &[
    ("billing_tags", ColumnType::Array),
    ("published_at", ColumnType::String),
    ("acl", ColumnType::Array),
    ("public", ColumnType::Bool),
];

/// Decode the raw string value of an indexed column
///
/// Returns `Ok(None)` for the NULL marker, meaning the field must be removed
/// from the image.
pub fn decode_column(field: &str, ty: ColumnType, raw: &str) -> Result<Option<Value>, ImgError> {
    if raw == NULL_MARKER {
        return Ok(None);
    }

    let value = match ty {
        ColumnType::Array => match parse_pg_array(raw) {
            Some(items) => Value::Array(items.into_iter().map(Value::String).collect()),
            None => Value::String(raw.to_string()),
        },
        ColumnType::Bool => match raw {
            "t" => Value::Bool(true),
            "f" => Value::Bool(false),
            _ => {
                return Err(ImgError::UnexpectedBool {
                    field: field.to_string(),
                    value: raw.to_string(),
                })
            }
        },
        ColumnType::String => Value::String(raw.to_string()),
    };

    Ok(Some(value))
}

/// Split a `{a,b,c}` array literal into its elements
///
/// Quoting and escaping are not understood: the body is split on every
/// comma and empty elements are dropped. Returns `None` when the value is
/// not brace-delimited.
pub fn parse_pg_array(raw: &str) -> Option<Vec<String>> {
    let body = raw.strip_prefix('{')?.strip_suffix('}')?;
    Some(
        body.split(',')
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
