use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::ImgError;

/// Indentation used for every rendered JSON document
pub const INDENT: &[u8] = b"    ";

/// Recursively sort a JSON value's keys alphabetically
///
/// Objects are sorted at every level of nesting; array order is preserved.
pub fn sort_json_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted_map = Map::new();
            for (key, child) in entries {
                sorted_map.insert(key.clone(), sort_json_value(child));
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_json_value).collect()),
        _ => value.clone(),
    }
}

/// Render a value as JSON with sorted keys and four-space indentation
pub fn to_pretty_string(value: &Value) -> Result<String, ImgError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sort_json_value(value)
        .serialize(&mut serializer)
        .map_err(|source| ImgError::Serialize { source })?;

    String::from_utf8(buf).map_err(|e| ImgError::Serialize {
        source: serde_json::Error::custom(e),
    })
}
