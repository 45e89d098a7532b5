use serde::Deserialize;
use serde_json::Value;

use crate::error::ImgError;
use crate::record::ImageRecord;

/// Position of the JSON-encoded image payload in every row
pub const VALUE_COLUMN: usize = 3;

/// Name the header must give the payload column
pub const VALUE_COLUMN_NAME: &str = "_value";

#[derive(Deserialize)]
struct HeaderLine {
    keys: Vec<String>,
}

#[derive(Deserialize)]
struct RowLine {
    entry: Vec<Value>,
}

/// Column names of a table dump, read from its first line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Build a header, checking that the payload column is where it should be
    pub fn new(columns: Vec<String>) -> Result<Self, ImgError> {
        let found = columns.get(VALUE_COLUMN).cloned();
        if found.as_deref() != Some(VALUE_COLUMN_NAME) {
            return Err(ImgError::BadHeader { found });
        }
        Ok(Self { columns })
    }

    /// Parse a `{"keys": [...]}` line
    pub fn parse(line: &str) -> Result<Self, ImgError> {
        let header: HeaderLine =
            serde_json::from_str(line).map_err(|source| ImgError::InvalidLine { line: 1, source })?;
        Self::new(header.keys)
    }

    /// Index of the first column with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// One exported table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    line: usize,
    cells: Vec<Value>,
}

impl Row {
    pub fn new(line: usize, cells: Vec<Value>) -> Self {
        Self { line, cells }
    }

    /// Parse an `{"entry": [...]}` line; `line` is 1-based and only used in errors
    pub fn parse(line: usize, text: &str) -> Result<Self, ImgError> {
        let row: RowLine =
            serde_json::from_str(text).map_err(|source| ImgError::InvalidLine { line, source })?;
        Ok(Self::new(line, row.entry))
    }

    /// Raw string stored at `index`
    pub fn raw(&self, index: usize) -> Result<&str, ImgError> {
        match self.cells.get(index) {
            Some(Value::String(raw)) => Ok(raw),
            Some(other) => Err(self.invalid(format!(
                "column {} holds {} instead of a string",
                index, other
            ))),
            None => Err(self.invalid(format!(
                "column {} is out of range for a row of {} columns",
                index,
                self.cells.len()
            ))),
        }
    }

    /// Decode the `_value` payload into the base image
    pub fn payload(&self) -> Result<ImageRecord, ImgError> {
        let raw = self.raw(VALUE_COLUMN)?;
        let value: Value =
            serde_json::from_str(raw).map_err(|source| ImgError::InvalidLine {
                line: self.line,
                source,
            })?;

        match value {
            Value::Object(image) => Ok(image),
            other => Err(self.invalid(format!("_value is not a JSON object: {}", other))),
        }
    }

    fn invalid(&self, message: String) -> ImgError {
        ImgError::InvalidRow {
            line: self.line,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_parse() {
        let header = Header::parse(r#"{"keys":["_id","_key","_etag","_value","acl"]}"#).unwrap();
        assert_eq!(header.columns().len(), 5);
        assert_eq!(header.position("acl"), Some(4));
        assert_eq!(header.position("public"), None);
    }

    #[test]
    fn test_header_first_occurrence_wins() {
        let header = Header::new(columns(&["a", "acl", "b", "_value", "acl"])).unwrap();
        assert_eq!(header.position("acl"), Some(1));
    }

    #[test]
    fn test_header_wrong_value_column() {
        let err = Header::new(columns(&["_value", "a", "b", "c"])).unwrap_err();
        match err {
            ImgError::BadHeader { found } => assert_eq!(found.as_deref(), Some("c")),
            other => panic!("Expected BadHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_header_too_short() {
        let err = Header::new(columns(&["a", "b"])).unwrap_err();
        assert!(matches!(err, ImgError::BadHeader { found: None }));
    }

    #[test]
    fn test_header_malformed_json() {
        let err = Header::parse(r#"{"keys": ["a""#).unwrap_err();
        assert!(matches!(err, ImgError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_header_missing_keys() {
        let err = Header::parse(r#"{"entry": ["a"]}"#).unwrap_err();
        assert!(matches!(err, ImgError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_row_payload() {
        let row = Row::parse(2, r#"{"entry":["1","k","e","{\"uuid\":\"u1\",\"public\":true}"]}"#).unwrap();
        let image = row.payload().unwrap();
        assert_eq!(image["uuid"], "u1");
        assert_eq!(image["public"], true);
    }

    #[test]
    fn test_row_payload_not_object() {
        let row = Row::new(5, vec![json!("a"), json!("b"), json!("c"), json!("[1,2]")]);
        let err = row.payload().unwrap_err();
        assert!(matches!(err, ImgError::InvalidRow { line: 5, .. }));
    }

    #[test]
    fn test_row_payload_malformed() {
        let row = Row::new(3, vec![json!("a"), json!("b"), json!("c"), json!("{nope")]);
        let err = row.payload().unwrap_err();
        assert!(matches!(err, ImgError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_row_raw_out_of_range() {
        let row = Row::new(2, vec![json!("a")]);
        assert!(matches!(row.raw(3), Err(ImgError::InvalidRow { line: 2, .. })));
    }

    #[test]
    fn test_row_raw_not_string() {
        let row = Row::new(2, vec![json!(null), json!(1)]);
        assert!(matches!(row.raw(0), Err(ImgError::InvalidRow { .. })));
        assert!(matches!(row.raw(1), Err(ImgError::InvalidRow { .. })));
    }
}
