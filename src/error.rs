use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for imgdiff operations
#[derive(Debug, Error)]
pub enum ImgError {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input: {source}")]
    InputRead { source: std::io::Error },

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse line {line}: {source}")]
    InvalidLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Invalid header: expected column 3 to be \"_value\", found {found:?}")]
    BadHeader { found: Option<String> },

    #[error("Invalid row on line {line}: {message}")]
    InvalidRow { line: usize, message: String },

    #[error("unexpected index value for \"{field}\" bool field: {value:?}")]
    UnexpectedBool { field: String, value: String },

    #[error("Image at index {index} has no \"uuid\" field")]
    MissingUuid { index: usize },

    #[error("Image at index {index} has a non-string \"uuid\"")]
    InvalidUuid { index: usize },

    #[error("Expected a JSON array of images")]
    NotAnArray,

    #[error("Input {path} is {size} bytes, which exceeds the limit of {limit} bytes")]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Input on stdin is more than {limit} bytes")]
    StreamTooLarge { limit: u64 },

    #[error("Failed to serialize JSON: {source}")]
    Serialize { source: serde_json::Error },
}
