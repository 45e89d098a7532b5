use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::ImgError;

/// Limits applied when loading input documents
///
/// No limit is applied unless one is set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadConfig {
    pub max_file_size: Option<u64>,
}

impl LoadConfig {
    pub fn new(max_file_size: Option<u64>) -> Self {
        Self { max_file_size }
    }
}

/// Load and parse a JSON file
///
/// The file must be valid UTF-8 and no larger than the configured limit.
pub fn load_json_file(path: &Path, config: &LoadConfig) -> Result<Value, ImgError> {
    let metadata = fs::metadata(path).map_err(|source| ImgError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    // Check if it's a file (not a directory)
    if !metadata.is_file() {
        return Err(ImgError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a file: {}", path.display()),
            ),
        });
    }

    if let Some(limit) = config.max_file_size {
        if metadata.len() > limit {
            return Err(ImgError::InputTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
    }

    // Read file contents; the handle is closed before parsing starts
    let content = fs::read_to_string(path).map_err(|source| ImgError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ImgError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a reader to the end as UTF-8 text, honoring the size limit
pub fn read_to_string_limited<R: Read>(mut reader: R, config: &LoadConfig) -> Result<String, ImgError> {
    let mut content = String::new();
    let read = match config.max_file_size {
        Some(limit) => reader
            .take(limit.saturating_add(1))
            .read_to_string(&mut content),
        None => reader.read_to_string(&mut content),
    };
    read.map_err(|source| ImgError::InputRead { source })?;

    // At most limit + 1 bytes were read
    if let Some(limit) = config.max_file_size {
        if content.len() as u64 > limit {
            return Err(ImgError::StreamTooLarge { limit });
        }
    }

    Ok(content)
}

/// Load and parse a JSON document from stdin
pub fn load_json_stdin(config: &LoadConfig) -> Result<Value, ImgError> {
    let content = read_to_string_limited(std::io::stdin().lock(), config)?;
    serde_json::from_str(&content).map_err(|source| ImgError::JsonParse {
        path: PathBuf::from("<stdin>"),
        source,
    })
}
