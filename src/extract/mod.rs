//! Record extraction from a table dump
//!
//! A dump is line-delimited JSON: one `{"keys": [...]}` header followed by
//! one `{"entry": [...]}` object per row. Each row's `_value` column holds
//! the image manifest; a handful of indexed columns (see [`COLUMN_TYPES`])
//! carry typed overrides that are applied on top of it.

mod column;
mod dump;

pub use column::{decode_column, parse_pg_array, ColumnType, COLUMN_TYPES, NULL_MARKER};
pub use dump::{Header, Row, VALUE_COLUMN, VALUE_COLUMN_NAME};

use std::io::BufRead;

use serde_json::Value;

use crate::error::ImgError;
use crate::record::{sort_by_uuid, ImageRecord};

/// Overlay the indexed column values of `row` onto `image`
///
/// Columns missing from the header are skipped. A NULL marker removes the
/// field from the image.
pub fn apply_index_columns(image: &mut ImageRecord, row: &Row, header: &Header) -> Result<(), ImgError> {
    for (field, ty) in COLUMN_TYPES {
        let Some(index) = header.position(field) else {
            tracing::debug!(field, "column not in header, skipping");
            continue;
        };

        match decode_column(field, *ty, row.raw(index)?)? {
            Some(value) => {
                image.insert(field.to_string(), value);
            }
            None => {
                image.shift_remove(*field);
            }
        }
    }

    Ok(())
}

/// Build the image for a single row
pub fn extract_image(row: &Row, header: &Header) -> Result<ImageRecord, ImgError> {
    let mut image = row.payload()?;
    apply_index_columns(&mut image, row, header)?;
    Ok(image)
}

/// Read a whole dump and return its images sorted by `uuid`
///
/// An empty dump yields no images.
pub fn extract_images<R: BufRead>(reader: R) -> Result<Vec<Value>, ImgError> {
    let mut header: Option<Header> = None;
    let mut images = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ImgError::InputRead { source })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let line_no = index + 1;

        match &header {
            None => {
                let parsed = Header::parse(line)?;
                tracing::debug!(columns = ?parsed.columns(), "read dump header");
                header = Some(parsed);
            }
            Some(header) => {
                let row = Row::parse(line_no, line)?;
                let image = extract_image(&row, header)?;
                images.push(Value::Object(image));
            }
        }
    }

    tracing::debug!(count = images.len(), "extracted images");
    sort_by_uuid(&mut images)?;
    Ok(images)
}
