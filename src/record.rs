//! Image record helpers
//!
//! An image record is a JSON object identified by its `uuid` string. Both
//! tools order their output by that identifier.

use serde_json::{Map, Value};

use crate::error::ImgError;

/// A single image manifest
pub type ImageRecord = Map<String, Value>;

/// Name of the identifying field on every image record
pub const UUID_FIELD: &str = "uuid";

/// Look up the `uuid` of an image record
///
/// `index` is the record's position in its batch and is only used for the
/// error message.
pub fn image_uuid(image: &Value, index: usize) -> Result<&str, ImgError> {
    match image.get(UUID_FIELD) {
        None => Err(ImgError::MissingUuid { index }),
        Some(Value::String(uuid)) => Ok(uuid),
        Some(_) => Err(ImgError::InvalidUuid { index }),
    }
}

/// Sort images by `uuid`, ascending
///
/// Every record is checked before anything is reordered, so on error the
/// input order is left untouched. The sort is stable.
pub fn sort_by_uuid(images: &mut [Value]) -> Result<(), ImgError> {
    for (index, image) in images.iter().enumerate() {
        image_uuid(image, index)?;
    }

    images.sort_by(|a, b| uuid_key(a).cmp(uuid_key(b)));
    Ok(())
}

fn uuid_key(image: &Value) -> &str {
    image.get(UUID_FIELD).and_then(Value::as_str).unwrap_or_default()
}
