use serde_json::Value;

use crate::error::ImgError;
use crate::formatter::{to_pretty_string, Formatter};
use crate::record::{image_uuid, sort_by_uuid};

/// Formatter for the "diffable" output format
///
/// Each image is rendered on its own with sorted keys, and every line of
/// that rendering is prefixed with ` <uuid> `. Images are separated by one
/// blank line. Running a line-based diff over two such outputs lines up
/// corresponding images by their prefix regardless of where they sat in the
/// source arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffableFormatter;

impl DiffableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render a single image as a prefixed block, ending with a newline
    pub fn format_image(&self, image: &Value, index: usize) -> Result<String, ImgError> {
        let uuid = image_uuid(image, index)?;
        let rendered = to_pretty_string(image)?;

        let mut block = String::with_capacity(rendered.len() * 2);
        for line in rendered.lines() {
            block.push(' ');
            block.push_str(uuid);
            block.push(' ');
            block.push_str(line);
            block.push('\n');
        }
        Ok(block)
    }
}

impl Formatter for DiffableFormatter {
    fn format(&self, images: &[Value]) -> Result<String, ImgError> {
        let mut out = String::new();
        for (index, image) in images.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_image(image, index)?);
        }
        Ok(out)
    }
}

/// Sort a parsed JSON array of images by `uuid` and render it diffable
pub fn format_diffable(document: Value) -> Result<String, ImgError> {
    let Value::Array(mut images) = document else {
        return Err(ImgError::NotAnArray);
    };

    sort_by_uuid(&mut images)?;
    tracing::debug!(count = images.len(), "formatting images");
    DiffableFormatter::new().format(&images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_image_prefixes_every_line() {
        let image = json!({"uuid": "a", "x": 2});
        let block = DiffableFormatter::new().format_image(&image, 0).unwrap();

        assert_eq!(
            block,
            concat!(
                " a {\n",
                " a     \"uuid\": \"a\",\n",
                " a     \"x\": 2\n",
                " a }\n",
            )
        );
    }

    #[test]
    fn test_format_separates_with_blank_line() {
        let images = vec![json!({"uuid": "a"}), json!({"uuid": "b"})];
        let out = DiffableFormatter::new().format(&images).unwrap();

        assert_eq!(
            out,
            concat!(
                " a {\n",
                " a     \"uuid\": \"a\"\n",
                " a }\n",
                "\n",
                " b {\n",
                " b     \"uuid\": \"b\"\n",
                " b }\n",
            )
        );
    }

    #[test]
    fn test_format_empty() {
        let out = DiffableFormatter::new().format(&[]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_format_nested_values() {
        let image = json!({"uuid": "u", "files": [{"size": 1, "sha1": "abc"}]});
        let block = DiffableFormatter::new().format_image(&image, 0).unwrap();

        assert!(block.lines().all(|line| line.starts_with(" u ")));
        assert!(block.contains(" u             \"sha1\": \"abc\",\n"));
    }

    #[test]
    fn test_format_diffable_sorts() {
        let out = format_diffable(json!([{"uuid": "b", "x": 1}, {"uuid": "a", "x": 2}])).unwrap();
        let a = out.find(" a {").unwrap();
        let b = out.find(" b {").unwrap();
        assert!(a < b);
        assert_eq!(out.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_format_diffable_not_array() {
        let err = format_diffable(json!({"uuid": "a"})).unwrap_err();
        assert!(matches!(err, ImgError::NotAnArray));
    }

    #[test]
    fn test_format_missing_uuid() {
        let images = vec![json!({"uuid": "a"}), json!({"x": 1})];
        let err = DiffableFormatter::new().format(&images).unwrap_err();
        assert!(matches!(err, ImgError::MissingUuid { index: 1 }));
    }
}
