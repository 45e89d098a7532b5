use serde_json::Value;

use crate::error::ImgError;
use crate::formatter::{to_pretty_string, Formatter};

/// Formatter for the extractor's output: one pretty-printed JSON array
///
/// Keys are sorted within every image and the document ends with a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonArrayFormatter;

impl JsonArrayFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonArrayFormatter {
    fn format(&self, images: &[Value]) -> Result<String, ImgError> {
        let mut out = to_pretty_string(&Value::Array(images.to_vec()))?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_empty() {
        let out = JsonArrayFormatter::new().format(&[]).unwrap();
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_format_sorts_keys() {
        let images = vec![json!({"uuid": "u1", "name": "base", "acl": ["o1"]})];
        let out = JsonArrayFormatter::new().format(&images).unwrap();

        assert_eq!(
            out,
            concat!(
                "[\n",
                "    {\n",
                "        \"acl\": [\n",
                "            \"o1\"\n",
                "        ],\n",
                "        \"name\": \"base\",\n",
                "        \"uuid\": \"u1\"\n",
                "    }\n",
                "]\n",
            )
        );
    }

    #[test]
    fn test_format_keeps_image_order() {
        let images = vec![json!({"uuid": "b"}), json!({"uuid": "a"})];
        let out = JsonArrayFormatter::new().format(&images).unwrap();

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"uuid": "b"}, {"uuid": "a"}]));
    }
}
