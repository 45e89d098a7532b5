//! Formatter module for rendering image lists
//!
//! Two output formats are provided: a single JSON array of images (what the
//! extractor emits) and a line-oriented "diffable" form where every line is
//! prefixed with the owning image's `uuid`.

mod diffable;
mod json_array;
mod util;

pub use diffable::{format_diffable, DiffableFormatter};
pub use json_array::JsonArrayFormatter;
pub use util::{sort_json_value, to_pretty_string, INDENT};

use serde_json::Value;

use crate::error::ImgError;

/// Trait for rendering a list of images already sorted by `uuid`
pub trait Formatter {
    /// Format the images and return a string representation
    fn format(&self, images: &[Value]) -> Result<String, ImgError>;
}
