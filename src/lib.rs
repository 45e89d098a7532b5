//! imgdiff - image manifest extraction and diffing helpers
//!
//! This library backs two command-line tools: `manatee2images`, which turns
//! an imgapi_images table dump into a JSON array of images, and
//! `imgdiffable`, which renders such an array in a uuid-prefixed form suited
//! to line-based diff tools.

pub use error::ImgError;
pub use extract::{extract_images, ColumnType, Header, Row, COLUMN_TYPES};
pub use formatter::{format_diffable, sort_json_value, DiffableFormatter, Formatter, JsonArrayFormatter};
pub use loader::{load_json_file, load_json_stdin, read_to_string_limited, LoadConfig};
pub use record::{image_uuid, sort_by_uuid, ImageRecord};

pub mod cli;
mod error;
pub mod extract;
pub mod formatter;
mod loader;
pub mod logging;
pub mod record;
