//! Rendering of enriched ROME entries.
//!
//! - [`format_as_markdown`] - bullet list under a fixed heading
//! - [`format_as_json`] - pretty-printed array with the dataset field names
//! - [`FileOutput`] - writes a rendering under an output directory

mod file;
mod format;

pub use file::{DEFAULT_OUTPUT_DIR, FileOutput, output_stem};
pub use format::{
    MARKDOWN_HEADING, NO_RESULT_LINE, OutputFormat, format_as_json, format_as_markdown,
};
