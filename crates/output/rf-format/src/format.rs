//! Output formats for search results.

use rf_error::{Result, RomeError};
use rf_types::EnrichedEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First line of every Markdown rendering.
pub const MARKDOWN_HEADING: &str = "## Résultats de la recherche ROME";

/// Bullet rendered when there is nothing to list.
pub const NO_RESULT_LINE: &str = "- Aucun résultat";

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Markdown bullet list (default)
    #[default]
    #[serde(rename = "md")]
    Markdown,

    /// Pretty-printed JSON array
    #[serde(rename = "json")]
    Json,
}

impl OutputFormat {
    /// File extension used for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Renders `entries` in this format.
    pub fn render(self, entries: &[EnrichedEntry]) -> Result<String> {
        match self {
            Self::Markdown => Ok(format_as_markdown(entries)),
            Self::Json => format_as_json(entries),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected md or json)")),
        }
    }
}

/// Renders entries as a Markdown list.
///
/// One `- [code] label (parent: parent label)` bullet per entry, in input
/// order. Lines are joined with `\n` and there is no trailing newline.
pub fn format_as_markdown(entries: &[EnrichedEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(MARKDOWN_HEADING.to_string());

    if entries.is_empty() {
        lines.push(NO_RESULT_LINE.to_string());
    } else {
        lines.extend(entries.iter().map(|entry| {
            format!(
                "- [{}] {} (parent: {})",
                entry.code, entry.label, entry.parent_label
            )
        }));
    }

    lines.join("\n")
}

/// Renders entries as a pretty-printed JSON array with two-space indentation.
///
/// Non-ASCII characters are written as-is.
pub fn format_as_json(entries: &[EnrichedEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| RomeError::Output(format!("JSON serialization failed: {e}")))
}
