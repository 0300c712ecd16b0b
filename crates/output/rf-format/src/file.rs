//! File output for rendered search results.

use crate::OutputFormat;
use rf_error::{Result, RomeError};
use rf_types::EnrichedEntry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default directory results are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Writes renderings to `{output_dir}/{stem}.{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl FileOutput {
    /// Creates a file output for the given directory and format.
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Path the rendering for `stem` is written to.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}.{}", self.format.extension()))
    }

    /// Renders `entries` and writes them to [`path_for`](Self::path_for),
    /// creating the output directory if needed. An existing file is replaced.
    pub fn write(&self, stem: &str, entries: &[EnrichedEntry]) -> Result<PathBuf> {
        let content = self.format.render(entries)?;
        let path = self.path_for(stem);

        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            RomeError::Output(format!(
                "cannot create {}: {e}",
                self.output_dir.display()
            ))
        })?;
        std::fs::write(&path, content)
            .map_err(|e| RomeError::Output(format!("cannot write {}: {e}", path.display())))?;

        info!(
            path = %path.display(),
            format = %self.format,
            entries = entries.len(),
            "Wrote results"
        );

        Ok(path)
    }
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, OutputFormat::default())
    }
}

/// File stem for a job's output.
///
/// Uses the stem of `name` when given (so `result.json` gives `result`),
/// otherwise the stem of `job`, falling back to `job` itself when no stem can
/// be taken.
pub fn output_stem(name: Option<&str>, job: &str) -> String {
    let source = name.filter(|n| !n.trim().is_empty()).unwrap_or(job);
    Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(job)
        .to_string()
}
