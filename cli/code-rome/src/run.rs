//! One-shot execution logic for code-rome.

use anyhow::Result;
use rf_error::{ErrorCategory, classify_error};
use rf_format::{FileOutput, output_stem};
use rf_search::JobSearch;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// What a single search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Results were written to `path`.
    Written { path: PathBuf, count: usize },

    /// The search matched nothing; no file was written.
    NoResults,
}

/// Message printed when a search matches nothing.
pub fn no_result_message(job: &str) -> String {
    format!("Aucun résultat trouvé pour {job}")
}

/// Runs one search and writes its rendering.
///
/// An empty result prints [`no_result_message`] to `out` and creates no file.
/// Otherwise the rendering goes to `{output_dir}/{stem}.{ext}`, where `stem`
/// comes from `name` or the job, and the chosen path is printed.
/// Errors other than an empty result are returned unchanged.
pub fn execute<S, W>(
    searcher: &S,
    job: &str,
    name: Option<&str>,
    output: &FileOutput,
    out: &mut W,
) -> Result<Outcome>
where
    S: JobSearch + ?Sized,
    W: Write,
{
    let entries = match searcher.search(job) {
        Ok(entries) => entries,
        Err(e) if classify_error(&e) == ErrorCategory::NoResults => {
            info!(job = %job, error = %e, "No results");
            writeln!(out, "{}", no_result_message(job))?;
            return Ok(Outcome::NoResults);
        }
        Err(e) => return Err(e.into()),
    };

    if entries.is_empty() {
        info!(job = %job, "Search returned an empty result set");
        writeln!(out, "{}", no_result_message(job))?;
        return Ok(Outcome::NoResults);
    }

    let path = output.write(&output_stem(name, job), &entries)?;
    info!(job = %job, results = entries.len(), "Prepared results for export");
    writeln!(
        out,
        "Selected job is {job} and output file is {}",
        path.display()
    )?;

    Ok(Outcome::Written {
        path,
        count: entries.len(),
    })
}
