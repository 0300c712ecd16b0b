//! Interactive prompt loop.

use anyhow::Result;
use rf_cli_common::format_result_count;
use rf_error::{ErrorCategory, classify_error};
use rf_format::{FileOutput, OutputFormat, output_stem};
use rf_search::JobSearch;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::run::no_result_message;

const JOB_PROMPT: &str = "Métier à rechercher (vide pour quitter) : ";
const FORMAT_PROMPT: &str = "Format (md, json, none) [md] : ";

/// Export choice made at the format prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    /// Write a file in this format.
    File(OutputFormat),

    /// Keep the results without writing anything.
    None,
}

impl FromStr for FormatChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "md" => Ok(Self::File(OutputFormat::Markdown)),
            "json" => Ok(Self::File(OutputFormat::Json)),
            "none" => Ok(Self::None),
            other => Err(format!("Format inconnu : {other} (md, json ou none)")),
        }
    }
}

/// Counters for an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Searches run, including those without results.
    pub searches: usize,

    /// Files written, in order.
    pub files: Vec<PathBuf>,
}

/// Runs the interactive loop until an empty job or end of input.
///
/// Each round asks for a job then a format. Empty results and rejected
/// keywords are reported and the loop goes on; other errors end the session.
pub fn run_interactive<S, R, W>(
    searcher: &S,
    output_dir: &Path,
    mut input: R,
    out: &mut W,
) -> Result<SessionStats>
where
    S: JobSearch + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();
    writeln!(out, "Mode interactif activé.")?;

    loop {
        let job = match prompt(&mut input, out, JOB_PROMPT)? {
            Some(job) if !job.is_empty() => job,
            _ => break,
        };
        let Some(choice) = prompt_format(&mut input, out)? else {
            break;
        };

        stats.searches += 1;
        let entries = match searcher.search(&job) {
            Ok(entries) if entries.is_empty() => {
                writeln!(out, "{}", no_result_message(&job))?;
                continue;
            }
            Ok(entries) => entries,
            Err(e) => match classify_error(&e) {
                ErrorCategory::NoResults => {
                    debug!(job = %job, error = %e, "No results");
                    writeln!(out, "{}", no_result_message(&job))?;
                    continue;
                }
                ErrorCategory::InvalidInput => {
                    writeln!(out, "{e}")?;
                    continue;
                }
                ErrorCategory::Fatal => return Err(e.into()),
            },
        };

        let count = format_result_count(entries.len());
        match choice {
            FormatChoice::None => {
                writeln!(
                    out,
                    "Aucun fichier généré pour {job} (format none, {count})"
                )?;
            }
            FormatChoice::File(format) => {
                let path = FileOutput::new(output_dir, format)
                    .write(&output_stem(None, &job), &entries)?;
                writeln!(out, "Fichier généré : {} ({count})", path.display())?;
                stats.files.push(path);
            }
        }
    }

    writeln!(out, "Fin du mode interactif.")?;
    info!(
        searches = stats.searches,
        files = stats.files.len(),
        "Interactive session ended"
    );

    Ok(stats)
}

/// Asks for a format until the answer is valid; `None` at end of input.
fn prompt_format<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<FormatChoice>> {
    while let Some(answer) = prompt(input, out, FORMAT_PROMPT)? {
        match answer.parse() {
            Ok(choice) => return Ok(Some(choice)),
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(None)
}

/// Prints `message` and reads one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
