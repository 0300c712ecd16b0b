//! CLI argument definitions for code-rome.

use clap::{Parser, ValueEnum};
use rf_cli_common::LogLevel;
use rf_format::{DEFAULT_OUTPUT_DIR, FileOutput, OutputFormat};
use rf_types::{DEFAULT_DATA_DIR, DataConfig, Decoding, Delimiter, LoadOptions, ParentPolicy};
use std::path::PathBuf;

/// Search the ROME occupational classification by job keyword.
///
/// Matches the keyword against job appellations, resolves each matching
/// ROME code with its parent, joins the auxiliary datasets and writes the
/// result to `{output-dir}/{name}.{md|json}`.
///
/// Without a job, starts an interactive session.
///
/// ## Examples
///
/// Markdown export to output/devops.md:
///   code-rome devops
///
/// JSON export to output/resultats.json:
///   code-rome "ingénieur" -o resultats -f json
///
/// Semicolon-separated dataset elsewhere:
///   code-rome plombier --data-dir /srv/rome --delimiter semicolon
#[derive(Parser, Debug)]
#[command(name = "code-rome")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Job keyword to search (interactive mode when omitted)
    pub job: Option<String>,

    // === Output Options ===
    /// Output file name; only its stem is used
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: FormatArg,

    /// Directory output files are written to
    #[arg(long, env = "ROME_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    // === Dataset Options ===
    /// Directory holding the ROME CSV files
    #[arg(long, env = "ROME_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Field delimiter: auto, comma, semicolon, tab, pipe or a single character
    #[arg(long, default_value = "auto")]
    pub delimiter: Delimiter,

    /// Reject files that are not valid UTF-8 instead of replacing bad bytes
    #[arg(long)]
    pub strict_decoding: bool,

    /// Fail when a parent code is missing from the referential
    #[arg(long)]
    pub strict_parents: bool,

    // === Logging Options ===
    /// Enable verbose output (same as --log-level info)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Dataset configuration built from the arguments.
    pub fn data_config(&self) -> DataConfig {
        let decoding = if self.strict_decoding {
            Decoding::Strict
        } else {
            Decoding::Lossy
        };
        let parent_policy = if self.strict_parents {
            ParentPolicy::Strict
        } else {
            ParentPolicy::Lenient
        };

        DataConfig::new()
            .with_data_dir(&self.data_dir)
            .with_load_options(
                LoadOptions::new()
                    .with_delimiter(self.delimiter)
                    .with_decoding(decoding),
            )
            .with_parent_policy(parent_policy)
    }

    /// File output built from the arguments.
    pub fn file_output(&self) -> FileOutput {
        FileOutput::new(&self.output_dir, self.format.into())
    }

    /// Effective log level.
    pub fn effective_log_level(&self) -> LogLevel {
        self.log_level.with_verbose(self.verbose)
    }
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Markdown bullet list
    Md,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Md => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
