//! Error types and classification for rome-finder.
//!
//! This crate provides:
//! - [`RomeError`] - Top-level error enum for every stage of a search
//! - Domain-specific errors ([`ReaderError`], [`SearchError`], [`EnrichmentError`])
//! - [`ErrorCategory`] so callers can tell an empty result apart from broken input

use thiserror::Error;

/// Top-level error type for rome-finder.
#[derive(Error, Debug)]
pub enum RomeError {
    /// Reader errors (file access, decoding, schema)
    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Search errors (keyword validation, matching, parent resolution)
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Enrichment errors (join key)
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rendering or writing results failed
    #[error("Output error: {0}")]
    Output(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reader-related errors.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// File not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// File content cannot be decoded
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// I/O error during read
    #[error("I/O error: {0}")]
    Io(String),

    /// Header could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Required columns are missing from the header
    #[error("Schema error: missing column(s) {} in {file}", .missing.join(", "))]
    Schema {
        /// File the header was read from.
        file: String,
        /// Required columns absent from the header.
        missing: Vec<String>,
    },
}

/// Search-related errors.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Keyword is empty or whitespace only
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Keyword matched no appellation
    #[error("No ROME entry matches keyword '{keyword}'")]
    NoMatch { keyword: String },

    /// Parent code referenced by an entry is absent from the referential
    #[error("Parent code '{parent}' of '{code}' not found in referential")]
    KeyNotFound { code: String, parent: String },
}

/// Enrichment-related errors.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// Entry has no code to join on
    #[error("Missing join key: {0}")]
    MissingKey(String),
}

/// Error classification for caller-facing handling.
///
/// Used to decide whether to show a polite message, prompt again, or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The search ran but nothing matched
    ///
    /// Examples: keyword "astronaut" against a dataset without such job
    NoResults,

    /// The keyword was rejected before any file was read
    InvalidInput,

    /// Anything else - abort and report
    ///
    /// Examples: missing file, missing column, undecodable bytes in strict mode
    Fatal,
}

impl ErrorCategory {
    /// Returns true when the caller may recover by asking for another keyword.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, Self::Fatal)
    }
}

/// Classifies an error to determine how the caller should react.
pub fn classify_error(error: &RomeError) -> ErrorCategory {
    match error {
        RomeError::Search(e) => classify_search_error(e),
        RomeError::Reader(_) => ErrorCategory::Fatal,
        RomeError::Enrichment(_) => ErrorCategory::Fatal,
        RomeError::Config(_) => ErrorCategory::Fatal,
        RomeError::Output(_) => ErrorCategory::Fatal,
        RomeError::Other(_) => ErrorCategory::Fatal,
    }
}

fn classify_search_error(error: &SearchError) -> ErrorCategory {
    match error {
        SearchError::NoMatch { .. } => ErrorCategory::NoResults,
        SearchError::InvalidInput(_) => ErrorCategory::InvalidInput,
        SearchError::KeyNotFound { .. } => ErrorCategory::Fatal,
    }
}

/// Result type alias using RomeError.
pub type Result<T> = std::result::Result<T, RomeError>;
