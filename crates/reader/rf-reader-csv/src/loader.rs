//! Loading delimited files into tables.

use crate::{Table, sniff_delimiter};
use rf_error::{ReaderError, Result};
use rf_types::{Decoding, Delimiter, LoadOptions};
use std::path::Path;
use tracing::{debug, info};

/// Loads a delimited file and checks that `required` columns are in its header.
///
/// A file with no header row (empty or blank) yields an empty table without
/// any schema check. A header-only file yields an empty table once the
/// header passes the check.
pub fn load_table(
    path: impl AsRef<Path>,
    required: &[&str],
    options: &LoadOptions,
) -> Result<Table> {
    let path = path.as_ref();
    let source = path.display().to_string();

    if !path.exists() {
        return Err(ReaderError::NotFound(source).into());
    }

    let bytes = std::fs::read(path)
        .map_err(|e| ReaderError::Io(format!("Failed to read {source}: {e}")))?;
    let content = decode(&bytes, options.decoding, &source)?;

    let delimiter = match options.delimiter {
        Delimiter::Auto => sniff_delimiter(&content),
        Delimiter::Fixed(b) => b,
    };

    let table = parse_table(&content, delimiter, required, &source)?;

    info!(
        source = %source,
        delimiter = %(delimiter as char).escape_default(),
        columns = table.columns().len(),
        rows = table.len(),
        "Loaded table"
    );

    Ok(table)
}

/// Decodes raw file bytes as UTF-8.
///
/// With [`Decoding::Lossy`] invalid sequences become U+FFFD; with
/// [`Decoding::Strict`] they fail the load. A leading byte order mark is
/// removed either way.
pub fn decode(bytes: &[u8], decoding: Decoding, source: &str) -> Result<String> {
    let mut content = match decoding {
        Decoding::Strict => String::from_utf8(bytes.to_vec()).map_err(|e| {
            ReaderError::InvalidFormat(format!("{source} is not valid UTF-8: {e}"))
        })?,
        Decoding::Lossy => {
            let decoded = String::from_utf8_lossy(bytes);
            if let std::borrow::Cow::Owned(_) = decoded {
                debug!(source = %source, "Replaced invalid UTF-8 sequences");
            }
            decoded.into_owned()
        }
    };

    if content.starts_with('\u{feff}') {
        content.drain(..'\u{feff}'.len_utf8());
    }

    Ok(content)
}

/// Parses already decoded content into a table.
pub fn parse_table(content: &str, delimiter: u8, required: &[&str], source: &str) -> Result<Table> {
    if content.trim().is_empty() {
        debug!(source = %source, "No header row, returning empty table");
        return Ok(Table::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReaderError::ParseError(format!("Failed to parse headers of {source}: {e}")))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReaderError::Schema {
            file: source.to_string(),
            missing,
        }
        .into());
    }

    let mut table = Table::new(headers);
    for (line_num, record) in reader.records().enumerate() {
        match record {
            Ok(record) => table.push(record.iter().map(|s| s.to_string()).collect()),
            Err(e) => {
                debug!(
                    source = %source,
                    line = line_num + 2, // +2 for 1-indexed and header row
                    error = %e,
                    "Skipping malformed row"
                );
            }
        }
    }

    Ok(table)
}
