//! Record and Table - rows of a delimited file addressed by column name.

use std::sync::Arc;

/// A row of a delimited file.
///
/// Stores column values indexed by position, with shared column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Column values indexed by position.
    values: Vec<String>,

    /// Reference to column names (shared across all rows in table).
    columns: Arc<Vec<String>>,
}

impl Record {
    /// Creates a new record.
    pub fn new(values: Vec<String>, columns: Arc<Vec<String>>) -> Self {
        Self { values, columns }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets a value by column name.
    ///
    /// Returns `None` when the column is unknown or the row is shorter than the header.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
            .map(|s| s.as_str())
    }

    /// Gets a value by column name, treating absence as an empty string.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Returns the column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// All rows of one delimited file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names from the header row; empty when the file had no header.
    columns: Arc<Vec<String>>,

    records: Vec<Record>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: Arc::new(columns),
            records: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, values: Vec<String>) {
        self.records
            .push(Record::new(values, Arc::clone(&self.columns)));
    }

    /// Returns the column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the header contains `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Returns the rows in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
