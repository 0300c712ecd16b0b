//! GroupedTable - one-to-many lookup table using HashMap.

use ahash::RandomState;
use hashbrown::HashMap;
use rf_reader_csv::{Record, Table};

/// Rows of a table grouped by key, using hashbrown with ahash.
///
/// Rows sharing a key keep their file order.
#[derive(Debug, Clone)]
pub struct GroupedTable {
    /// Maps key string to its rows.
    data: HashMap<String, Vec<Record>, RandomState>,

    /// Name of the key field.
    key_field: String,

    /// Total number of rows.
    rows: usize,
}

impl GroupedTable {
    /// Creates a new empty table.
    pub fn new(key_field: impl Into<String>) -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
            key_field: key_field.into(),
            rows: 0,
        }
    }

    /// Groups the rows of `table` by `key_field`.
    ///
    /// Rows without a key are dropped since nothing can join on them.
    pub fn from_table(table: &Table, key_field: &str) -> Self {
        let mut grouped = Self::new(key_field);
        for record in table {
            match record.get(key_field) {
                Some(key) if !key.is_empty() => grouped.insert(key.to_string(), record.clone()),
                _ => {}
            }
        }
        grouped
    }

    /// Appends a row under `key`.
    pub fn insert(&mut self, key: String, record: Record) {
        self.data.entry(key).or_default().push(record);
        self.rows += 1;
    }

    /// Returns the rows for `key`, in file order.
    pub fn get(&self, key: &str) -> &[Record] {
        self.data.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the trimmed, non-empty values of `column` for `key`, in file order.
    pub fn values<'a>(
        &'a self,
        key: &str,
        column: &'a str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.get(key)
            .iter()
            .map(move |record| record.get_or_empty(column).trim())
            .filter(|value| !value.is_empty())
    }

    /// Iterates over keys and their rows, in no particular key order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.data
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// Returns the number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the key field name.
    pub fn key_field(&self) -> &str {
        &self.key_field
    }
}
