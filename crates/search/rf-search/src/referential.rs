//! ReferentialIndex - O(1) code lookup using HashMap.

use ahash::RandomState;
use hashbrown::HashMap;
use rf_reader_csv::Table;
use rf_types::ReferentialEntry;
use tracing::{debug, info};

/// Column names of the code referential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialColumns {
    pub code: String,
    pub label: String,
    pub parent_code: String,
}

impl Default for ReferentialColumns {
    fn default() -> Self {
        Self {
            code: "code_rome".to_string(),
            label: "libelle_rome".to_string(),
            parent_code: "code_rome_parent".to_string(),
        }
    }
}

impl ReferentialColumns {
    /// Columns a code table must have.
    pub fn required(&self) -> [&str; 3] {
        [&self.code, &self.label, &self.parent_code]
    }
}

/// Code referential indexed by code, using hashbrown with ahash.
#[derive(Debug)]
pub struct ReferentialIndex {
    data: HashMap<String, ReferentialEntry, RandomState>,
}

impl ReferentialIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Builds the index from the code table.
    ///
    /// When a code appears more than once the last row wins.
    pub fn build(table: &Table, columns: &ReferentialColumns) -> Self {
        let mut index = Self::new();
        let mut duplicates = 0;

        for record in table {
            let entry = ReferentialEntry::new(
                record.get_or_empty(&columns.code),
                record.get_or_empty(&columns.label),
                record.get_or_empty(&columns.parent_code),
            );
            if let Some(previous) = index.insert(entry) {
                debug!(code = %previous.code, "Duplicate code, keeping last row");
                duplicates += 1;
            }
        }

        info!(
            entries = index.len(),
            duplicates = duplicates,
            "Built referential index"
        );

        index
    }

    /// Inserts an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: ReferentialEntry) -> Option<ReferentialEntry> {
        self.data.insert(entry.code.clone(), entry)
    }

    /// Looks up a code.
    pub fn get(&self, code: &str) -> Option<&ReferentialEntry> {
        self.data.get(code)
    }

    /// Returns true if the code is indexed.
    pub fn contains(&self, code: &str) -> bool {
        self.data.contains_key(code)
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for ReferentialIndex {
    fn default() -> Self {
        Self::new()
    }
}
