//! EnrichmentData - holds every auxiliary dataset of one search.

use crate::{Dataset, EnrichmentTableConfig, GroupedTable};
use ahash::RandomState;
use hashbrown::HashMap;
use rf_error::Result;
use rf_reader_csv::load_table;
use rf_types::LoadOptions;
use tracing::info;

/// Auxiliary tables of a search, grouped by join key.
///
/// The category lookup (`code_arborescence` to label) is built once at load
/// time and shared by every entry enriched from this data.
#[derive(Debug, Default)]
pub struct EnrichmentData {
    /// Tables by dataset.
    tables: HashMap<Dataset, GroupedTable, RandomState>,

    /// Interest-center category labels by category code.
    categories: HashMap<String, String, RandomState>,
}

impl EnrichmentData {
    /// Creates an empty data set; every join yields nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all tables from configuration.
    ///
    /// # Arguments
    ///
    /// * `configs` - List of table configurations
    /// * `options` - Delimiter and decoding options applied to every file
    ///
    /// # Returns
    ///
    /// Fully loaded EnrichmentData. Any missing file or key column fails the
    /// load, including `code_arborescence` on the category table.
    pub fn load(configs: &[EnrichmentTableConfig], options: &LoadOptions) -> Result<Self> {
        let mut data = Self::new();

        for config in configs {
            let table = load_table(&config.source, &[config.key_field.as_str()], options)?;
            data.add_table(config.dataset, GroupedTable::from_table(&table, &config.key_field));
        }

        let stats = data.stats();
        info!(
            tables = stats.table_count,
            rows = stats.row_count,
            categories = stats.category_count,
            "Loaded enrichment data"
        );

        Ok(data)
    }

    /// Adds a table to the data set.
    ///
    /// Adding the category table rebuilds the category lookup.
    pub fn add_table(&mut self, dataset: Dataset, table: GroupedTable) {
        if dataset == Dataset::ArborescenceCentres {
            self.categories = build_category_lookup(&table);
        }
        self.tables.insert(dataset, table);
    }

    /// Gets a table by dataset.
    pub fn table(&self, dataset: Dataset) -> Option<&GroupedTable> {
        self.tables.get(&dataset)
    }

    /// Returns the trimmed, non-empty values of `dataset` for `code`, in file order.
    ///
    /// Unloaded datasets yield nothing.
    pub fn values(&self, dataset: Dataset, code: &str) -> Vec<String> {
        self.table(dataset)
            .map(|table| {
                table
                    .values(code, dataset.value_column())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the first trimmed, non-empty value of `dataset` for `code`.
    pub fn first_value(&self, dataset: Dataset, code: &str) -> Option<&str> {
        self.table(dataset)
            .and_then(|table| table.values(code, dataset.value_column()).next())
    }

    /// Returns the label of an interest-center category.
    pub fn category_label(&self, category_code: &str) -> Option<&str> {
        self.categories
            .get(category_code)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Returns summary statistics about the loaded data.
    pub fn stats(&self) -> EnrichmentStats {
        EnrichmentStats {
            table_count: self.tables.len(),
            row_count: self.tables.values().map(|t| t.len()).sum(),
            category_count: self.categories.len(),
        }
    }
}

/// Last row wins when a category code repeats.
fn build_category_lookup(table: &GroupedTable) -> HashMap<String, String, RandomState> {
    let column = Dataset::ArborescenceCentres.value_column();
    let mut lookup = HashMap::with_hasher(RandomState::new());
    for (code, records) in table.groups() {
        if let Some(record) = records.last() {
            lookup.insert(code.to_string(), record.get_or_empty(column).trim().to_string());
        }
    }
    lookup
}

/// Statistics about loaded enrichment data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Number of loaded tables.
    pub table_count: usize,
    /// Total rows across all tables.
    pub row_count: usize,
    /// Number of interest-center categories.
    pub category_count: usize,
}
