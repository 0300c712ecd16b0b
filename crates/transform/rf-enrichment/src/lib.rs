//! Enrichment of ROME search results.
//!
//! This crate joins the auxiliary ROME datasets onto resolved entries:
//! - [`GroupedTable`] - one-to-many lookup of rows by key, in file order
//! - [`EnrichmentData`] - every auxiliary table plus the category lookup
//! - [`enrich_entry`] - builds an [`EnrichedEntry`](rf_types::EnrichedEntry) from a resolved entry
//!
//! # Example
//!
//! ```rust,ignore
//! use rf_enrichment::{EnrichmentData, EnrichmentTableConfig, enrich_entry};
//! use rf_types::DataConfig;
//!
//! let config = DataConfig::default();
//! let data = EnrichmentData::load(&EnrichmentTableConfig::defaults(&config), &config.load)?;
//! let enriched = enrich_entry(&resolved, &data)?;
//! ```

mod config;
mod grouped_table;
mod joiner;
mod registry;

pub use config::{Dataset, EnrichmentTableConfig};
pub use grouped_table::GroupedTable;
pub use joiner::{enrich_entry, join_interest_center};
pub use registry::{EnrichmentData, EnrichmentStats};
