//! End-to-end search: load, match, resolve, enrich.

use crate::{
    AppellationColumns, ReferentialColumns, ReferentialIndex, get_rome_details,
    search_in_appellations,
};
use rf_enrichment::{EnrichmentData, EnrichmentTableConfig, enrich_entry};
use rf_error::{Result, RomeError, SearchError};
use rf_reader_csv::load_table;
use rf_types::{DataConfig, EnrichedEntry};
use tracing::{debug, info};

/// Something that can run a keyword search.
///
/// Implemented by [`DataConfig`] for searches over the dataset files; callers
/// that drive searches take this trait so they can be exercised without data.
pub trait JobSearch {
    /// Searches the entries matching `keyword`.
    fn search(&self, keyword: &str) -> Result<Vec<EnrichedEntry>>;
}

impl JobSearch for DataConfig {
    fn search(&self, keyword: &str) -> Result<Vec<EnrichedEntry>> {
        search_rome(keyword, self)
    }
}

/// Rejects empty and whitespace-only keywords.
pub fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        return Err(SearchError::InvalidInput("keyword must be a non-empty string".to_string()).into());
    }
    Ok(())
}

/// Returns the enriched ROME entries whose appellations contain `keyword`.
///
/// Every table is read fresh from `config.data_dir`. Entries are sorted by
/// code.
///
/// # Errors
///
/// - [`SearchError::InvalidInput`] for a blank keyword, before any file is read
/// - [`SearchError::NoMatch`] when no appellation contains the keyword
/// - Reader errors for missing files or columns
pub fn search_rome(keyword: &str, config: &DataConfig) -> Result<Vec<EnrichedEntry>> {
    validate_keyword(keyword)?;
    config.validate().map_err(RomeError::Config)?;

    let appellation_columns = AppellationColumns::default();
    let appellations = load_table(
        config.path_of(&config.files.appellations),
        &[appellation_columns.code.as_str()],
        &config.load,
    )?;

    let referential_columns = ReferentialColumns::default();
    let codes = load_table(
        config.path_of(&config.files.codes),
        &referential_columns.required(),
        &config.load,
    )?;
    let referential = ReferentialIndex::build(&codes, &referential_columns);

    let matching_codes = search_in_appellations(keyword, &appellations, &appellation_columns);
    if matching_codes.is_empty() {
        debug!(keyword = %keyword, "No appellation matched");
        return Err(SearchError::NoMatch {
            keyword: keyword.to_string(),
        }
        .into());
    }

    let details = get_rome_details(&matching_codes, &referential, config.parent_policy)?;

    let enrichment = EnrichmentData::load(&EnrichmentTableConfig::defaults(config), &config.load)?;
    let entries = details
        .iter()
        .map(|entry| enrich_entry(entry, &enrichment))
        .collect::<Result<Vec<_>>>()?;

    info!(
        keyword = %keyword,
        matched_codes = matching_codes.len(),
        entries = entries.len(),
        "Search completed"
    );

    Ok(entries)
}
