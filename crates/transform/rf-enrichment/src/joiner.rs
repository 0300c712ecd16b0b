//! Joins auxiliary datasets onto resolved entries.

use crate::{Dataset, EnrichmentData};
use rf_error::{EnrichmentError, Result};
use rf_types::{EnrichedEntry, Enrichment, ResolvedEntry};
use tracing::debug;

/// Column linking an interest center to its category.
const CATEGORY_COLUMN: &str = "code_arborescence";

/// Returns a copy of `entry` enriched with every auxiliary dataset.
///
/// Codes absent from a dataset get an empty string or list for that field.
pub fn enrich_entry(entry: &ResolvedEntry, data: &EnrichmentData) -> Result<EnrichedEntry> {
    let code = entry.code.as_str();
    if code.is_empty() {
        return Err(EnrichmentError::MissingKey(format!(
            "entry '{}' has no code_rome",
            entry.label
        ))
        .into());
    }

    let enrichment = Enrichment {
        description: data
            .first_value(Dataset::Texte, code)
            .unwrap_or_default()
            .to_string(),
        competencies: data.values(Dataset::Competences, code),
        knowledge_areas: data.values(Dataset::Savoirs, code),
        work_contexts: data.values(Dataset::Contextes, code),
        mobility_paths: data.values(Dataset::Mobilites, code),
        interest_centers: interest_centers(code, data),
    };

    if enrichment.is_empty() {
        debug!(code = %code, "No enrichment data for entry");
    }

    Ok(EnrichedEntry::new(entry, enrichment))
}

fn interest_centers(code: &str, data: &EnrichmentData) -> Vec<String> {
    let Some(table) = data.table(Dataset::CentresInteret) else {
        return Vec::new();
    };
    let label_column = Dataset::CentresInteret.value_column();

    table
        .get(code)
        .iter()
        .filter_map(|record| {
            let label = record.get_or_empty(label_column).trim();
            let category = data.category_label(record.get_or_empty(CATEGORY_COLUMN));
            join_interest_center(category, label)
        })
        .collect()
}

/// Joins an interest-center label with its category label.
///
/// Gives `"{category} — {label}"` when both are present, whichever is present
/// otherwise, and `None` when both are empty.
pub fn join_interest_center(category: Option<&str>, label: &str) -> Option<String> {
    let category = category.filter(|c| !c.is_empty());
    match (category, label.is_empty()) {
        (Some(category), false) => Some(format!("{category} — {label}")),
        (None, false) => Some(label.to_string()),
        (Some(category), true) => Some(category.to_string()),
        (None, true) => None,
    }
}
