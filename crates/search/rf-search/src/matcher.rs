//! Keyword matching over appellations.

use ahash::RandomState;
use caseless::default_case_fold_str;
use hashbrown::HashSet;
use rf_reader_csv::Table;

/// Unique codes matched by a keyword, in no particular order.
pub type MatchSet = HashSet<String, RandomState>;

/// Column names of the appellation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppellationColumns {
    pub long_label: String,
    pub short_label: String,
    pub code: String,
}

impl Default for AppellationColumns {
    fn default() -> Self {
        Self {
            long_label: "libelle_appellation_long".to_string(),
            short_label: "libelle_appellation_court".to_string(),
            code: "code_rome".to_string(),
        }
    }
}

/// Returns the codes whose long or short appellation contains `keyword`,
/// ignoring case.
///
/// Matching is plain substring containment after Unicode case folding of
/// both sides; accents and whitespace are compared as-is. Missing labels
/// count as empty.
pub fn search_in_appellations(
    keyword: &str,
    appellations: &Table,
    columns: &AppellationColumns,
) -> MatchSet {
    let needle = default_case_fold_str(keyword);
    let mut codes = MatchSet::with_hasher(RandomState::new());

    for record in appellations {
        let code = record.get_or_empty(&columns.code);
        if code.is_empty() || codes.contains(code) {
            continue;
        }
        let matches = [&columns.long_label, &columns.short_label]
            .iter()
            .any(|column| default_case_fold_str(record.get_or_empty(column)).contains(&needle));
        if matches {
            codes.insert(code.to_string());
        }
    }

    codes
}
