//! Pipeline integration tests.
//!
//! These tests run `search_rome` end to end against the on-disk fixture.

use integration_tests::{TestDataset, devops_entry};
use rf_error::{ErrorCategory, ReaderError, RomeError, SearchError, classify_error};
use rf_format::{format_as_json, format_as_markdown};
use rf_search::search_rome;
use rf_types::{Decoding, Delimiter, LoadOptions, ParentPolicy};

#[test]
fn test_devops_scenario() {
    let dataset = TestDataset::new();

    let entries = search_rome("devops", &dataset.config()).unwrap();

    assert_eq!(entries, vec![devops_entry()]);
}

#[test]
fn test_search_is_case_insensitive() {
    let dataset = TestDataset::new();
    let config = dataset.config();

    let lower = search_rome("devops", &config).unwrap();
    assert_eq!(search_rome("DEVOPS", &config).unwrap(), lower);
    assert_eq!(search_rome("DevOps", &config).unwrap(), lower);
}

#[test]
fn test_results_sorted_by_code() {
    let dataset = TestDataset::new();

    let entries = search_rome("e", &dataset.config()).unwrap();

    let codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["F1603", "M1801", "M1827", "Z9999"]);
}

#[test]
fn test_parent_label_resolution() {
    let dataset = TestDataset::new();

    let entries = search_rome("plombier", &dataset.config()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code, "F1603");
    assert_eq!(entries[0].parent_code, "F1600");
    assert_eq!(entries[0].parent_label, "Second oeuvre");
    assert_eq!(entries[0].competencies, vec!["Souder des canalisations"]);
}

#[test]
fn test_sparse_code_gets_empty_enrichment() {
    let dataset = TestDataset::new();

    let entries = search_rome("sans fiche", &dataset.config()).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.code, "Z9999");
    assert_eq!(entry.parent_label, "N/A");
    assert_eq!(entry.description, "");
    assert!(entry.competencies.is_empty());
    assert!(entry.knowledge_areas.is_empty());
    assert!(entry.work_contexts.is_empty());
    assert!(entry.mobility_paths.is_empty());
    assert!(entry.interest_centers.is_empty());
}

#[test]
fn test_code_missing_from_referential_is_dropped() {
    let dataset = TestDataset::new();

    let entries = search_rome("orpheline", &dataset.config()).unwrap();

    assert!(entries.is_empty());
}

#[test]
fn test_no_match() {
    let dataset = TestDataset::new();

    let error = search_rome("astronaut", &dataset.config()).unwrap_err();

    assert!(matches!(
        error,
        RomeError::Search(SearchError::NoMatch { ref keyword }) if keyword == "astronaut"
    ));
    assert_eq!(classify_error(&error), ErrorCategory::NoResults);
}

#[test]
fn test_blank_keyword_rejected_before_io() {
    let dataset = TestDataset::new();
    dataset.remove(&dataset.files().appellations);

    let error = search_rome(" ", &dataset.config()).unwrap_err();

    assert_eq!(classify_error(&error), ErrorCategory::InvalidInput);
}

#[test]
fn test_missing_file_is_fatal() {
    let dataset = TestDataset::new();
    dataset.remove(&dataset.files().mobilites);

    let error = search_rome("devops", &dataset.config()).unwrap_err();

    assert!(matches!(error, RomeError::Reader(ReaderError::NotFound(_))));
    assert_eq!(classify_error(&error), ErrorCategory::Fatal);
}

#[test]
fn test_schema_error_lists_missing_columns() {
    let dataset = TestDataset::new();
    dataset.write(&dataset.files().codes, b"foo,bar\n1,2\n");

    let error = search_rome("devops", &dataset.config()).unwrap_err();

    match error {
        RomeError::Reader(ReaderError::Schema { missing, .. }) => {
            assert_eq!(missing, vec!["code_rome", "libelle_rome", "code_rome_parent"]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_semicolon_dataset_autodetected() {
    let dataset = TestDataset::with_delimiter(';');

    let entries = search_rome("devops", &dataset.config()).unwrap();

    assert_eq!(entries, vec![devops_entry()]);
}

#[test]
fn test_semicolon_dataset_with_multiline_description() {
    let dataset = TestDataset::with_delimiter(';');
    dataset.write(
        &dataset.files().texte,
        "code_rome;libelle_texte\nM1827;\"Conçoit les chaînes de déploiement.\nAutomatise les tests.\"\n"
            .as_bytes(),
    );

    let entries = search_rome("devops", &dataset.config()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].description,
        "Conçoit les chaînes de déploiement.\nAutomatise les tests."
    );
    assert_eq!(entries[0].competencies, devops_entry().competencies);
}

#[test]
fn test_fixed_delimiter() {
    let dataset = TestDataset::with_delimiter('|');
    let config = dataset
        .config()
        .with_load_options(LoadOptions::new().with_delimiter(Delimiter::Fixed(b'|')));

    let entries = search_rome("devops", &config).unwrap();

    assert_eq!(entries, vec![devops_entry()]);
}

#[test]
fn test_invalid_utf8_lossy_and_strict() {
    let dataset = TestDataset::new();
    dataset.write(
        &dataset.files().texte,
        b"code_rome,libelle_texte\nM1827,D\xe9ploiement\n",
    );

    let entries = search_rome("devops", &dataset.config()).unwrap();
    assert_eq!(entries[0].description, "D\u{FFFD}ploiement");

    let strict = dataset
        .config()
        .with_load_options(LoadOptions::new().with_decoding(Decoding::Strict));
    let error = search_rome("devops", &strict).unwrap_err();
    assert!(matches!(
        error,
        RomeError::Reader(ReaderError::InvalidFormat(_))
    ));
}

#[test]
fn test_dangling_parent_policies() {
    let dataset = TestDataset::new();
    dataset.write(
        &dataset.files().codes,
        "code_rome,libelle_rome,code_rome_parent\nM1827,Ingénierie DevOps,M1800\n".as_bytes(),
    );

    let entries = search_rome("devops", &dataset.config()).unwrap();
    assert_eq!(entries[0].parent_label, "N/A");

    let strict = dataset.config().with_parent_policy(ParentPolicy::Strict);
    let error = search_rome("devops", &strict).unwrap_err();
    assert!(matches!(
        error,
        RomeError::Search(SearchError::KeyNotFound { .. })
    ));
}

#[test]
fn test_renderings_of_search_results() {
    let dataset = TestDataset::new();
    let entries = search_rome("devops", &dataset.config()).unwrap();

    assert_eq!(
        format_as_markdown(&entries),
        "## Résultats de la recherche ROME\n\
         - [M1827] Ingénierie DevOps (parent: Systèmes d'information)"
    );

    let json = format_as_json(&entries).unwrap();
    let parsed: Vec<rf_types::EnrichedEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entries);
}
