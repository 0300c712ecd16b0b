//! CLI runner integration tests.
//!
//! These tests drive the one-shot and interactive runners with the real
//! dataset search, writing into a temporary output directory.

use clap::Parser;
use code_rome::{Cli, Outcome, execute, run_interactive};
use integration_tests::{TestDataset, devops_entry};
use rf_format::{FileOutput, OutputFormat};
use rf_types::EnrichedEntry;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_cli_generates_markdown() {
    let dataset = TestDataset::new();
    let out_dir = TempDir::new().unwrap();
    let output_dir = out_dir.path().join("output");
    let mut out = Vec::new();

    let outcome = execute(
        &dataset.config(),
        "devops",
        None,
        &FileOutput::new(&output_dir, OutputFormat::Markdown),
        &mut out,
    )
    .unwrap();

    let path = output_dir.join("devops.md");
    assert_eq!(
        outcome,
        Outcome::Written {
            path: path.clone(),
            count: 1
        }
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "Selected job is devops and output file is {}\n",
            path.display()
        )
    );
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "## Résultats de la recherche ROME\n\
         - [M1827] Ingénierie DevOps (parent: Systèmes d'information)"
    );
}

#[test]
fn test_cli_generates_json_from_parsed_args() {
    let dataset = TestDataset::new();
    let out_dir = TempDir::new().unwrap();
    let cli = Cli::try_parse_from([
        "code-rome",
        "devops",
        "-o",
        "export.txt",
        "-f",
        "json",
        "--data-dir",
        dataset.data_dir().to_str().unwrap(),
        "--output-dir",
        out_dir.path().to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();

    execute(
        &cli.data_config(),
        cli.job.as_deref().unwrap(),
        cli.output.as_deref(),
        &cli.file_output(),
        &mut out,
    )
    .unwrap();

    let content = std::fs::read_to_string(out_dir.path().join("export.json")).unwrap();
    let parsed: Vec<EnrichedEntry> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, vec![devops_entry()]);
}

#[test]
fn test_cli_no_results_avoids_creating_file() {
    let dataset = TestDataset::new();
    let out_dir = TempDir::new().unwrap();
    let output_dir = out_dir.path().join("output");
    let mut out = Vec::new();

    for job in ["astronaut", "orpheline"] {
        let outcome = execute(
            &dataset.config(),
            job,
            None,
            &FileOutput::new(&output_dir, OutputFormat::Markdown),
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::NoResults);
    }

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Aucun résultat trouvé pour astronaut\nAucun résultat trouvé pour orpheline\n"
    );
    assert!(!output_dir.exists());
}

#[test]
fn test_cli_missing_dataset_is_an_error() {
    let dataset = TestDataset::new();
    dataset.remove(&dataset.files().codes);
    let out_dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    let result = execute(
        &dataset.config(),
        "devops",
        None,
        &FileOutput::new(out_dir.path(), OutputFormat::Markdown),
        &mut out,
    );

    let error = result.unwrap_err();
    assert!(error.to_string().contains("File not found"));
    assert!(out.is_empty());
}

#[test]
fn test_interactive_session() {
    let dataset = TestDataset::new();
    let out_dir = TempDir::new().unwrap();
    let output_dir = out_dir.path().join("output");
    let mut out = Vec::new();

    let stats = run_interactive(
        &dataset.config(),
        &output_dir,
        Cursor::new("astronaute\nmd\nplombier\nnone\ndevops\njson\n\n"),
        &mut out,
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Mode interactif activé.\n"));
    assert!(out.contains("Aucun résultat trouvé pour astronaute"));
    assert!(out.contains("Aucun fichier généré pour plombier (format none, 1 résultat)"));
    assert!(out.contains(&format!(
        "Fichier généré : {} (1 résultat)",
        output_dir.join("devops.json").display()
    )));
    assert!(out.ends_with("Fin du mode interactif.\n"));

    assert_eq!(stats.searches, 3);
    assert_eq!(stats.files, vec![output_dir.join("devops.json")]);
}
