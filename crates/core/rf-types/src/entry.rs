//! Entries produced by the search pipeline.
//!
//! Serialized field names follow the ROME dataset vocabulary so that exports
//! read the same as the source files.

use serde::{Deserialize, Serialize};

/// Label used when an entry is its own parent.
pub const NO_PARENT_LABEL: &str = "N/A";

/// One row of the code referential, keyed by `code` in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialEntry {
    /// ROME code.
    pub code: String,

    /// Label of the code.
    pub label: String,

    /// Parent code; equal to `code` for roots.
    pub parent_code: String,
}

impl ReferentialEntry {
    /// Creates a new referential entry.
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        parent_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            parent_code: parent_code.into(),
        }
    }

    /// Returns true when the entry references itself as parent.
    pub fn is_root(&self) -> bool {
        self.parent_code == self.code
    }
}

/// A matched code with its label and its parent's label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    #[serde(rename = "code_rome")]
    pub code: String,

    #[serde(rename = "libelle")]
    pub label: String,

    #[serde(rename = "code_rome_parent")]
    pub parent_code: String,

    /// `"N/A"` for roots.
    #[serde(rename = "libelle_parent")]
    pub parent_label: String,
}

/// Auxiliary data joined onto a resolved entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub description: String,
    pub competencies: Vec<String>,
    pub knowledge_areas: Vec<String>,
    pub work_contexts: Vec<String>,
    pub mobility_paths: Vec<String>,
    pub interest_centers: Vec<String>,
}

impl Enrichment {
    /// Returns true when no auxiliary dataset had anything for the entry.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.competencies.is_empty()
            && self.knowledge_areas.is_empty()
            && self.work_contexts.is_empty()
            && self.mobility_paths.is_empty()
            && self.interest_centers.is_empty()
    }
}

/// A resolved entry extended with its enrichment.
///
/// Field order is the export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedEntry {
    #[serde(rename = "code_rome")]
    pub code: String,

    #[serde(rename = "libelle")]
    pub label: String,

    #[serde(rename = "code_rome_parent")]
    pub parent_code: String,

    #[serde(rename = "libelle_parent")]
    pub parent_label: String,

    pub description: String,

    #[serde(rename = "competences")]
    pub competencies: Vec<String>,

    #[serde(rename = "savoirs")]
    pub knowledge_areas: Vec<String>,

    #[serde(rename = "contextes_travail")]
    pub work_contexts: Vec<String>,

    #[serde(rename = "mobilites")]
    pub mobility_paths: Vec<String>,

    #[serde(rename = "centres_interet")]
    pub interest_centers: Vec<String>,
}

impl EnrichedEntry {
    /// Combines a resolved entry with its enrichment.
    pub fn new(entry: &ResolvedEntry, enrichment: Enrichment) -> Self {
        Self {
            code: entry.code.clone(),
            label: entry.label.clone(),
            parent_code: entry.parent_code.clone(),
            parent_label: entry.parent_label.clone(),
            description: enrichment.description,
            competencies: enrichment.competencies,
            knowledge_areas: enrichment.knowledge_areas,
            work_contexts: enrichment.work_contexts,
            mobility_paths: enrichment.mobility_paths,
            interest_centers: enrichment.interest_centers,
        }
    }
}
