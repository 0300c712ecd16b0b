//! Configuration types for enrichment datasets.

use rf_types::DataConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Column holding the ROME code in every code-keyed dataset.
pub const CODE_COLUMN: &str = "code_rome";

/// Auxiliary datasets of the ROME export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Descriptive text.
    Texte,
    /// Competencies.
    Competences,
    /// Knowledge areas.
    Savoirs,
    /// Work contexts.
    Contextes,
    /// Mobility paths.
    Mobilites,
    /// Interest centers, linked to a category by `code_arborescence`.
    CentresInteret,
    /// Interest-center categories, keyed by their own code.
    ArborescenceCentres,
}

impl Dataset {
    /// All datasets, in load order.
    pub const ALL: [Dataset; 7] = [
        Dataset::Texte,
        Dataset::Competences,
        Dataset::Savoirs,
        Dataset::Contextes,
        Dataset::Mobilites,
        Dataset::CentresInteret,
        Dataset::ArborescenceCentres,
    ];

    /// Logical name used in logs and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Texte => "texte",
            Self::Competences => "competences",
            Self::Savoirs => "savoirs",
            Self::Contextes => "contextes",
            Self::Mobilites => "mobilites",
            Self::CentresInteret => "centres_interet",
            Self::ArborescenceCentres => "arborescence_centres",
        }
    }

    /// Column rows are grouped by.
    pub fn key_column(self) -> &'static str {
        match self {
            Self::ArborescenceCentres => "code_arborescence",
            _ => CODE_COLUMN,
        }
    }

    /// Column holding the text joined onto entries.
    pub fn value_column(self) -> &'static str {
        match self {
            Self::Texte => "libelle_texte",
            Self::Competences => "libelle_competence",
            Self::Savoirs => "libelle_savoir",
            Self::Contextes => "libelle_contexte_travail",
            Self::Mobilites => "libelle_mobilite",
            Self::CentresInteret => "libelle_centre_interet",
            Self::ArborescenceCentres => "libelle_arborescence",
        }
    }

    fn file_name(self, config: &DataConfig) -> &str {
        let files = &config.files;
        match self {
            Self::Texte => &files.texte,
            Self::Competences => &files.competences,
            Self::Savoirs => &files.savoirs,
            Self::Contextes => &files.contextes,
            Self::Mobilites => &files.mobilites,
            Self::CentresInteret => &files.centres_interet,
            Self::ArborescenceCentres => &files.arborescence_centres,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for an enrichment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentTableConfig {
    /// Which dataset the file holds.
    pub dataset: Dataset,

    /// Path of the delimited file.
    pub source: PathBuf,

    /// Column in the file that serves as the lookup key.
    pub key_field: String,
}

impl EnrichmentTableConfig {
    /// Creates a configuration using the dataset's standard key column.
    pub fn new(dataset: Dataset, source: impl Into<PathBuf>) -> Self {
        Self {
            dataset,
            source: source.into(),
            key_field: dataset.key_column().to_string(),
        }
    }

    /// Configurations for every dataset of `config`'s data directory.
    pub fn defaults(config: &DataConfig) -> Vec<Self> {
        Dataset::ALL
            .iter()
            .map(|&dataset| Self::new(dataset, config.path_of(dataset.file_name(config))))
            .collect()
    }
}
