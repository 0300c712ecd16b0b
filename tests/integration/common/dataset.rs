//! ROME dataset fixture.
//!
//! Writes the nine dataset files under a temporary directory, laid out the
//! way [`DataConfig`] expects them.

use rf_types::{DataConfig, DatasetFiles, EnrichedEntry};
use std::path::Path;
use tempfile::TempDir;

const APPELLATIONS: &str = "\
libelle_appellation_long,libelle_appellation_court,code_rome
Ingénieur DevOps,DevOps,M1827
Ingénieur / Ingénieure DevOps cloud,Ingénieur DevOps cloud,M1827
Administrateur systèmes,Admin sys,M1801
Plombier / Plombière,Plombier,F1603
Métier sans fiche,Fiche vide,Z9999
Appellation orpheline,Orpheline,X0000
";

const CODES: &str = "\
code_rome,libelle_rome,code_rome_parent
M1800,Systèmes d'information,M1800
M1801,Administration de systèmes d'information,M1800
M1827,Ingénierie DevOps,M1800
F1600,Second oeuvre,F1600
F1603,Installation d'équipements sanitaires et thermiques,F1600
Z9999,Métier sans fiche,Z9999
";

const TEXTE: &str = "\
code_rome,libelle_texte
M1827,Conçoit et automatise les chaînes de déploiement.
F1603,Installe les réseaux de plomberie.
";

const COMPETENCES: &str = "\
code_rome,code_competence,libelle_competence
M1827,C01,Automatiser les déploiements
M1827,C02,Superviser les infrastructures
F1603,C03,Souder des canalisations
";

const SAVOIRS: &str = "\
code_rome,libelle_savoir
M1827,Intégration continue
";

const CONTEXTES: &str = "\
code_rome,libelle_contexte_travail
M1827,Travail en équipe agile
";

const MOBILITES: &str = "\
code_rome,libelle_mobilite
M1827,M1801 Administration de systèmes d'information
";

const CENTRES_INTERET: &str = "\
code_rome,code_centre_interet,libelle_centre_interet,code_arborescence
M1827,CI01,Technologies innovantes,ARB01
M1827,CI02,Résolution de problèmes,ARB02
";

const ARBORESCENCE: &str = "\
code_arborescence,libelle_arborescence
ARB01,Innovation
ARB02,Analyse
";

/// A complete dataset in a temporary directory, removed on drop.
pub struct TestDataset {
    dir: TempDir,
    files: DatasetFiles,
}

impl TestDataset {
    /// Writes the dataset with comma-separated files.
    pub fn new() -> Self {
        Self::with_delimiter(',')
    }

    /// Writes the dataset with `delimiter` between fields.
    pub fn with_delimiter(delimiter: char) -> Self {
        let dir = TempDir::new().expect("create dataset dir");
        let files = DatasetFiles::default();
        let dataset = Self { dir, files };

        for (name, content) in [
            (&dataset.files.appellations, APPELLATIONS),
            (&dataset.files.codes, CODES),
            (&dataset.files.texte, TEXTE),
            (&dataset.files.competences, COMPETENCES),
            (&dataset.files.savoirs, SAVOIRS),
            (&dataset.files.contextes, CONTEXTES),
            (&dataset.files.mobilites, MOBILITES),
            (&dataset.files.centres_interet, CENTRES_INTERET),
            (&dataset.files.arborescence_centres, ARBORESCENCE),
        ] {
            dataset.write(name, content.replace(',', &delimiter.to_string()).as_bytes());
        }

        dataset
    }

    /// Directory holding the dataset files.
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Dataset file names.
    pub fn files(&self) -> &DatasetFiles {
        &self.files
    }

    /// Search configuration pointing at this dataset.
    pub fn config(&self) -> DataConfig {
        DataConfig::new().with_data_dir(self.dir.path())
    }

    /// Replaces a dataset file.
    pub fn write(&self, name: &str, content: &[u8]) {
        std::fs::write(self.dir.path().join(name), content).expect("write dataset file");
    }

    /// Deletes a dataset file.
    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("remove dataset file");
    }
}

impl Default for TestDataset {
    fn default() -> Self {
        Self::new()
    }
}

/// The fully enriched M1827 entry of the fixture.
pub fn devops_entry() -> EnrichedEntry {
    EnrichedEntry {
        code: "M1827".to_string(),
        label: "Ingénierie DevOps".to_string(),
        parent_code: "M1800".to_string(),
        parent_label: "Systèmes d'information".to_string(),
        description: "Conçoit et automatise les chaînes de déploiement.".to_string(),
        competencies: vec![
            "Automatiser les déploiements".to_string(),
            "Superviser les infrastructures".to_string(),
        ],
        knowledge_areas: vec!["Intégration continue".to_string()],
        work_contexts: vec!["Travail en équipe agile".to_string()],
        mobility_paths: vec!["M1801 Administration de systèmes d'information".to_string()],
        interest_centers: vec![
            "Innovation — Technologies innovantes".to_string(),
            "Analyse — Résolution de problèmes".to_string(),
        ],
    }
}
