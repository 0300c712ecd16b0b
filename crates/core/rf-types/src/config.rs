//! Configuration types for loading the ROME dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default location of the ROME CSV export, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data/RefRomeCsv";

/// Field delimiter of the dataset files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Sniff the delimiter from the first bytes of each file, comma if unsure.
    #[default]
    Auto,

    /// Always use this byte.
    Fixed(u8),
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 1 && s.is_ascii() {
            return Ok(Self::Fixed(s.as_bytes()[0]));
        }
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "comma" => Ok(Self::Fixed(b',')),
            "semicolon" => Ok(Self::Fixed(b';')),
            "tab" => Ok(Self::Fixed(b'\t')),
            "pipe" => Ok(Self::Fixed(b'|')),
            _ => Err(format!(
                "'{s}' is not a delimiter (auto, comma, semicolon, tab, pipe or a single ASCII character)"
            )),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(b'\t') => write!(f, "tab"),
            Self::Fixed(b) => write!(f, "{}", *b as char),
        }
    }
}

/// How to handle bytes that are not valid UTF-8.
///
/// The published export contains a few legacy-encoded characters, so the
/// default replaces them with U+FFFD. Strict decoding rejects the file instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    #[default]
    Lossy,
    Strict,
}

/// What to do when an entry's parent code is absent from the referential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentPolicy {
    /// Use `"N/A"` as parent label and log a warning.
    #[default]
    Lenient,

    /// Fail the search with `KeyNotFound`.
    Strict,
}

/// Options applied to every table load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub delimiter: Delimiter,

    #[serde(default)]
    pub decoding: Decoding,
}

impl LoadOptions {
    /// Create load options with defaults (auto-detected delimiter, lossy decoding).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the decoding mode.
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }
}

/// File names of the ROME v4.60 export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFiles {
    pub appellations: String,
    pub codes: String,
    pub texte: String,
    pub competences: String,
    pub savoirs: String,
    pub contextes: String,
    pub mobilites: String,
    pub centres_interet: String,
    pub arborescence_centres: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            appellations: "unix_referentiel_appellation_v460_utf8.csv".to_string(),
            codes: "unix_referentiel_code_rome_v460_utf8.csv".to_string(),
            texte: "unix_texte_v460_utf8.csv".to_string(),
            competences: "unix_referentiel_competence_v460_utf8.csv".to_string(),
            savoirs: "unix_referentiel_savoir_v460_utf8.csv".to_string(),
            contextes: "unix_referentiel_contexte_travail_v460_utf8.csv".to_string(),
            mobilites: "unix_rubrique_mobilite_v460_utf8.csv".to_string(),
            centres_interet: "unix_centre_interet_v460_utf8.csv".to_string(),
            arborescence_centres: "unix_arborescence_centre_interet_v460_utf8.csv".to_string(),
        }
    }
}

/// Configuration for a search over the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset files.
    pub data_dir: PathBuf,

    /// Delimiter and decoding options.
    #[serde(default)]
    pub load: LoadOptions,

    /// Handling of dangling parent codes.
    #[serde(default)]
    pub parent_policy: ParentPolicy,

    /// File names inside `data_dir`.
    #[serde(default)]
    pub files: DatasetFiles,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            load: LoadOptions::default(),
            parent_policy: ParentPolicy::default(),
            files: DatasetFiles::default(),
        }
    }
}

impl DataConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the load options.
    pub fn with_load_options(mut self, load: LoadOptions) -> Self {
        self.load = load;
        self
    }

    /// Set the parent policy.
    pub fn with_parent_policy(mut self, policy: ParentPolicy) -> Self {
        self.parent_policy = policy;
        self
    }

    /// Set the dataset file names.
    pub fn with_files(mut self, files: DatasetFiles) -> Self {
        self.files = files;
        self
    }

    /// Returns the full path of a dataset file.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Returns the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.data_dir.as_os_str().is_empty() {
            return Err("data_dir must not be empty".to_string());
        }
        match self.load.delimiter {
            Delimiter::Fixed(b @ (b'"' | b'\n' | b'\r')) => {
                Err(format!("{:?} cannot be used as delimiter", b as char))
            }
            _ => Ok(()),
        }
    }
}
