//! Delimited table loading for rome-finder.
//!
//! This crate reads the ROME CSV export into in-memory tables:
//! - [`Table`] - header plus ordered [`Record`]s of one file
//! - [`load_table`] - file loading with required-column validation
//! - [`sniff_delimiter`] - delimiter detection from the first bytes of a file
//!
//! # Example
//!
//! ```rust,ignore
//! use rf_reader_csv::load_table;
//! use rf_types::LoadOptions;
//!
//! let codes = load_table(
//!     "data/RefRomeCsv/unix_referentiel_code_rome_v460_utf8.csv",
//!     &["code_rome"],
//!     &LoadOptions::default(),
//! )?;
//! for record in codes.records() {
//!     println!("{:?}", record.get("libelle_rome"));
//! }
//! ```

mod loader;
mod record;
mod sniff;

pub use loader::{decode, load_table, parse_table};
pub use record::{Record, Table};
pub use sniff::{SAMPLE_SIZE, sniff_delimiter};
