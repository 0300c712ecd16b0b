//! Keyword search over the ROME referential.
//!
//! This crate provides the search pipeline:
//! - [`ReferentialIndex`] - O(1) code lookup built from the code table
//! - [`search_in_appellations`] - case-insensitive substring match over appellations
//! - [`get_rome_details`] - one-hop parent resolution of matched codes
//! - [`search_rome`] - load, match, resolve and enrich in one call
//!
//! # Example
//!
//! ```rust,ignore
//! use rf_search::search_rome;
//! use rf_types::DataConfig;
//!
//! let entries = search_rome("devops", &DataConfig::default().with_data_dir("data/RefRomeCsv"))?;
//! for entry in &entries {
//!     println!("{} {}", entry.code, entry.label);
//! }
//! ```

mod matcher;
mod referential;
mod resolver;
mod search;

pub use matcher::{AppellationColumns, MatchSet, search_in_appellations};
pub use referential::{ReferentialColumns, ReferentialIndex};
pub use resolver::get_rome_details;
pub use search::{JobSearch, search_rome, validate_keyword};
