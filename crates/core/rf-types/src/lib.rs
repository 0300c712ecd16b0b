//! Core types for rome-finder.
//!
//! This crate provides the types shared by every stage of a search:
//! - [`ReferentialEntry`], [`ResolvedEntry`], [`EnrichedEntry`] - the entries a search produces
//! - [`DataConfig`] and [`LoadOptions`] - where the dataset lives and how to read it

pub mod config;
pub mod entry;

pub use config::{
    DEFAULT_DATA_DIR, DataConfig, DatasetFiles, Decoding, Delimiter, LoadOptions, ParentPolicy,
};
pub use entry::{EnrichedEntry, Enrichment, NO_PARENT_LABEL, ReferentialEntry, ResolvedEntry};
