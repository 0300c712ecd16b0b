//! Common utilities for integration tests.
//!
//! This crate provides the on-disk dataset fixture shared by the pipeline and
//! CLI tests.

pub mod dataset;

pub use dataset::{TestDataset, devops_entry};
