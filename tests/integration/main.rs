//! Integration tests for rome-finder.
//!
//! Every test writes a small ROME dataset into a temporary directory and runs
//! the full pipeline against it: load, match, resolve, enrich, render.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod cli_test;
mod search_test;
