//! Shared utilities for rome-finder CLI binaries.
//!
//! Log level selection, stderr logging setup and French result counts.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::format_result_count;
pub use logging::init_logging;
