//! code-rome CLI
//!
//! Keyword search over the ROME occupational classification, with Markdown
//! or JSON export. The binary is a thin wrapper over [`run::execute`] and
//! [`interactive::run_interactive`].

pub mod args;
pub mod interactive;
pub mod run;

pub use args::{Cli, FormatArg};
pub use interactive::{FormatChoice, SessionStats, run_interactive};
pub use run::{Outcome, execute, no_result_message};
