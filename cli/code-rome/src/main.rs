//! code-rome CLI
//!
//! Search ROME codes by job keyword and export the enriched results.

use clap::Parser;
use code_rome::{Cli, execute, run_interactive};
use rf_cli_common::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr, user-facing messages to stdout
    init_logging(args.effective_log_level())?;

    let config = args.data_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.job.as_deref() {
        Some(job) => {
            execute(
                &config,
                job,
                args.output.as_deref(),
                &args.file_output(),
                &mut out,
            )?;
        }
        None => {
            let stdin = std::io::stdin();
            run_interactive(&config, &args.output_dir, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
