//! Command-line layer: argument parsing, running, and reporting.

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let summary = run::run(&args)?;

    if args.verbose {
        report::print_summary(&summary, &args.output_file);
    }

    Ok(ExitStatus::Success)
}
