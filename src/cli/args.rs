//! CLI argument definitions using clap.
//!
//! The tool takes exactly two positional arguments. Anything clap rejects,
//! other than a help or version request, is reported as a usage error.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, error::ErrorKind};

use super::ExitStatus;
use super::report;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Text file to scan, decoded as ISO-8859-1
    #[arg(allow_hyphen_values = true)]
    pub input_file: PathBuf,

    /// File to write extracted addresses to (created or overwritten)
    #[arg(allow_hyphen_values = true)]
    pub output_file: PathBuf,

    /// Print a summary after a successful run
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Parse arguments from the process environment.
    ///
    /// Returns the exit status to stop with when the arguments don't describe
    /// a run (help, version, or a usage error).
    pub fn from_env() -> Result<Self, ExitStatus> {
        Self::try_parse().map_err(|err| handle_parse_error(&err))
    }

    /// The one-line usage string, e.g. `Usage: addrx [OPTIONS] <INPUT_FILE> <OUTPUT_FILE>`.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

fn handle_parse_error(err: &clap::Error) -> ExitStatus {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().ok();
            ExitStatus::Success
        }
        _ => {
            report::print_usage(&Arguments::usage());
            ExitStatus::Usage
        }
    }
}
