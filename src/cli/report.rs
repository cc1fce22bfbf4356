//! Report formatting and printing utilities.
//!
//! Separate from the extractor so addrx can be used as a library without
//! printing anything.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::extract::ExtractSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the usage message to stdout.
pub fn print_usage(usage: &str) {
    print_usage_to(usage, &mut io::stdout().lock());
}

/// Print the usage message to a custom writer.
pub fn print_usage_to<W: Write>(usage: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", usage);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "For more information, try '{}'.", "--help".cyan());
}

/// Print a summary of a finished run to stdout.
pub fn print_summary(summary: &ExtractSummary, output: &Path) {
    print_summary_to(summary, output, &mut io::stdout().lock());
}

/// Print a run summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &ExtractSummary, output: &Path, writer: &mut W) {
    let count = summary.addresses.len();
    let msg = format!(
        "Extracted {} {} from {} {} into {}",
        count,
        if count == 1 { "address" } else { "addresses" },
        summary.lines_read,
        if summary.lines_read == 1 { "line" } else { "lines" },
        output.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print an error and its cause chain to stderr.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print an error and its cause chain to a custom writer.
pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
    for cause in err.chain().skip(1) {
        let _ = writeln!(writer, "  {} {}", "caused by:".bold(), cause);
    }
}
