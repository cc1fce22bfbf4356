//! Run step: turns parsed arguments into an extraction.

use anyhow::Result;

use super::args::Arguments;
use crate::extract::{ExtractSummary, extract_file};

/// Runs the extraction described by the parsed arguments.
///
/// # Returns
/// - `Ok(ExtractSummary)` once the output file has been written
/// - `Err` if the input can't be read, a line is malformed, or the output can't be written
pub fn run(args: &Arguments) -> Result<ExtractSummary> {
    extract_file(&args.input_file, &args.output_file)
}
