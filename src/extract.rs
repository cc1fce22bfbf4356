//! Address extraction from quoted `"addr"` records.
//!
//! Extraction is a positional heuristic over the segments produced by
//! splitting a line on `"`, not a parser for the surrounding format:
//!
//! - `X="10.1.1.1" "addr"` yields `10.1.1.1` (marker is the final quoted field,
//!   the quoted segment before it is taken)
//! - `"addr": "192.0.2.1"` yields `192.0.2.1` (last quoted segment is taken)
//!
//! Lines are decoded as ISO-8859-1 and the whole input is scanned before the
//! output file is touched.

use std::{
    fmt, fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::latin1;

/// The literal marker identifying lines of interest.
pub const MARKER: &str = "\"addr\"";

/// Marker text as it appears between the quotes once a line is split.
const MARKER_NAME: &str = "addr";

const QUOTE: char = '"';

/// Errors raised while extracting tokens from decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A line contains the marker as its final quoted field but no quoted
    /// segment in front of it.
    MalformedLine { line_number: usize, line: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedLine { line_number, line } => write!(
                f,
                "line {}: no quoted value before {}: {}",
                line_number, MARKER, line
            ),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Outcome of a successful [`extract_file`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Number of lines in the decoded input.
    pub lines_read: usize,
    /// Extracted tokens in input order.
    pub addresses: Vec<String>,
}

/// Returns true when `line` contains the `"addr"` marker.
pub fn contains_marker(line: &str) -> bool {
    line.contains(MARKER)
}

/// Extracts the token from a single line.
///
/// Returns `None` when the line has no quoted value in front of a trailing
/// marker. Callers are expected to check [`contains_marker`] first; for
/// lines without any quote the whole line is the only segment and `None` is
/// returned as well.
pub fn extract_token(line: &str) -> Option<&str> {
    let segments: Vec<&str> = line.split(QUOTE).collect();
    let n = segments.len();
    if n < 2 {
        return None;
    }

    let candidate = segments[n - 2];
    if candidate != MARKER_NAME {
        return Some(candidate);
    }

    // Marker closes the line: step back over it to the previous quoted segment.
    if n < 5 {
        return None;
    }
    Some(segments[n - 4])
}

/// Splits `text` on `\n`, `\r\n` and a lone `\r`.
///
/// Terminators are stripped and a trailing terminator does not start an empty
/// final line, as with [`str::lines`].
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Extracts tokens from every line of `text` that contains the marker.
///
/// Stops at the first malformed line.
pub fn extract_lines(text: &str) -> Result<Vec<String>, ExtractError> {
    let mut addresses = Vec::new();

    for (index, line) in split_lines(text).enumerate() {
        if !contains_marker(line) {
            continue;
        }
        let token = extract_token(line).ok_or_else(|| ExtractError::MalformedLine {
            line_number: index + 1,
            line: line.to_string(),
        })?;
        addresses.push(token.to_string());
    }

    Ok(addresses)
}

/// Reads `input`, extracts every address, and writes them to `output`.
///
/// The output file is created only after the full input has been scanned, so
/// a read or extraction failure never creates or truncates it.
pub fn extract_file(input: &Path, output: &Path) -> Result<ExtractSummary> {
    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let text = latin1::decode(&bytes);

    let addresses = extract_lines(&text)
        .with_context(|| format!("Failed to extract addresses from: {}", input.display()))?;

    write_lines(output, &addresses)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(ExtractSummary {
        lines_read: split_lines(&text).count(),
        addresses,
    })
}

fn write_lines(output: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(output)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
