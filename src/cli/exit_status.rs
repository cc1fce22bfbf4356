use std::process::ExitCode;

/// Exit status for the extractor.
///
/// - `Success` (0): Output file written
/// - `Usage` (1): Wrong arguments, nothing was read or written
/// - `Error` (2): Extraction failed (unreadable input, malformed line, unwritable output)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output file written.
    Success,
    /// Wrong arguments, nothing was read or written.
    Usage,
    /// Extraction failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Usage => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
