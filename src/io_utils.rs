//! Error messages for the report binaries.
//!
//! Library errors are tagged with the report step that failed and printed
//! with a hint on what to check next.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::CensusError;

/// A failed report step, displayed as `<step>: <hint>`.
#[derive(Error, Debug)]
#[error("{step}: {}", cli_hint(.source))]
pub struct CliError {
    pub step: &'static str,
    #[source]
    pub source: CensusError,
}

/// Attach the failing report step to a library result.
pub trait ReportStep<T> {
    fn during(self, step: &'static str) -> Result<T, CliError>;
}

impl<T> ReportStep<T> for Result<T, CensusError> {
    fn during(self, step: &'static str) -> Result<T, CliError> {
        self.map_err(|source| CliError { step, source })
    }
}

/// Describe a file error on `path` together with a suggestion.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match (operation, err.kind()) {
        ("reading", NotFound) => "Check that the file exists and the path is correct.",
        (_, NotFound) => "Check that the destination directory exists.",
        (_, PermissionDenied) => "Check permissions or run as a different user.",
        ("reading", InvalidData) => "The file must be UTF-8 encoded.",
        _ => "Check the path and try again.",
    };
    format!("Error {operation} '{}': {err}. {suggestion}", path.display())
}

/// Actionable text for each library error.
pub fn cli_hint(err: &CensusError) -> String {
    use CensusError::*;
    match err {
        Io { path, source } => format_io_error("reading", path, source),
        Export { path, source } => format_io_error("writing", path, source),
        Parse { path, source } => format!(
            "'{}' is not a valid JSON array of schemes ({source}). Verify the file is intact.",
            path.display()
        ),
        Output(e) => format!("{e}. Standard output was closed or is not writable."),
        Csv(e) => format!("{e}. Check the CSV destination."),
        Json(e) => format!("{e}. Could not serialize the report."),
        Config(msg) => format!("{msg}. Invalid option."),
    }
}
