use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    /// Dataset file could not be read.
    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not a JSON array of objects.
    #[error("parse error in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Export file could not be created or flushed.
    #[error("I/O error writing '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be written to its output stream.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// CSV export failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid report configuration.
    #[error("config error: {0}")]
    Config(String),
}
