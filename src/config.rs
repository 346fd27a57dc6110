use std::path::PathBuf;

use crate::error::CensusError;
use crate::state_counts::StateKey;

/// Dataset path, relative to the working directory.
pub const DEFAULT_DATASET: &str = "Final Dataset 0601.json";
/// Rows printed by the frequency tables.
pub const DEFAULT_TOP: usize = 40;
/// Records shown in the central-scheme sample.
pub const DEFAULT_SAMPLE: usize = 3;
/// Characters of a scheme name shown in the sample.
pub const NAME_WIDTH: usize = 50;

/// Runtime options shared by the report binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Dataset to read.
    pub input: PathBuf,
    /// Maximum rows in a frequency table.
    pub top: usize,
    /// Number of sample records in the central report.
    pub sample: usize,
    /// Grouping key for the state report.
    pub key: StateKey,
    /// Emit JSON instead of the text report.
    pub json: bool,
    /// Optional CSV destination for the full table.
    pub csv: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATASET),
            top: DEFAULT_TOP,
            sample: DEFAULT_SAMPLE,
            key: StateKey::Classified,
            json: false,
            csv: None,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), CensusError> {
        if self.top == 0 {
            return Err(CensusError::Config("--top must be at least 1".into()));
        }
        Ok(())
    }
}
