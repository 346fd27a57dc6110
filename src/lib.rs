//! Aggregate reports over a JSON dataset of government schemes.
//!
//! The dataset is a JSON array of [`SchemeRecord`]s. Each report binary loads
//! it once with [`load_dataset`], makes a single pass over the records and
//! prints a plain-text summary:
//!
//! * `check_central`: counts for the "central scheme" proxies in [`central`]
//!   and a short sample.
//! * `state_counts`: records per state label, see [`state_counts`].
//! * `ministry_counts`: records per primary ministry.

pub mod central;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod io_utils;
pub mod ministry_counts;
pub mod record;
pub mod state_counts;

pub use central::{CentralReport, CentralTally};
pub use config::ReportConfig;
pub use dataset::{load_dataset, parse_dataset};
pub use error::CensusError;
pub use ministry_counts::count_ministries;
pub use record::SchemeRecord;
pub use state_counts::{count_states, KeyCount, KeyCounts, StateKey, TableReport};

/// Install the stderr logger used by the report binaries.
///
/// Defaults to `warn` so reports stay clean; `RUST_LOG` overrides it.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
