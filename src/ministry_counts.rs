use crate::record::{SchemeRecord, UNKNOWN};
use crate::state_counts::KeyCounts;

/// Group records by their first ministry entry.
///
/// Records without any ministry fall under [`UNKNOWN`].
pub fn count_ministries(records: &[SchemeRecord]) -> KeyCounts {
    records
        .iter()
        .map(|r| r.primary_ministry().unwrap_or_else(|| UNKNOWN.to_string()))
        .collect()
}
