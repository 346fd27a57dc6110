use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::CensusError;
use crate::state_counts::KeyCount;

/// Write a ranked table to `path` as `key,count` CSV.
pub fn write_csv(path: &Path, rows: &[KeyCount]) -> Result<(), CensusError> {
    let file = File::create(path).map_err(|source| CensusError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["key", "count"])?;
    for row in rows {
        let count = row.count.to_string();
        wtr.write_record([row.key.as_str(), count.as_str()])?;
    }
    wtr.flush().map_err(|source| CensusError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CensusError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| {
        if e.is_io() {
            CensusError::Output(e.into())
        } else {
            CensusError::Json(e)
        }
    })?;
    writeln!(out)?;
    Ok(())
}
