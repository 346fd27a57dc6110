use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::CensusError;
use crate::record::SchemeRecord;

/// Read the whole dataset at `path` into memory.
///
/// The file must hold a JSON array of objects. Any read or parse failure is
/// returned as-is; there is no partial result.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<SchemeRecord>, CensusError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CensusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), path.display());
    let records = parse_dataset(&text, path)?;
    info!("loaded {} schemes from {}", records.len(), path.display());
    Ok(records)
}

/// Parse dataset text. `origin` is only used in error messages.
pub fn parse_dataset(text: &str, origin: &Path) -> Result<Vec<SchemeRecord>, CensusError> {
    serde_json::from_str(text).map_err(|source| CensusError::Parse {
        path: PathBuf::from(origin),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_array_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[{"scheme_name":"A"},{"states":["Goa"]}]"#).unwrap();
        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "A");
    }

    #[test]
    fn empty_array_is_valid() {
        let records = parse_dataset("[]", Path::new("x.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path().join("absent.json")).unwrap_err();
        match err {
            CensusError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_dataset("[{", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CensusError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = parse_dataset(r#"{"schemes":[]}"#, Path::new("obj.json")).unwrap_err();
        assert!(matches!(err, CensusError::Parse { .. }));
    }
}
