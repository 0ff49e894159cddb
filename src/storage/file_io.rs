//! File I/O utilities with atomic writes
//!
//! All persisted state goes through these helpers so that a failed write
//! can never leave a data file half-written.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FintrackError, FintrackResult};

/// Read JSON from a file, returning the default value if the file does not
/// exist yet
pub fn read_json<T, P>(path: P) -> FintrackResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        FintrackError::persistence("open data file", format!("{}: {}", path.display(), e))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        FintrackError::persistence("parse data file", format!("{}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to a temp file, fsync, rename)
///
/// The target file either keeps its previous contents or receives the new
/// contents in full; a crash mid-write cannot corrupt it.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> FintrackResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::persistence("create data directory", format!("{}: {}", parent.display(), e))
        })?;
    }

    // The temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FintrackError::persistence("create temp file", e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FintrackError::persistence("serialize data", e))?;
    writer
        .flush()
        .map_err(|e| FintrackError::persistence("flush data", e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FintrackError::persistence("sync data", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::persistence("rename temp file", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        label: String,
        count: u32,
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let loaded: Sample = read_json(dir.path().join("missing.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        let data = Sample {
            label: "hello".into(),
            count: 3,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        write_json_atomic(&path, &Sample::default()).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("sample.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("sample.json");
        write_json_atomic(&path, &Sample::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, "not json").unwrap();

        let result: FintrackResult<Sample> = read_json(&path);
        assert!(matches!(result, Err(FintrackError::Persistence(_))));
    }
}
