// lib/src/storage_engine/file_storage.rs

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error};
use models::errors::{ClinicError, ClinicResult};
use tempfile::NamedTempFile;

use crate::storage_engine::storage_engine::StorageEngine;

/// One `<key>.json` file per key inside a data directory. Writes go through a
/// temp file in the same directory and are renamed into place.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> ClinicResult<PathBuf> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ClinicError::StorageUnavailable(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn unavailable(action: &str, path: &Path, e: io::Error) -> ClinicError {
    error!("Failed to {} {:?}: {}", action, path, e);
    ClinicError::StorageUnavailable(format!("Failed to {} {:?}: {}", action, path, e))
}

impl StorageEngine for FileStorage {
    fn connect(&self) -> ClinicResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| unavailable("create directory", &self.dir, e))
    }

    fn insert(&self, key: &str, value: &[u8]) -> ClinicResult<()> {
        let path = self.key_path(key)?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| unavailable("create temp file in", &self.dir, e))?;
        temp.write_all(value).map_err(|e| unavailable("write", temp.path(), e))?;
        temp.as_file().sync_all().map_err(|e| unavailable("sync", temp.path(), e))?;
        temp.persist(&path).map_err(|e| unavailable("replace", &path, e.error))?;
        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn retrieve(&self, key: &str) -> ClinicResult<Option<Vec<u8>>> {
        let path = self.key_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    fn delete(&self, key: &str) -> ClinicResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("remove", &path, e)),
        }
    }

    fn flush(&self) -> ClinicResult<()> {
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "File"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_write_one_file_per_key() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("data"));
        storage.connect().unwrap();

        storage.insert("appointments", br#"[{"id":"a1"}]"#).unwrap();
        let on_disk = fs::read_to_string(dir.path().join("data").join("appointments.json")).unwrap();
        assert_eq!(on_disk, r#"[{"id":"a1"}]"#);
        assert_eq!(storage.retrieve("doctors").unwrap(), None);
    }

    #[test]
    fn should_reject_keys_that_escape_the_directory() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        let err = storage.insert("../patients", b"[]").unwrap_err();
        assert!(err.is_storage_failure());
    }

    #[test]
    fn should_ignore_deleting_missing_key() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.delete("patients").unwrap();
    }
}
