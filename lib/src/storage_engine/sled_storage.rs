// lib/src/storage_engine/sled_storage.rs

use std::fs;

use log::{debug, error, info};
use models::errors::{ClinicError, ClinicResult};

use crate::storage_engine::config::StorageConfig;
use crate::storage_engine::storage_engine::StorageEngine;

/// Sled-backed durable storage. Collections live in the default tree and
/// every write is flushed before returning.
#[derive(Debug)]
pub struct SledStorage {
    db: sled::Db,
}

/// Opens (creating if needed) the sled database under `<data_directory>/sled`.
pub fn open_sled_db(config: &StorageConfig) -> ClinicResult<sled::Db> {
    let db_path = config.data_directory.join("sled");

    if !db_path.exists() {
        info!("Creating database directory at {:?}", db_path);
        fs::create_dir_all(&db_path).map_err(|e| {
            error!("Failed to create database directory at {:?}: {}", db_path, e);
            ClinicError::StorageUnavailable(format!(
                "Failed to create database directory at {:?}: {}",
                db_path, e
            ))
        })?;
    } else if !db_path.is_dir() {
        error!("Path {:?} exists but is not a directory", db_path);
        return Err(ClinicError::StorageUnavailable(format!(
            "Path {:?} is not a directory",
            db_path
        )));
    }

    info!("Opening Sled database at {:?}", db_path);
    sled::Config::new()
        .path(&db_path)
        .use_compression(config.use_compression)
        .cache_capacity(config.cache_capacity)
        .open()
        .map_err(|e| {
            error!("Failed to open Sled database at {:?}: {}", db_path, e);
            ClinicError::StorageUnavailable(format!(
                "Failed to open Sled database at {:?}: {}. Ensure the directory is accessible.",
                db_path, e
            ))
        })
}

impl SledStorage {
    pub fn new(config: &StorageConfig) -> ClinicResult<Self> {
        let db = open_sled_db(config)?;
        Ok(SledStorage { db })
    }
}

impl StorageEngine for SledStorage {
    fn connect(&self) -> ClinicResult<()> {
        // The database is opened in `new`; a successful open is a connection.
        Ok(())
    }

    fn insert(&self, key: &str, value: &[u8]) -> ClinicResult<()> {
        self.db.insert(key.as_bytes(), value)?;
        self.db.flush()?;
        debug!("Wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    fn retrieve(&self, key: &str) -> ClinicResult<Option<Vec<u8>>> {
        Ok(self.db.get(key.as_bytes())?.map(|ivec| ivec.to_vec()))
    }

    fn delete(&self, key: &str) -> ClinicResult<()> {
        self.db.remove(key.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    fn flush(&self) -> ClinicResult<()> {
        self.db.flush()?;
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "Sled"
    }
}
