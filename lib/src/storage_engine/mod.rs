// lib/src/storage_engine/mod.rs

// Module declarations
pub mod config;
pub mod file_storage;
pub mod inmemory_storage;
pub mod sled_storage;
pub mod storage_engine;
pub mod storage_utils;

// Re-export key types and traits for external use
pub use config::{StorageConfig, StorageEngineType};
pub use file_storage::FileStorage;
pub use inmemory_storage::InMemoryStorage;
pub use sled_storage::{open_sled_db, SledStorage};
pub use storage_engine::StorageEngine;
pub use storage_utils::Collection;

use std::sync::Arc;

use log::info;
use models::errors::ClinicResult;

/// Creates a storage engine instance based on the provided configuration.
///
/// Uses Sled as the default storage engine (as per StorageConfig::default).
pub fn create_storage(config: &StorageConfig) -> ClinicResult<Arc<dyn StorageEngine>> {
    let engine: Arc<dyn StorageEngine> = match config.engine_type {
        StorageEngineType::Sled => Arc::new(SledStorage::new(config)?),
        StorageEngineType::File => Arc::new(FileStorage::new(&config.data_directory)),
        StorageEngineType::InMemory => Arc::new(InMemoryStorage::new()),
    };
    engine.connect()?;
    info!("Using {} storage engine", engine.get_type());
    Ok(engine)
}
