// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub use crate::config::config_constants::*;
use crate::storage_engine::StorageEngineType;

pub fn default_data_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIRECTORY)
}
pub fn default_cache_capacity() -> u64 { DEFAULT_CACHE_CAPACITY }
pub fn default_storage_engine_type() -> StorageEngineType { StorageEngineType::Sled }
pub fn default_seed_sample_data() -> bool { true }
pub fn default_recent_appointments_limit() -> usize { DEFAULT_RECENT_APPOINTMENTS_LIMIT }
