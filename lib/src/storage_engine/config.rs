// lib/src/storage_engine/config.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::{
    default_cache_capacity, default_data_directory, default_storage_engine_type,
};

/// Storage engine types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageEngineType {
    #[default]
    Sled,
    File,
    #[serde(alias = "in_memory", alias = "memory")]
    InMemory,
}

impl fmt::Display for StorageEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageEngineType::Sled => write!(f, "sled"),
            StorageEngineType::File => write!(f, "file"),
            StorageEngineType::InMemory => write!(f, "inmemory"),
        }
    }
}

impl FromStr for StorageEngineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(StorageEngineType::Sled),
            "file" => Ok(StorageEngineType::File),
            "inmemory" | "in_memory" | "memory" => Ok(StorageEngineType::InMemory),
            other => Err(format!("Unknown storage engine type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_storage_engine_type")]
    pub engine_type: StorageEngineType,
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    #[serde(default)]
    pub use_compression: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            engine_type: default_storage_engine_type(),
            data_directory: default_data_directory(),
            cache_capacity: default_cache_capacity(),
            use_compression: false,
        }
    }
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        StorageConfig {
            engine_type: StorageEngineType::InMemory,
            ..StorageConfig::default()
        }
    }

    pub fn with_engine(engine_type: StorageEngineType, data_directory: impl Into<PathBuf>) -> Self {
        StorageConfig {
            engine_type,
            data_directory: data_directory.into(),
            ..StorageConfig::default()
        }
    }
}
