// lib/src/config/config_structs.rs

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::storage_engine::StorageConfig;

/// Top-level configuration, read from TOML. Every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Fill empty collections with sample records when the store is opened.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
    /// How many appointments the dashboard lists as recent.
    #[serde(default = "default_recent_appointments_limit")]
    pub recent_appointments_limit: usize,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        ClinicConfig {
            seed_sample_data: default_seed_sample_data(),
            recent_appointments_limit: default_recent_appointments_limit(),
            storage: StorageConfig::default(),
        }
    }
}
