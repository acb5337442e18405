// lib/src/config/config_constants.rs

pub const DEFAULT_CONFIG_FILE: &str = "clinic.toml";
pub const CONFIG_PATH_ENV_VAR: &str = "CLINIC_CONFIG";
pub const DEFAULT_DATA_DIRECTORY: &str = "./clinic_data";
pub const DEFAULT_CACHE_CAPACITY: u64 = 64 * 1024 * 1024;
pub const DEFAULT_RECENT_APPOINTMENTS_LIMIT: usize = 5;
