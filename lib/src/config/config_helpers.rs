// lib/src/config/config_helpers.rs

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use models::errors::{ClinicError, ClinicResult};

use crate::config::config_constants::{CONFIG_PATH_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::config::config_structs::ClinicConfig;

/// Parses a configuration from TOML text.
pub fn parse_clinic_config(content: &str) -> ClinicResult<ClinicConfig> {
    toml::from_str(content).map_err(|e| ClinicError::ConfigError(format!("Failed to parse config: {}", e)))
}

/// Loads the clinic configuration.
///
/// Lookup order: the explicit path, then the `CLINIC_CONFIG` environment
/// variable, then `./clinic.toml`. An explicitly named file (by argument or
/// environment) must exist; the implicit default falls back to built-in
/// defaults when absent.
pub fn load_clinic_config(config_file_path: Option<&Path>) -> ClinicResult<ClinicConfig> {
    let explicit = config_file_path
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from));

    let path_to_use = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ClinicError::ConfigError(format!(
                    "Config file not found at {}",
                    path.display()
                )));
            }
            path
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                warn!("Config file not found at {}. Using default clinic config.", default_path.display());
                return Ok(ClinicConfig::default());
            }
            default_path
        }
    };

    info!("Loading clinic config from {:?}", path_to_use);
    let content = fs::read_to_string(&path_to_use).map_err(|e| {
        ClinicError::ConfigError(format!("Failed to read config file {}: {}", path_to_use.display(), e))
    })?;
    let config = parse_clinic_config(&content)?;
    debug!("Loaded clinic config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::StorageEngineType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config = parse_clinic_config("seed_sample_data = false\n").unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.recent_appointments_limit, 5);
        assert_eq!(config.storage.engine_type, StorageEngineType::Sled);
    }

    #[test]
    fn should_load_storage_section_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "recent_appointments_limit = 3\n\n[storage]\nengine_type = \"file\"\ndata_directory = \"/tmp/clinic\"\n"
        )
        .unwrap();

        let config = load_clinic_config(Some(file.path())).unwrap();
        assert_eq!(config.recent_appointments_limit, 3);
        assert_eq!(config.storage.engine_type, StorageEngineType::File);
        assert_eq!(config.storage.data_directory, PathBuf::from("/tmp/clinic"));
    }

    #[test]
    fn should_fail_on_missing_explicit_file() {
        let err = load_clinic_config(Some(Path::new("/definitely/not/here/clinic.toml"))).unwrap_err();
        assert!(matches!(err, ClinicError::ConfigError(_)));
    }

    #[test]
    fn should_reject_unknown_engine() {
        let err = parse_clinic_config("[storage]\nengine_type = \"rocksdb\"\n").unwrap_err();
        assert!(matches!(err, ClinicError::ConfigError(_)));
    }
}
