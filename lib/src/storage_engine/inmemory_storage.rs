// lib/src/storage_engine/inmemory_storage.rs
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use models::errors::{ClinicError, ClinicResult};

use super::storage_engine::StorageEngine;

/// Non-durable storage for tests and dry runs. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageEngine for InMemoryStorage {
    fn connect(&self) -> ClinicResult<()> {
        Ok(())
    }

    fn insert(&self, key: &str, value: &[u8]) -> ClinicResult<()> {
        let mut values = self.values.write().map_err(|e| ClinicError::LockError(e.to_string()))?;
        values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> ClinicResult<Option<Vec<u8>>> {
        let values = self.values.read().map_err(|e| ClinicError::LockError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn delete(&self, key: &str) -> ClinicResult<()> {
        let mut values = self.values.write().map_err(|e| ClinicError::LockError(e.to_string()))?;
        values.remove(key);
        Ok(())
    }

    fn flush(&self) -> ClinicResult<()> {
        Ok(())
    }

    fn get_type(&self) -> &'static str {
        "InMemory"
    }
}
