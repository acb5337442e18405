// lib/src/storage_engine/storage_engine.rs

use std::fmt::Debug;

use models::errors::ClinicResult;

/// A durable key-value store of opaque byte values.
///
/// Every collection is written as one value under its own key, so engines only
/// need whole-value reads and writes.
pub trait StorageEngine: Debug + Send + Sync {
    fn connect(&self) -> ClinicResult<()>;
    fn insert(&self, key: &str, value: &[u8]) -> ClinicResult<()>;
    fn retrieve(&self, key: &str) -> ClinicResult<Option<Vec<u8>>>;
    fn delete(&self, key: &str) -> ClinicResult<()>;
    fn flush(&self) -> ClinicResult<()>;
    fn get_type(&self) -> &'static str;
}
