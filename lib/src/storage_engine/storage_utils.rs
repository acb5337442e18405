// lib/src/storage_engine/storage_utils.rs

use std::fmt;

use models::errors::{ClinicError, ClinicResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage_engine::StorageEngine;

/// The three stored collections and their storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Patients,
    Doctors,
    Appointments,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Patients, Collection::Doctors, Collection::Appointments];

    pub fn key(&self) -> &'static str {
        match self {
            Collection::Patients => "patients",
            Collection::Doctors => "doctors",
            Collection::Appointments => "appointments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Helper to serialize a collection to the stored JSON array.
pub fn serialize_collection<T: Serialize>(records: &[T]) -> ClinicResult<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| ClinicError::SerializationError(e.to_string()))
}

/// Helper to deserialize a stored JSON array.
pub fn deserialize_collection<T: DeserializeOwned>(bytes: &[u8]) -> ClinicResult<Vec<T>> {
    serde_json::from_slice(bytes).map_err(|e| ClinicError::DeserializationError(e.to_string()))
}

/// Reads a collection; an absent key is an empty collection.
pub fn read_collection<T: DeserializeOwned>(
    engine: &dyn StorageEngine,
    collection: Collection,
) -> ClinicResult<Vec<T>> {
    match engine.retrieve(collection.key())? {
        Some(bytes) => deserialize_collection(&bytes).map_err(|e| match e {
            ClinicError::DeserializationError(msg) => {
                ClinicError::DeserializationError(format!("collection '{}': {}", collection, msg))
            }
            other => other,
        }),
        None => Ok(Vec::new()),
    }
}

/// Writes a whole collection under its key.
pub fn write_collection<T: Serialize>(
    engine: &dyn StorageEngine,
    collection: Collection,
    records: &[T],
) -> ClinicResult<()> {
    let bytes = serialize_collection(records)?;
    engine.insert(collection.key(), &bytes)
}
