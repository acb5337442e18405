// models/src/errors.rs

pub use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("record {0} was not found")]
    NotFound(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String), // Durable read or write failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to acquire lock: {0}")]
    LockError(String),
}

impl ClinicError {
    /// Whether the error came from the durable store rather than from the caller's input.
    pub fn is_storage_failure(&self) -> bool {
        match self {
            ClinicError::StorageUnavailable(_) | ClinicError::LockError(_) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ClinicError::DeserializationError(format!("JSON processing error: {}", err))
        } else {
            ClinicError::SerializationError(format!("JSON processing error: {}", err))
        }
    }
}

// Every sled failure means the durable store could not be used.
#[cfg(feature = "sled-errors")]
impl From<sled::Error> for ClinicError {
    fn from(err: sled::Error) -> Self {
        ClinicError::StorageUnavailable(format!("sled error: {}", err))
    }
}

/// A validation error raised while coercing raw input into a typed record.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field was absent or blank.
    #[error("required field '{0}' is missing")]
    MissingField(String),
    /// A numeric field could not be parsed.
    #[error("field '{0}' is not a valid number: {1}")]
    InvalidNumber(String, String),
    /// A numeric field parsed but lies outside the accepted range.
    #[error("field '{0}' is out of range: {1}")]
    OutOfRange(String, String),
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    #[error("invalid time format: {0}")]
    InvalidTime(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    /// The status is not one of `scheduled` or `completed`.
    #[error("invalid appointment status: {0}")]
    InvalidStatus(String),
    #[error("identifier '{0}' is invalid")]
    InvalidIdentifier(String),
}

/// A type alias for a `Result` that returns a `ClinicError` on failure.
pub type ClinicResult<T> = Result<T, ClinicError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_storage_failures() {
        assert!(ClinicError::StorageUnavailable("disk full".to_string()).is_storage_failure());
        assert!(!ClinicError::NotFound("abc".to_string()).is_storage_failure());
        assert!(!ClinicError::from(ValidationError::MissingField("name".to_string())).is_storage_failure());
    }

    #[test]
    fn should_map_malformed_json_to_deserialization_error() {
        let err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        assert!(matches!(ClinicError::from(err), ClinicError::DeserializationError(_)));
    }
}
