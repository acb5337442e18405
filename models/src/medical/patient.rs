use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::fields::{check_email, FormFields};
use crate::identifiers::RecordId;
use crate::serializers::iso_millis;

pub const MAX_PATIENT_AGE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    /// Stored data may hold `null` or a negative number here; new registrations
    /// are always within `0..=MAX_PATIENT_AGE`.
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: String, // e.g., "Male", "Female", "Other"
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// The age if it is one a registration could have produced.
    pub fn valid_age(&self) -> Option<u32> {
        self.age
            .and_then(|age| u32::try_from(age).ok())
            .filter(|age| *age <= MAX_PATIENT_AGE)
    }
}

/// A patient as submitted for registration, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        NewPatient {
            name: name.into(),
            age,
            gender: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.age > MAX_PATIENT_AGE {
            return Err(ValidationError::OutOfRange("age".to_string(), self.age.to_string()));
        }
        check_email(&self.email)
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Patient {
        Patient {
            id,
            name: self.name,
            age: Some(i64::from(self.age)),
            gender: self.gender,
            phone: self.phone,
            email: self.email,
            address: self.address,
            created_at,
        }
    }
}

impl TryFrom<&FormFields> for NewPatient {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> ValidationResult<Self> {
        let age_raw = fields.required("age")?;
        if age_raw.starts_with('-') {
            return Err(ValidationError::OutOfRange("age".to_string(), age_raw));
        }
        let patient = NewPatient {
            name: fields.required("name")?,
            age: fields.required_number("age")?,
            gender: fields.text("gender"),
            phone: fields.text("phone"),
            email: fields.text("email"),
            address: fields.text("address"),
        };
        patient.validate()?;
        Ok(patient)
    }
}
