use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::fields::{check_email, FormFields};
use crate::identifiers::RecordId;
use crate::serializers::iso_millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub schedule: String, // Free text, e.g. "Monday-Friday: 9 AM - 5 PM"
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub phone: String,
    pub email: String,
    pub schedule: String,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        NewDoctor {
            name: name.into(),
            specialization: specialization.into(),
            phone: String::new(),
            email: String::new(),
            schedule: String::new(),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.specialization.trim().is_empty() {
            return Err(ValidationError::MissingField("specialization".to_string()));
        }
        check_email(&self.email)
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialization: self.specialization,
            phone: self.phone,
            email: self.email,
            schedule: self.schedule,
            created_at,
        }
    }
}

impl TryFrom<&FormFields> for NewDoctor {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> ValidationResult<Self> {
        let doctor = NewDoctor {
            name: fields.required("name")?,
            specialization: fields.required("specialization")?,
            phone: fields.text("phone"),
            email: fields.text("email"),
            schedule: fields.text("schedule"),
        };
        doctor.validate()?;
        Ok(doctor)
    }
}
