use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::fields::FormFields;
use crate::identifiers::RecordId;
use crate::serializers::{iso_millis, parse_time, time_hm, DATE_FORMAT};

/// Lifecycle of an appointment. Bookings start as `Scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    // Weak references: they may dangle after a delete, and some stored
    // bookings were written without them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<RecordId>,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub time: NaiveTime,
    #[serde(default)]
    pub reason: String,
    pub status: AppointmentStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }

    pub fn patient_ref(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    pub fn doctor_ref(&self) -> Option<&str> {
        self.doctor_id.as_deref()
    }
}

/// A booking request. There is no status here: every booking starts out scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

impl NewAppointment {
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Appointment {
        Appointment {
            id,
            patient_id: Some(self.patient_id),
            doctor_id: Some(self.doctor_id),
            date: self.date,
            time: self.time,
            reason: self.reason,
            status: AppointmentStatus::Scheduled,
            created_at,
        }
    }
}

impl TryFrom<&FormFields> for NewAppointment {
    type Error = ValidationError;

    fn try_from(fields: &FormFields) -> ValidationResult<Self> {
        let date_raw = fields.required("date")?;
        let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date_raw.clone()))?;
        let time_raw = fields.required("time")?;
        let time = parse_time(&time_raw).ok_or(ValidationError::InvalidTime(time_raw))?;

        Ok(NewAppointment {
            patient_id: RecordId::new(fields.required("patientId")?)?,
            doctor_id: RecordId::new(fields.required("doctorId")?)?,
            date,
            time,
            reason: fields.text("reason"),
        })
    }
}
