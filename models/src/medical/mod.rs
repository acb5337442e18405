pub mod appointment;
pub mod doctor;
pub mod patient;

use chrono::{DateTime, Utc};

use crate::identifiers::RecordId;

pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use doctor::{Doctor, NewDoctor};
pub use patient::{NewPatient, Patient, MAX_PATIENT_AGE};

/// Common accessors for anything stored in a collection.
pub trait Record {
    fn id(&self) -> &RecordId;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &RecordId {
                    &self.id
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )*
    };
}

impl_record!(Patient, Doctor, Appointment);
