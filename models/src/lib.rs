// models/src/lib.rs

//! Shared record types for the clinic: patients, doctors and appointments,
//! their typed input forms, identifiers and the error taxonomy.

pub mod errors;
pub mod fields;
pub mod identifiers;
pub mod medical;
pub mod serializers;

pub use errors::{ClinicError, ClinicResult, ValidationError, ValidationResult};
pub use fields::FormFields;
pub use identifiers::RecordId;
pub use medical::{
    Record,
    Appointment, AppointmentStatus, Doctor, NewAppointment, NewDoctor, NewPatient, Patient,
};
