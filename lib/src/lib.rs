// lib/src/lib.rs

//! Clinic data store: the patient, doctor and appointment collections, the
//! key-value engines they persist to, configuration and sample-data seeding.

pub mod config;
pub mod database;
pub mod seed;
pub mod storage_engine;
pub mod util;
pub mod views;

pub use models::{
    Appointment, AppointmentStatus, ClinicError, ClinicResult, Doctor, FormFields, NewAppointment,
    NewDoctor, NewPatient, Patient, RecordId, ValidationError,
};

// Explicit re-exports
pub use crate::config::{load_clinic_config, ClinicConfig};
pub use crate::database::ClinicStore;
pub use crate::seed::{seed_sample_data, SeedReport};
pub use crate::storage_engine::{create_storage, StorageConfig, StorageEngine, StorageEngineType};
pub use crate::util::{Clock, SystemClock};
pub use crate::views::{AppointmentView, DashboardSummary};
