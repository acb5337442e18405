// server/src/cli/mod.rs

// Declares the modules within the 'cli' directory and re-exports the
// entry points used by main.rs and the tests.

pub mod cli;
pub mod commands;
pub mod handlers;
pub mod render;

pub use cli::{run, run_with_config, start_cli};
pub use commands::{
    AddAppointmentArgs, AddDoctorArgs, AddPatientArgs, AppointmentAction, CliArgs, ClinicCommands,
    DoctorAction, PatientAction,
};
