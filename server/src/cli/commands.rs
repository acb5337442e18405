// server/src/cli/commands.rs

// This file defines the command-line arguments and subcommands
// for the clinic CLI using the `clap` crate.
use clap::{Args, Parser, Subcommand};
use models::FormFields;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clinic-cli")]
#[command(version = "0.1.0")]
#[command(about = "Clinic management: patients, doctors and appointments")]
pub struct CliArgs {
    /// Path to a TOML config file (falls back to $CLINIC_CONFIG, then ./clinic.toml)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ClinicCommands,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ClinicCommands {
    /// Totals, today's and pending appointments, and the most recent bookings
    Dashboard {
        /// Print the totals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage patients
    Patients {
        #[command(subcommand)]
        action: PatientAction,
    },
    /// Manage doctors
    Doctors {
        #[command(subcommand)]
        action: DoctorAction,
    },
    /// Manage appointments
    Appointments {
        #[command(subcommand)]
        action: AppointmentAction,
    },
    /// Fill empty collections with sample records
    Seed,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum PatientAction {
    List {
        /// Only show rows containing this text (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    Show { id: String },
    Add(AddPatientArgs),
    Delete { id: String },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum DoctorAction {
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    Show { id: String },
    Add(AddDoctorArgs),
    Delete { id: String },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum AppointmentAction {
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    Show { id: String },
    Add(AddAppointmentArgs),
    /// Mark an appointment as completed
    Complete { id: String },
    /// Set an appointment's status (scheduled or completed)
    Status { id: String, status: String },
    Delete { id: String },
}

// Values stay as text here; coercion and validation happen when the
// arguments are turned into a typed record.
#[derive(Debug, Args, PartialEq)]
pub struct AddPatientArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args, PartialEq)]
pub struct AddDoctorArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub specialization: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub schedule: Option<String>,
}

#[derive(Debug, Args, PartialEq)]
pub struct AddAppointmentArgs {
    #[arg(long = "patient-id")]
    pub patient_id: String,
    #[arg(long = "doctor-id")]
    pub doctor_id: String,
    /// Date as YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Time as HH:MM
    #[arg(long)]
    pub time: String,
    #[arg(long)]
    pub reason: Option<String>,
}

impl AddPatientArgs {
    pub fn to_form_fields(&self) -> FormFields {
        let mut fields = FormFields::new().with("name", &self.name).with("age", &self.age);
        fields.insert_opt("gender", self.gender.as_deref());
        fields.insert_opt("phone", self.phone.as_deref());
        fields.insert_opt("email", self.email.as_deref());
        fields.insert_opt("address", self.address.as_deref());
        fields
    }
}

impl AddDoctorArgs {
    pub fn to_form_fields(&self) -> FormFields {
        let mut fields = FormFields::new()
            .with("name", &self.name)
            .with("specialization", &self.specialization);
        fields.insert_opt("phone", self.phone.as_deref());
        fields.insert_opt("email", self.email.as_deref());
        fields.insert_opt("schedule", self.schedule.as_deref());
        fields
    }
}

impl AddAppointmentArgs {
    pub fn to_form_fields(&self) -> FormFields {
        let mut fields = FormFields::new()
            .with("patientId", &self.patient_id)
            .with("doctorId", &self.doctor_id)
            .with("date", &self.date)
            .with("time", &self.time);
        fields.insert_opt("reason", self.reason.as_deref());
        fields
    }
}
