// lib/src/views.rs

//! Read-only projections over the store for presentation: appointments with
//! their references resolved, and the dashboard totals.

use models::{Appointment, Doctor, Patient};
use serde::Serialize;

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// An appointment together with whatever its weak references still resolve to.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentView<'a> {
    pub appointment: &'a Appointment,
    pub patient: Option<&'a Patient>,
    pub doctor: Option<&'a Doctor>,
}

impl<'a> AppointmentView<'a> {
    pub fn patient_name(&self) -> &'a str {
        self.patient.map(|p| p.name.as_str()).unwrap_or(UNKNOWN)
    }

    pub fn doctor_name(&self) -> &'a str {
        self.doctor.map(|d| d.name.as_str()).unwrap_or(UNKNOWN)
    }

    /// Labels used in the dashboard's recent list.
    pub fn patient_label(&self) -> &'a str {
        self.patient.map(|p| p.name.as_str()).unwrap_or(UNKNOWN_PATIENT)
    }

    pub fn doctor_label(&self) -> &'a str {
        self.doctor.map(|d| d.name.as_str()).unwrap_or(UNKNOWN_DOCTOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub todays_appointments: usize,
    pub pending_appointments: usize,
}
