// lib/src/seed.rs

//! Sample records for a fresh installation. Each collection is seeded on its
//! own, and only while it is empty.

use chrono::{Duration, NaiveTime};
use log::info;

use models::errors::ClinicResult;
use models::{NewAppointment, NewDoctor, NewPatient};

use crate::database::ClinicStore;

/// How many records of each kind a seeding pass added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.patients == 0 && self.doctors == 0 && self.appointments == 0
    }
}

fn sample_patients() -> Vec<NewPatient> {
    let sample = |name: &str, age: u32, gender: &str, phone: &str, email: &str, address: &str| NewPatient {
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    };
    vec![
        sample("John Doe", 35, "Male", "+1-555-0123", "john.doe@email.com", "123 Main St, City, State"),
        sample("Jane Smith", 28, "Female", "+1-555-0124", "jane.smith@email.com", "456 Oak Ave, City, State"),
        sample("Mike Johnson", 42, "Male", "+1-555-0125", "mike.johnson@email.com", "789 Pine Rd, City, State"),
    ]
}

fn sample_doctors() -> Vec<NewDoctor> {
    let sample = |name: &str, specialization: &str, phone: &str, email: &str, schedule: &str| NewDoctor {
        name: name.to_string(),
        specialization: specialization.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        schedule: schedule.to_string(),
    };
    vec![
        sample("Dr. Sarah Wilson", "Cardiology", "+1-555-0101", "sarah.wilson@clinic.com", "Monday-Friday: 9 AM - 5 PM"),
        sample("Dr. Robert Chen", "Dermatology", "+1-555-0102", "robert.chen@clinic.com", "Monday-Thursday: 10 AM - 6 PM"),
        sample("Dr. Emily Davis", "Pediatrics", "+1-555-0103", "emily.davis@clinic.com", "Tuesday-Saturday: 8 AM - 4 PM"),
    ]
}

/// Fills whichever collections are empty: patients, then doctors, then
/// appointments. Sample appointments need at least one patient and one doctor.
pub fn seed_sample_data(store: &mut ClinicStore) -> ClinicResult<SeedReport> {
    let mut report = SeedReport::default();

    if store.list_patients().is_empty() {
        for patient in sample_patients() {
            store.add_patient(patient)?;
            report.patients += 1;
        }
    }

    if store.list_doctors().is_empty() {
        for doctor in sample_doctors() {
            store.add_doctor(doctor)?;
            report.doctors += 1;
        }
    }

    if store.list_appointments().is_empty() && !store.list_patients().is_empty() && !store.list_doctors().is_empty() {
        let today = store.today();
        let patients = store.list_patients();
        let doctors = store.list_doctors();
        let second_patient = patients.get(1).unwrap_or(&patients[0]);
        let second_doctor = doctors.get(1).unwrap_or(&doctors[0]);

        let bookings = vec![
            NewAppointment {
                patient_id: patients[0].id.clone(),
                doctor_id: doctors[0].id.clone(),
                date: today,
                time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
                reason: "Regular checkup".to_string(),
            },
            NewAppointment {
                patient_id: second_patient.id.clone(),
                doctor_id: second_doctor.id.clone(),
                date: today + Duration::days(1),
                time: NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default(),
                reason: "Skin consultation".to_string(),
            },
        ];
        for booking in bookings {
            store.add_appointment(booking)?;
            report.appointments += 1;
        }
    }

    if !report.is_empty() {
        info!(
            "Seeded sample data: {} patients, {} doctors, {} appointments",
            report.patients, report.doctors, report.appointments
        );
    }
    Ok(report)
}
