// server/src/cli/handlers.rs

// One handler per subcommand. Handlers take the opened store and an output
// sink; user-facing results go to `out`, failures come back as errors.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use log::debug;
use models::{AppointmentStatus, NewAppointment, NewDoctor, NewPatient};
use clinic_lib::{seed_sample_data, ClinicStore};

use crate::cli::commands::{AppointmentAction, DoctorAction, PatientAction};
use crate::cli::render::{
    appointment_row, doctor_row, filter_rows, format_age, format_date, patient_row, status_badge,
    write_styled_table, write_table,
};

const PATIENT_HEADERS: [&str; 5] = ["ID", "Name", "Age", "Phone", "Email"];
const DOCTOR_HEADERS: [&str; 5] = ["ID", "Name", "Specialization", "Phone", "Email"];
const APPOINTMENT_HEADERS: [&str; 6] = ["ID", "Patient", "Doctor", "Date", "Time", "Status"];
const STATUS_COLUMN: usize = 5;

pub fn handle_dashboard(store: &ClinicStore, recent_limit: usize, json: bool, out: &mut dyn Write) -> Result<()> {
    let summary = store.dashboard_summary();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    writeln!(out, "Total patients:        {}", summary.total_patients)?;
    writeln!(out, "Total doctors:         {}", summary.total_doctors)?;
    writeln!(out, "Today's appointments:  {}", summary.todays_appointments)?;
    writeln!(out, "Pending appointments:  {}", summary.pending_appointments)?;
    writeln!(out)?;
    writeln!(out, "Recent appointments")?;

    let recent = store.recent_appointment_views(recent_limit);
    if recent.is_empty() {
        writeln!(out, "No recent appointments")?;
        return Ok(());
    }
    for view in recent {
        writeln!(
            out,
            "  {} - {} • {} {} [{}]",
            view.patient_label(),
            view.doctor_label(),
            format_date(view.appointment.date),
            view.appointment.time.format("%H:%M"),
            view.appointment.status
        )?;
    }
    Ok(())
}

pub fn handle_patients(store: &mut ClinicStore, action: PatientAction, out: &mut dyn Write) -> Result<()> {
    match action {
        PatientAction::List { search } => {
            let rows = store.list_patients().iter().map(patient_row).collect();
            let rows = filter_rows(rows, search.as_deref());
            write_table(out, &PATIENT_HEADERS, &rows, "No patients found")?;
        }
        PatientAction::Show { id } => {
            let patient = store
                .find_patient_by_id(&id)
                .ok_or_else(|| anyhow!("No patient found with id {}", id))?;
            writeln!(out, "ID:       {}", patient.id)?;
            writeln!(out, "Name:     {}", patient.name)?;
            writeln!(out, "Age:      {}", format_age(patient.age))?;
            writeln!(out, "Gender:   {}", patient.gender)?;
            writeln!(out, "Phone:    {}", patient.phone)?;
            writeln!(out, "Email:    {}", patient.email)?;
            writeln!(out, "Address:  {}", patient.address)?;
            writeln!(out, "Created:  {}", patient.created_at.to_rfc3339())?;
        }
        PatientAction::Add(args) => {
            let input = NewPatient::try_from(&args.to_form_fields()).context("Invalid patient details")?;
            let patient = store.add_patient(input)?;
            writeln!(out, "Patient added successfully! (id: {})", patient.id)?;
        }
        PatientAction::Delete { id } => match store.delete_patient(&id)? {
            Some(patient) => writeln!(out, "Patient deleted successfully! ({})", patient.name)?,
            None => writeln!(out, "No patient found with id {}", id)?,
        },
    }
    Ok(())
}

pub fn handle_doctors(store: &mut ClinicStore, action: DoctorAction, out: &mut dyn Write) -> Result<()> {
    match action {
        DoctorAction::List { search } => {
            let rows = store.list_doctors().iter().map(doctor_row).collect();
            let rows = filter_rows(rows, search.as_deref());
            write_table(out, &DOCTOR_HEADERS, &rows, "No doctors found")?;
        }
        DoctorAction::Show { id } => {
            let doctor = store
                .find_doctor_by_id(&id)
                .ok_or_else(|| anyhow!("No doctor found with id {}", id))?;
            writeln!(out, "ID:              {}", doctor.id)?;
            writeln!(out, "Name:            {}", doctor.name)?;
            writeln!(out, "Specialization:  {}", doctor.specialization)?;
            writeln!(out, "Phone:           {}", doctor.phone)?;
            writeln!(out, "Email:           {}", doctor.email)?;
            writeln!(out, "Schedule:        {}", doctor.schedule)?;
            writeln!(out, "Created:         {}", doctor.created_at.to_rfc3339())?;
        }
        DoctorAction::Add(args) => {
            let input = NewDoctor::try_from(&args.to_form_fields()).context("Invalid doctor details")?;
            let doctor = store.add_doctor(input)?;
            writeln!(out, "Doctor added successfully! (id: {})", doctor.id)?;
        }
        DoctorAction::Delete { id } => match store.delete_doctor(&id)? {
            Some(doctor) => writeln!(out, "Doctor deleted successfully! ({})", doctor.name)?,
            None => writeln!(out, "No doctor found with id {}", id)?,
        },
    }
    Ok(())
}

pub fn handle_appointments(
    store: &mut ClinicStore,
    action: AppointmentAction,
    styled: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        AppointmentAction::List { search } => {
            let rows = store.appointment_views().iter().map(appointment_row).collect();
            let rows = filter_rows(rows, search.as_deref());
            write_styled_table(out, &APPOINTMENT_HEADERS, &rows, "No appointments found", |column, cell| {
                if column != STATUS_COLUMN {
                    return cell.to_string();
                }
                cell.parse::<AppointmentStatus>()
                    .map(|status| status_badge(status, styled))
                    .unwrap_or_else(|_| cell.to_string())
            })?;
        }
        AppointmentAction::Show { id } => {
            let appointment = store
                .find_appointment_by_id(&id)
                .ok_or_else(|| anyhow!("No appointment found with id {}", id))?;
            let view = store.appointment_view(appointment);
            writeln!(out, "ID:       {}", appointment.id)?;
            writeln!(out, "Patient:  {} ({})", view.patient_name(), appointment.patient_ref().unwrap_or("none"))?;
            writeln!(out, "Doctor:   {} ({})", view.doctor_name(), appointment.doctor_ref().unwrap_or("none"))?;
            writeln!(out, "Date:     {}", format_date(appointment.date))?;
            writeln!(out, "Time:     {}", appointment.time.format("%H:%M"))?;
            writeln!(out, "Reason:   {}", appointment.reason)?;
            writeln!(out, "Status:   {}", status_badge(appointment.status, styled))?;
        }
        AppointmentAction::Add(args) => {
            let input = NewAppointment::try_from(&args.to_form_fields()).context("Invalid appointment details")?;
            let appointment = store.add_appointment(input)?;
            writeln!(out, "Appointment booked successfully! (id: {})", appointment.id)?;
        }
        AppointmentAction::Complete { id } => {
            set_status(store, &id, AppointmentStatus::Completed, out)?;
        }
        AppointmentAction::Status { id, status } => {
            let status = status.parse::<AppointmentStatus>()?;
            set_status(store, &id, status, out)?;
        }
        AppointmentAction::Delete { id } => match store.delete_appointment(&id)? {
            Some(_) => writeln!(out, "Appointment deleted successfully!")?,
            None => writeln!(out, "No appointment found with id {}", id)?,
        },
    }
    Ok(())
}

fn set_status(store: &mut ClinicStore, id: &str, status: AppointmentStatus, out: &mut dyn Write) -> Result<()> {
    match store.update_appointment_status(id, status)? {
        Some(_) => writeln!(out, "Appointment marked as {}!", status)?,
        None => {
            debug!("status update skipped for unknown appointment {}", id);
            writeln!(out, "No appointment found with id {}", id)?
        }
    }
    Ok(())
}

pub fn handle_seed(store: &mut ClinicStore, out: &mut dyn Write) -> Result<()> {
    let report = seed_sample_data(store)?;
    if report.is_empty() {
        writeln!(out, "Nothing to seed: every collection already has records")?;
    } else {
        writeln!(
            out,
            "Seeded {} patients, {} doctors, {} appointments",
            report.patients, report.doctors, report.appointments
        )?;
    }
    Ok(())
}
