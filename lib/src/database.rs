// lib/src/database.rs

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, error, info, warn};
use serde::Serialize;

use models::errors::{ClinicError, ClinicResult};
use models::{
    Appointment, AppointmentStatus, Doctor, NewAppointment, NewDoctor, NewPatient, Patient, Record,
};

use crate::config::ClinicConfig;
use crate::seed::seed_sample_data;
use crate::storage_engine::storage_utils::{read_collection, write_collection};
use crate::storage_engine::{create_storage, Collection, StorageEngine};
use crate::util::{find_by_id, next_record_id, position_by_id, system_clock, Clock};
use crate::views::{AppointmentView, DashboardSummary};

/// The clinic's data store: patients, doctors and appointments held in memory
/// and written through to a `StorageEngine` on every mutation.
///
/// Each collection is persisted whole under its own key. A mutation is staged
/// on a copy of the collection and only replaces the in-memory collection once
/// the durable write succeeded, so memory and storage never diverge.
///
/// Appointments hold weak references: deleting a patient or doctor leaves
/// their appointments in place, and lookups for them return `None`.
pub struct ClinicStore {
    storage_engine: Arc<dyn StorageEngine>,
    clock: Arc<dyn Clock>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl std::fmt::Debug for ClinicStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClinicStore")
            .field("storage_engine", &self.storage_engine.get_type())
            .field("patients", &self.patients.len())
            .field("doctors", &self.doctors.len())
            .field("appointments", &self.appointments.len())
            .finish()
    }
}

/// Persists `staged` and, only if that succeeded, makes it the live collection.
fn commit<T: Serialize>(
    engine: &dyn StorageEngine,
    collection: Collection,
    live: &mut Vec<T>,
    staged: Vec<T>,
) -> ClinicResult<()> {
    write_collection(engine, collection, &staged).map_err(|e| {
        error!("Failed to persist {}: {}", collection, e);
        match e {
            ClinicError::SerializationError(_) | ClinicError::StorageUnavailable(_) => e,
            other => ClinicError::StorageUnavailable(other.to_string()),
        }
    })?;
    *live = staged;
    Ok(())
}

impl ClinicStore {
    /// Opens the configured storage engine, loads all collections and seeds
    /// empty ones when `seed_sample_data` is set.
    pub fn open(config: &ClinicConfig) -> ClinicResult<Self> {
        let engine = create_storage(&config.storage)?;
        let mut store = ClinicStore::load(engine)?;
        if config.seed_sample_data {
            seed_sample_data(&mut store)?;
        }
        Ok(store)
    }

    pub fn load(storage_engine: Arc<dyn StorageEngine>) -> ClinicResult<Self> {
        ClinicStore::load_with_clock(storage_engine, system_clock())
    }

    /// Reads the three collections from `storage_engine`. Absent keys load as
    /// empty collections.
    pub fn load_with_clock(storage_engine: Arc<dyn StorageEngine>, clock: Arc<dyn Clock>) -> ClinicResult<Self> {
        let patients = read_collection(storage_engine.as_ref(), Collection::Patients)?;
        let doctors = read_collection(storage_engine.as_ref(), Collection::Doctors)?;
        let appointments = read_collection(storage_engine.as_ref(), Collection::Appointments)?;

        let store = ClinicStore {
            storage_engine,
            clock,
            patients,
            doctors,
            appointments,
        };
        store.warn_on_legacy_records();
        info!(
            "Loaded clinic store from {} storage: {} patients, {} doctors, {} appointments",
            store.storage_engine.get_type(),
            store.patients.len(),
            store.doctors.len(),
            store.appointments.len()
        );
        Ok(store)
    }

    fn warn_on_legacy_records(&self) {
        for patient in self.patients.iter().filter(|p| p.valid_age().is_none()) {
            warn!("Patient {} has no valid age stored ({:?})", patient.id, patient.age);
        }
        for appointment in &self.appointments {
            if appointment.patient_id.is_none() || appointment.doctor_id.is_none() {
                warn!("Appointment {} is missing a patient or doctor reference", appointment.id);
            }
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // --- Patients ---

    pub fn add_patient(&mut self, input: NewPatient) -> ClinicResult<Patient> {
        input.validate()?;
        let patient = input.into_record(next_record_id(&self.patients), self.clock.now());

        let mut staged = self.patients.clone();
        staged.push(patient.clone());
        commit(self.storage_engine.as_ref(), Collection::Patients, &mut self.patients, staged)?;

        info!("Added patient {} ({})", patient.id, patient.name);
        Ok(patient)
    }

    /// Removes a patient. Returns `None` when no patient has that id; their
    /// appointments are left untouched either way.
    pub fn delete_patient(&mut self, id: &str) -> ClinicResult<Option<Patient>> {
        let Some(index) = position_by_id(&self.patients, id) else {
            debug!("delete_patient: no patient with id {}", id);
            return Ok(None);
        };

        let mut staged = self.patients.clone();
        let removed = staged.remove(index);
        commit(self.storage_engine.as_ref(), Collection::Patients, &mut self.patients, staged)?;

        info!("Deleted patient {}", removed.id);
        Ok(Some(removed))
    }

    pub fn find_patient_by_id(&self, id: &str) -> Option<&Patient> {
        find_by_id(&self.patients, id)
    }

    pub fn list_patients(&self) -> &[Patient] {
        &self.patients
    }

    // --- Doctors ---

    pub fn add_doctor(&mut self, input: NewDoctor) -> ClinicResult<Doctor> {
        input.validate()?;
        let doctor = input.into_record(next_record_id(&self.doctors), self.clock.now());

        let mut staged = self.doctors.clone();
        staged.push(doctor.clone());
        commit(self.storage_engine.as_ref(), Collection::Doctors, &mut self.doctors, staged)?;

        info!("Added doctor {} ({})", doctor.id, doctor.name);
        Ok(doctor)
    }

    pub fn delete_doctor(&mut self, id: &str) -> ClinicResult<Option<Doctor>> {
        let Some(index) = position_by_id(&self.doctors, id) else {
            debug!("delete_doctor: no doctor with id {}", id);
            return Ok(None);
        };

        let mut staged = self.doctors.clone();
        let removed = staged.remove(index);
        commit(self.storage_engine.as_ref(), Collection::Doctors, &mut self.doctors, staged)?;

        info!("Deleted doctor {}", removed.id);
        Ok(Some(removed))
    }

    pub fn find_doctor_by_id(&self, id: &str) -> Option<&Doctor> {
        find_by_id(&self.doctors, id)
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    // --- Appointments ---

    /// Books an appointment. The patient and doctor must exist at booking
    /// time; the new appointment is always `scheduled`.
    pub fn add_appointment(&mut self, input: NewAppointment) -> ClinicResult<Appointment> {
        if self.find_patient_by_id(&input.patient_id).is_none() {
            return Err(ClinicError::NotFound(format!("patient {}", input.patient_id)));
        }
        if self.find_doctor_by_id(&input.doctor_id).is_none() {
            return Err(ClinicError::NotFound(format!("doctor {}", input.doctor_id)));
        }
        let summary = format!(
            "for patient {} with doctor {} on {} {}",
            input.patient_id,
            input.doctor_id,
            input.date,
            input.time.format("%H:%M")
        );
        let appointment = input.into_record(next_record_id(&self.appointments), self.clock.now());

        let mut staged = self.appointments.clone();
        staged.push(appointment.clone());
        commit(self.storage_engine.as_ref(), Collection::Appointments, &mut self.appointments, staged)?;

        info!("Booked appointment {} {}", appointment.id, summary);
        Ok(appointment)
    }

    pub fn delete_appointment(&mut self, id: &str) -> ClinicResult<Option<Appointment>> {
        let Some(index) = position_by_id(&self.appointments, id) else {
            debug!("delete_appointment: no appointment with id {}", id);
            return Ok(None);
        };

        let mut staged = self.appointments.clone();
        let removed = staged.remove(index);
        commit(self.storage_engine.as_ref(), Collection::Appointments, &mut self.appointments, staged)?;

        info!("Deleted appointment {}", removed.id);
        Ok(Some(removed))
    }

    /// Sets an appointment's status. Returns the updated appointment, or
    /// `None` (with nothing written) when the id is unknown.
    pub fn update_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> ClinicResult<Option<Appointment>> {
        let Some(index) = position_by_id(&self.appointments, id) else {
            debug!("update_appointment_status: no appointment with id {}", id);
            return Ok(None);
        };

        let mut staged = self.appointments.clone();
        staged[index].status = status;
        let updated = staged[index].clone();
        commit(self.storage_engine.as_ref(), Collection::Appointments, &mut self.appointments, staged)?;

        info!("Appointment {} marked as {}", updated.id, status);
        Ok(Some(updated))
    }

    pub fn complete_appointment(&mut self, id: &str) -> ClinicResult<Option<Appointment>> {
        self.update_appointment_status(id, AppointmentStatus::Completed)
    }

    pub fn find_appointment_by_id(&self, id: &str) -> Option<&Appointment> {
        find_by_id(&self.appointments, id)
    }

    pub fn list_appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// The `n` most recently created appointments, newest first. Appointments
    /// created at the same instant are ordered by later insertion first.
    pub fn recent_appointments(&self, n: usize) -> Vec<&Appointment> {
        let mut recent: Vec<&Appointment> = self.appointments.iter().rev().collect();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        recent.truncate(n);
        recent
    }

    pub fn count_appointments_on(&self, date: NaiveDate) -> usize {
        self.appointments.iter().filter(|a| a.date == date).count()
    }

    pub fn count_todays_appointments(&self) -> usize {
        self.count_appointments_on(self.clock.today())
    }

    pub fn count_pending_appointments(&self) -> usize {
        self.appointments.iter().filter(|a| a.is_pending()).count()
    }

    // --- Views ---

    /// Resolves an appointment's patient and doctor, either of which may be gone.
    pub fn appointment_view<'a>(&'a self, appointment: &'a Appointment) -> AppointmentView<'a> {
        AppointmentView {
            appointment,
            patient: appointment.patient_ref().and_then(|id| self.find_patient_by_id(id)),
            doctor: appointment.doctor_ref().and_then(|id| self.find_doctor_by_id(id)),
        }
    }

    pub fn appointment_views(&self) -> Vec<AppointmentView<'_>> {
        self.appointments.iter().map(|a| self.appointment_view(a)).collect()
    }

    pub fn recent_appointment_views(&self, n: usize) -> Vec<AppointmentView<'_>> {
        self.recent_appointments(n)
            .into_iter()
            .map(|a| self.appointment_view(a))
            .collect()
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_patients: self.patients.len(),
            total_doctors: self.doctors.len(),
            todays_appointments: self.count_todays_appointments(),
            pending_appointments: self.count_pending_appointments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::{InMemoryStorage, SledStorage, StorageConfig, StorageEngineType};
    use crate::util::test_support::SteppingClock;
    use crate::views::UNKNOWN;
    use chrono::{DateTime, NaiveTime, TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn empty_store(engine: Arc<dyn StorageEngine>) -> ClinicStore {
        let clock = Arc::new(SteppingClock::starting_at(start(), today()));
        ClinicStore::load_with_clock(engine, clock).unwrap()
    }

    fn booking(patient: &Patient, doctor: &Doctor, date: NaiveDate) -> NewAppointment {
        NewAppointment {
            patient_id: patient.id.clone(),
            doctor_id: doctor.id.clone(),
            date,
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            reason: "Regular checkup".to_string(),
        }
    }

    fn stored<T: serde::de::DeserializeOwned>(engine: &dyn StorageEngine, collection: Collection) -> Vec<T> {
        read_collection(engine, collection).unwrap()
    }

    /// Fails every write once `failing` is set.
    #[derive(Debug, Default)]
    struct FlakyStorage {
        inner: InMemoryStorage,
        failing: AtomicBool,
    }

    impl StorageEngine for FlakyStorage {
        fn connect(&self) -> ClinicResult<()> {
            Ok(())
        }
        fn insert(&self, key: &str, value: &[u8]) -> ClinicResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ClinicError::StorageUnavailable("quota exceeded".to_string()));
            }
            self.inner.insert(key, value)
        }
        fn retrieve(&self, key: &str) -> ClinicResult<Option<Vec<u8>>> {
            self.inner.retrieve(key)
        }
        fn delete(&self, key: &str) -> ClinicResult<()> {
            self.inner.delete(key)
        }
        fn flush(&self) -> ClinicResult<()> {
            Ok(())
        }
        fn get_type(&self) -> &'static str {
            "Flaky"
        }
    }

    #[test]
    fn should_add_and_delete_patient() {
        let engine = Arc::new(InMemoryStorage::new());
        let mut store = empty_store(engine.clone());

        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        assert!(!ann.id.is_empty());
        assert_eq!(store.list_patients().len(), 1);
        assert_eq!(store.list_patients()[0].name, "Ann");
        assert_eq!(store.list_patients()[0].age, Some(30));

        let removed = store.delete_patient(&ann.id).unwrap();
        assert_eq!(removed.map(|p| p.id), Some(ann.id));
        assert!(store.list_patients().is_empty());
        assert!(stored::<Patient>(engine.as_ref(), Collection::Patients).is_empty());
    }

    #[test]
    fn should_issue_unique_ids() {
        let mut store = empty_store(Arc::new(InMemoryStorage::new()));
        let mut ids = HashSet::new();
        for i in 0..50 {
            let doctor = store.add_doctor(NewDoctor::new(format!("Dr. {}", i), "General")).unwrap();
            assert!(ids.insert(doctor.id));
        }
        assert_eq!(store.list_doctors().len(), 50);
    }

    #[test]
    fn should_ignore_deleting_unknown_id() {
        let engine = Arc::new(InMemoryStorage::new());
        let mut store = empty_store(engine.clone());
        store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let before = store.list_patients().to_vec();

        assert!(store.delete_patient("missing").unwrap().is_none());
        assert!(store.delete_doctor("missing").unwrap().is_none());
        assert!(store.delete_appointment("missing").unwrap().is_none());
        assert_eq!(store.list_patients(), before.as_slice());
        assert_eq!(stored::<Patient>(engine.as_ref(), Collection::Patients), before);
    }

    #[test]
    fn should_reject_invalid_input_without_writing() {
        let engine = Arc::new(InMemoryStorage::new());
        let mut store = empty_store(engine.clone());

        let err = store.add_patient(NewPatient::new("  ", 30)).unwrap_err();
        assert!(matches!(err, ClinicError::Validation(_)));
        assert!(engine.retrieve("patients").unwrap().is_none());
    }

    #[test]
    fn should_require_existing_references_when_booking() {
        let mut store = empty_store(Arc::new(InMemoryStorage::new()));
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Sarah Wilson", "Cardiology")).unwrap();

        let mut request = booking(&ann, &doctor, today());
        request.doctor_id = "ghost".parse().unwrap();
        let err = store.add_appointment(request).unwrap_err();
        assert!(matches!(err, ClinicError::NotFound(_)));
        assert!(store.list_appointments().is_empty());
    }

    #[test]
    fn should_keep_appointment_after_doctor_is_deleted() {
        let mut store = empty_store(Arc::new(InMemoryStorage::new()));
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Sarah Wilson", "Cardiology")).unwrap();
        let appointment = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);

        store.delete_doctor(&doctor.id).unwrap();

        let found = store.find_appointment_by_id(&appointment.id).unwrap();
        assert!(store.find_doctor_by_id(found.doctor_ref().unwrap()).is_none());
        let view = store.appointment_view(found);
        assert_eq!(view.doctor_name(), UNKNOWN);
        assert_eq!(view.doctor_label(), "Unknown Doctor");
        assert_eq!(view.patient_name(), "Ann");
    }

    #[test]
    fn should_update_status_and_ignore_unknown_ids() {
        let engine = Arc::new(InMemoryStorage::new());
        let mut store = empty_store(engine.clone());
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Robert Chen", "Dermatology")).unwrap();
        let appointment = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        let before = store.list_appointments().to_vec();

        assert!(store.update_appointment_status("missing", AppointmentStatus::Completed).unwrap().is_none());
        assert_eq!(store.list_appointments(), before.as_slice());

        let updated = store.complete_appointment(&appointment.id).unwrap().unwrap();
        assert_eq!(updated.status, AppointmentStatus::Completed);
        assert_eq!(store.count_pending_appointments(), 0);
        let persisted: Vec<Appointment> = stored(engine.as_ref(), Collection::Appointments);
        assert_eq!(persisted[0].status, AppointmentStatus::Completed);
    }

    #[test]
    fn should_count_pending_and_todays_appointments() {
        let mut store = empty_store(Arc::new(InMemoryStorage::new()));
        assert_eq!(store.count_pending_appointments(), 0);
        assert_eq!(store.count_todays_appointments(), 0);

        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Emily Davis", "Pediatrics")).unwrap();
        let tomorrow = today().succ_opt().unwrap();
        let first = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        store.add_appointment(booking(&ann, &doctor, tomorrow)).unwrap();
        store.complete_appointment(&first.id).unwrap();

        let scheduled = store
            .list_appointments()
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count();
        assert_eq!(store.count_pending_appointments(), scheduled);
        assert_eq!(store.count_pending_appointments(), 2);
        assert_eq!(store.count_todays_appointments(), 2);
        assert_eq!(store.count_appointments_on(tomorrow), 1);

        let summary = store.dashboard_summary();
        assert_eq!(summary.total_patients, 1);
        assert_eq!(summary.total_doctors, 1);
        assert_eq!(summary.todays_appointments, 2);
        assert_eq!(summary.pending_appointments, 2);
    }

    #[test]
    fn should_list_recent_appointments_newest_first() {
        let clock = Arc::new(SteppingClock::starting_at(start(), today()));
        let mut store = ClinicStore::load_with_clock(Arc::new(InMemoryStorage::new()), clock.clone()).unwrap();
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Emily Davis", "Pediatrics")).unwrap();

        clock.set(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap());
        let older = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        clock.set(Utc.with_ymd_and_hms(2025, 3, 10, 13, 0, 0).unwrap());
        let newer = store.add_appointment(booking(&ann, &doctor, today())).unwrap();

        let recent = store.recent_appointments(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, newer.id);

        let all = store.recent_appointments(5);
        let ids: Vec<_> = all.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![newer.id.clone(), older.id.clone()]);
        // Insertion order is untouched by the view.
        assert_eq!(store.list_appointments()[0].id, older.id);
    }

    #[test]
    fn should_cap_recent_appointments() {
        let mut store = empty_store(Arc::new(InMemoryStorage::new()));
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Emily Davis", "Pediatrics")).unwrap();
        for _ in 0..7 {
            store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        }

        let recent = store.recent_appointments(5);
        assert_eq!(recent.len(), 5);
        assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(store.recent_appointment_views(5).len(), 5);
    }

    #[test]
    fn should_order_identical_timestamps_by_later_insertion() {
        let clock = Arc::new(SteppingClock::starting_at(start(), today()));
        let mut store = ClinicStore::load_with_clock(Arc::new(InMemoryStorage::new()), clock.clone()).unwrap();
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
        let doctor = store.add_doctor(NewDoctor::new("Dr. Emily Davis", "Pediatrics")).unwrap();

        let same = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();
        clock.set(same);
        let first = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
        clock.set(same);
        let second = store.add_appointment(booking(&ann, &doctor, today())).unwrap();

        let recent = store.recent_appointments(2);
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);
    }

    #[test]
    fn should_leave_memory_unchanged_when_write_fails() {
        let engine = Arc::new(FlakyStorage::default());
        let mut store = empty_store(engine.clone());
        let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();

        engine.failing.store(true, Ordering::SeqCst);
        let err = store.add_patient(NewPatient::new("Bob", 41)).unwrap_err();
        assert!(matches!(err, ClinicError::StorageUnavailable(_)));
        assert!(err.is_storage_failure());
        assert_eq!(store.list_patients().len(), 1);

        assert!(store.delete_patient(&ann.id).is_err());
        assert!(store.find_patient_by_id(&ann.id).is_some());
    }

    #[test]
    fn should_round_trip_through_sled() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::with_engine(StorageEngineType::Sled, dir.path());
        let (patients, doctors, appointments) = {
            let engine: Arc<dyn StorageEngine> = Arc::new(SledStorage::new(&config).unwrap());
            let mut store = empty_store(engine);
            let ann = store.add_patient(NewPatient::new("Ann", 30)).unwrap();
            let doctor = store.add_doctor(NewDoctor::new("Dr. Sarah Wilson", "Cardiology")).unwrap();
            let appointment = store.add_appointment(booking(&ann, &doctor, today())).unwrap();
            store.complete_appointment(&appointment.id).unwrap();
            (
                store.list_patients().to_vec(),
                store.list_doctors().to_vec(),
                store.list_appointments().to_vec(),
            )
        };

        let engine: Arc<dyn StorageEngine> = Arc::new(SledStorage::new(&config).unwrap());
        let reloaded = ClinicStore::load(engine).unwrap();
        assert_eq!(reloaded.list_patients(), patients.as_slice());
        assert_eq!(reloaded.list_doctors(), doctors.as_slice());
        assert_eq!(reloaded.list_appointments(), appointments.as_slice());
    }

    #[test]
    fn should_read_collections_written_by_browser_client() {
        let engine = Arc::new(InMemoryStorage::new());
        engine
            .insert(
                "patients",
                br#"[{"id":"lq2x9k0a1","name":"John Doe","age":35,"gender":"Male","phone":"+1-555-0123","email":"john.doe@email.com","address":"123 Main St, City, State","createdAt":"2024-06-01T08:15:30.123Z"}]"#,
            )
            .unwrap();
        engine
            .insert(
                "appointments",
                br#"[{"id":"lq2x9k0c3","patientId":"lq2x9k0a1","doctorId":"gone","date":"2025-03-10","time":"10:00","reason":"Regular checkup","status":"scheduled","createdAt":"2024-06-01T08:15:30.125Z"}]"#,
            )
            .unwrap();

        let store = empty_store(engine);
        assert_eq!(store.list_patients()[0].name, "John Doe");
        assert!(store.list_doctors().is_empty());
        let view = store.appointment_views()[0];
        assert_eq!(view.patient_name(), "John Doe");
        assert_eq!(view.doctor_name(), UNKNOWN);
        assert_eq!(store.count_todays_appointments(), 1);
    }

    #[test]
    fn should_load_patient_whose_age_was_not_a_number() {
        let engine = Arc::new(InMemoryStorage::new());
        engine
            .insert(
                "patients",
                br#"[{"id":"a","name":"Ann","age":30,"gender":"","phone":"","email":"","address":"","createdAt":"2024-06-01T08:15:30.123Z"},{"id":"b","name":"Bad","age":null,"gender":"","phone":"","email":"","address":"","createdAt":"2024-06-01T08:15:30.124Z"},{"id":"c","name":"Neg","age":-4,"createdAt":"2024-06-01T08:15:30.125Z"}]"#,
            )
            .unwrap();

        let mut store = empty_store(engine.clone());
        assert_eq!(store.list_patients().len(), 3);
        assert_eq!(store.find_patient_by_id("b").unwrap().age, None);
        assert_eq!(store.find_patient_by_id("c").unwrap().age, Some(-4));

        store.add_patient(NewPatient::new("Dan", 50)).unwrap();
        let written: Vec<serde_json::Value> = stored(engine.as_ref(), Collection::Patients);
        assert_eq!(written.len(), 4);
        assert!(written[1]["age"].is_null());
        assert_eq!(written[2]["age"], -4);
    }

    #[test]
    fn should_load_booking_without_patient_reference() {
        let engine = Arc::new(InMemoryStorage::new());
        engine
            .insert(
                "doctors",
                br#"[{"id":"d1","name":"Dr. Sarah Wilson","specialization":"Cardiology","createdAt":"2024-06-01T08:15:30.123Z"}]"#,
            )
            .unwrap();
        engine
            .insert(
                "appointments",
                br#"[{"id":"a1","doctorId":"d1","date":"2025-03-10","time":"10:00","reason":"Regular checkup","status":"scheduled","createdAt":"2024-06-01T08:15:30.125Z"}]"#,
            )
            .unwrap();

        let mut store = empty_store(engine.clone());
        let view = store.appointment_views()[0];
        assert_eq!(view.patient_name(), UNKNOWN);
        assert_eq!(view.patient_label(), "Unknown Patient");
        assert_eq!(view.doctor_name(), "Dr. Sarah Wilson");
        assert_eq!(store.count_pending_appointments(), 1);

        store.complete_appointment("a1").unwrap();
        let written: Vec<serde_json::Value> = stored(engine.as_ref(), Collection::Appointments);
        assert!(written[0].get("patientId").is_none());
        assert_eq!(written[0]["status"], "completed");
    }

    #[test]
    fn should_fail_to_load_corrupt_collection() {
        let engine = Arc::new(InMemoryStorage::new());
        engine.insert("doctors", b"[{\"id\":").unwrap();
        let err = ClinicStore::load(engine).unwrap_err();
        assert!(matches!(err, ClinicError::DeserializationError(_)));
    }

    #[test]
    fn should_open_from_config_and_seed() {
        let dir = TempDir::new().unwrap();
        let config = ClinicConfig {
            storage: StorageConfig::with_engine(StorageEngineType::File, dir.path()),
            ..ClinicConfig::default()
        };
        let store = ClinicStore::open(&config).unwrap();
        assert_eq!(store.list_patients().len(), 3);
        assert_eq!(store.list_doctors().len(), 3);
        assert_eq!(store.list_appointments().len(), 2);
        assert!(dir.path().join("patients.json").exists());
    }
}
