use alloc::format;

use common::{IdSequence, KeyedStore};
use soroban_sdk::{log, Env, String, Vec};

use crate::access::{self, Action};
use crate::audit::{Actor, AuditLog};
use crate::events;
use crate::types::{AuditEntry, Doctor, Patient, PatientSummary};
use crate::validation;
use crate::ContractError;

/// CRUD over patient records, their reports, and doctor assignment.
///
/// Every write is a single read-check-write against the patient store
/// followed by exactly one audit entry. Nothing is written before all
/// checks for the operation have passed.
pub struct PatientRegistry<'a, P, D, A> {
    pub(crate) env: &'a Env,
    pub(crate) store: &'a P,
    pub(crate) doctors: &'a D,
    pub(crate) audit: &'a AuditLog<A>,
}

impl<'a, P, D, A> PatientRegistry<'a, P, D, A>
where
    P: KeyedStore<u64, Patient> + IdSequence,
    D: KeyedStore<u64, Doctor>,
    A: KeyedStore<u64, AuditEntry> + IdSequence,
{
    pub fn create(
        &self,
        name: String,
        age: u32,
        medical_history: Option<Vec<String>>,
        current_treatment: String,
        assigned_doctor: u64,
    ) -> Result<Patient, ContractError> {
        validation::validate_patient(&name, age, assigned_doctor)?;

        let patient = Patient {
            patient_id: self.store.next_id(),
            name,
            age,
            medical_history: medical_history.unwrap_or(Vec::new(self.env)),
            current_treatment,
            assigned_doctor,
            reports: Vec::new(self.env),
        };
        self.store.insert(patient.patient_id, &patient);

        self.audit.record(
            Actor::Doctor(assigned_doctor),
            &format!("Added patient record: {}", patient.patient_id),
        );
        events::publish_patient_added(self.env, patient.patient_id, assigned_doctor);

        Ok(patient)
    }

    pub fn get(&self, patient_id: u64) -> Result<Patient, ContractError> {
        self.store.get(&patient_id).ok_or(ContractError::NotFound)
    }

    /// Overwrite every mutable field of an existing patient.
    pub fn update(
        &self,
        patient_id: u64,
        name: String,
        age: u32,
        medical_history: Vec<String>,
        current_treatment: String,
        assigned_doctor: u64,
    ) -> Result<Patient, ContractError> {
        validation::validate_patient_id(patient_id)?;
        validation::validate_patient(&name, age, assigned_doctor)?;
        let mut patient = self.get(patient_id)?;

        patient.name = name;
        patient.age = age;
        patient.medical_history = medical_history;
        patient.current_treatment = current_treatment;
        patient.assigned_doctor = assigned_doctor;
        self.store.insert(patient_id, &patient);

        self.audit.record(
            Actor::Doctor(assigned_doctor),
            &format!("Updated patient record: {}", patient_id),
        );

        Ok(patient)
    }

    /// Append `report` and return the patient's reports.
    pub fn add_report(&self, patient_id: u64, report: String) -> Result<Vec<String>, ContractError> {
        let mut patient = self.get(patient_id)?;

        patient.reports.push_back(report);
        self.store.insert(patient_id, &patient);

        self.audit.record(
            Actor::Doctor(patient.assigned_doctor),
            &format!("Added report for patient: {}", patient_id),
        );

        Ok(patient.reports)
    }

    pub fn list_reports(&self, patient_id: u64) -> Result<Vec<String>, ContractError> {
        Ok(self.get(patient_id)?.reports)
    }

    /// Remove the report at `index`; later reports shift down by one.
    pub fn delete_report(&self, patient_id: u64, index: u32) -> Result<(), ContractError> {
        let mut patient = self.get(patient_id)?;
        validation::validate_report_index(index, patient.reports.len())?;

        patient.reports.remove(index);
        self.store.insert(patient_id, &patient);

        self.audit.record(
            Actor::Doctor(patient.assigned_doctor),
            &format!("Deleted report for patient: {}", patient_id),
        );

        Ok(())
    }

    /// Reassign a patient. Both the patient and the doctor must exist.
    pub fn assign_doctor(&self, patient_id: u64, doctor_id: u64) -> Result<(), ContractError> {
        let mut patient = self.get(patient_id)?;
        if !self.doctors.contains_key(&doctor_id) {
            return Err(ContractError::NotFound);
        }

        patient.assigned_doctor = doctor_id;
        self.store.insert(patient_id, &patient);

        self.audit.record(
            Actor::Doctor(doctor_id),
            &format!("Assigned to patient: {}", patient_id),
        );

        Ok(())
    }

    /// Delete a patient on behalf of `requesting_doctor`.
    ///
    /// The requesting doctor must exist and hold `Delete`. The patient
    /// itself is not looked up; deleting an absent patient succeeds.
    pub fn delete(&self, patient_id: u64, requesting_doctor: u64) -> Result<(), ContractError> {
        let doctor = self
            .doctors
            .get(&requesting_doctor)
            .ok_or(ContractError::NotFound)?;

        if let Err(err) = access::require(&doctor.role, &Action::Delete) {
            log!(self.env, "delete denied", requesting_doctor, patient_id);
            events::publish_access_denied(self.env, requesting_doctor, patient_id);
            return Err(err);
        }

        self.store.remove(&patient_id);

        self.audit.record(
            Actor::Doctor(doctor.doctor_id),
            &format!("Deleted patient record: {}", patient_id),
        );
        events::publish_patient_deleted(self.env, patient_id, doctor.doctor_id);

        Ok(())
    }

    /// Project every patient currently in the store, in store order.
    ///
    /// Ids whose row has vanished mid-iteration are skipped.
    pub fn summary_report(&self) -> Vec<PatientSummary> {
        let mut summaries = Vec::new(self.env);
        for patient_id in self.store.keys() {
            if let Some(patient) = self.store.get(&patient_id) {
                summaries.push_back(PatientSummary::from(&patient));
            }
        }

        self.audit.record(Actor::Admin, "Generated patient reports");

        summaries
    }
}
