#![no_std]

extern crate alloc;

pub mod access;
pub mod audit;
pub mod clinic;
pub mod doctors;
pub mod events;
pub mod patients;
pub mod storage;
pub mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use access::Action;
pub use clinic::{Clinic, LedgerClinic};
pub use types::{AuditEntry, Doctor, Patient, PatientSummary, Role};

use storage::{ADMIN, INITIALIZED};

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ValidationError = 4,
    NotFound = 5,
    IndexOutOfRange = 6,
    PermissionDenied = 7,
}

fn ensure_initialized(env: &Env) -> Result<(), ContractError> {
    if !env.storage().instance().has(&INITIALIZED) {
        return Err(ContractError::NotInitialized);
    }
    storage::extend_instance_ttl(env);
    Ok(())
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let admin: Address = env
        .storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)?;
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

#[contract]
pub struct ClinicRecordsContract;

#[contractimpl]
impl ClinicRecordsContract {
    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Doctors ───────────────────────────────────────────────

    /// Register a new doctor
    pub fn create_doctor(
        env: Env,
        name: String,
        role: Role,
        department: String,
    ) -> Result<Doctor, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .doctors()
            .create(name, role, department)
    }

    /// Get a doctor by ID
    pub fn get_doctor(env: Env, doctor_id: u64) -> Result<Doctor, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env).doctors().get(doctor_id)
    }

    /// Change a doctor's role and department (admin only)
    pub fn update_doctor(
        env: Env,
        caller: Address,
        doctor_id: u64,
        role: Role,
        department: String,
    ) -> Result<Doctor, ContractError> {
        ensure_initialized(&env)?;
        require_admin(&env, &caller)?;
        LedgerClinic::open(&env)
            .doctors()
            .update(doctor_id, role, department)
    }

    /// All registered doctors
    pub fn list_doctors(env: Env) -> Result<Vec<Doctor>, ContractError> {
        ensure_initialized(&env)?;
        Ok(LedgerClinic::open(&env).doctors().list())
    }

    // ── Patients ──────────────────────────────────────────────

    /// Register a new patient
    pub fn create_patient(
        env: Env,
        name: String,
        age: u32,
        medical_history: Option<Vec<String>>,
        current_treatment: String,
        assigned_doctor: u64,
    ) -> Result<Patient, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env).patients().create(
            name,
            age,
            medical_history,
            current_treatment,
            assigned_doctor,
        )
    }

    /// Get a patient by ID
    pub fn get_patient(env: Env, patient_id: u64) -> Result<Patient, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env).patients().get(patient_id)
    }

    /// Overwrite a patient's record
    pub fn update_patient(
        env: Env,
        patient_id: u64,
        name: String,
        age: u32,
        medical_history: Vec<String>,
        current_treatment: String,
        assigned_doctor: u64,
    ) -> Result<Patient, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env).patients().update(
            patient_id,
            name,
            age,
            medical_history,
            current_treatment,
            assigned_doctor,
        )
    }

    /// Append a report to a patient
    pub fn add_patient_report(
        env: Env,
        patient_id: u64,
        report: String,
    ) -> Result<Vec<String>, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .patients()
            .add_report(patient_id, report)
    }

    /// Get a patient's reports
    pub fn list_patient_reports(env: Env, patient_id: u64) -> Result<Vec<String>, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env).patients().list_reports(patient_id)
    }

    /// Remove the report at `index`
    pub fn delete_patient_report(
        env: Env,
        patient_id: u64,
        index: u32,
    ) -> Result<(), ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .patients()
            .delete_report(patient_id, index)
    }

    /// Reassign a patient to another doctor
    pub fn assign_doctor(env: Env, patient_id: u64, doctor_id: u64) -> Result<(), ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .patients()
            .assign_doctor(patient_id, doctor_id)
    }

    /// Delete a patient; the requesting doctor's role must allow `Delete`
    pub fn delete_patient(
        env: Env,
        patient_id: u64,
        requesting_doctor: u64,
    ) -> Result<(), ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .patients()
            .delete(patient_id, requesting_doctor)
    }

    /// Summarize every patient
    pub fn generate_summary_report(env: Env) -> Result<Vec<PatientSummary>, ContractError> {
        ensure_initialized(&env)?;
        Ok(LedgerClinic::open(&env).patients().summary_report())
    }

    // ── Access control ────────────────────────────────────────

    /// Evaluate the role policy table
    pub fn can_perform(_env: Env, role: Role, action: Action) -> bool {
        access::authorize(&role, &action)
    }

    // ── Audit ─────────────────────────────────────────────────

    /// Number of audit entries recorded
    pub fn audit_count(env: Env) -> Result<u64, ContractError> {
        ensure_initialized(&env)?;
        Ok(LedgerClinic::open(&env).audit().len())
    }

    /// Get an audit entry by sequence number
    pub fn get_audit_entry(env: Env, sequence: u64) -> Result<AuditEntry, ContractError> {
        ensure_initialized(&env)?;
        LedgerClinic::open(&env)
            .audit()
            .get(sequence)
            .ok_or(ContractError::NotFound)
    }

    /// Audit entries with sequence in `[start, start + limit)`
    pub fn get_audit_trail(
        env: Env,
        start: u64,
        limit: u32,
    ) -> Result<Vec<AuditEntry>, ContractError> {
        ensure_initialized(&env)?;
        Ok(LedgerClinic::open(&env).audit().range(start, limit))
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
