use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::Role;

// ── Payloads ──────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditRecordedEvent {
    pub sequence: u64,
    pub timestamp: u64,
    /// `"<actor> - <action>"`
    pub message: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorAddedEvent {
    pub doctor_id: u64,
    pub role: Role,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientAddedEvent {
    pub patient_id: u64,
    pub assigned_doctor: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientDeletedEvent {
    pub patient_id: u64,
    pub deleted_by: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDeniedEvent {
    pub doctor_id: u64,
    pub patient_id: u64,
}

// ── Publishers ────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events()
        .publish((symbol_short!("INIT"),), InitializedEvent { admin });
}

pub fn publish_audit_recorded(env: &Env, sequence: u64, timestamp: u64, message: String) {
    env.events().publish(
        (symbol_short!("AUDIT"), sequence),
        AuditRecordedEvent {
            sequence,
            timestamp,
            message,
        },
    );
}

pub fn publish_doctor_added(env: &Env, doctor_id: u64, role: Role) {
    env.events().publish(
        (symbol_short!("DOC_ADD"), doctor_id),
        DoctorAddedEvent { doctor_id, role },
    );
}

pub fn publish_patient_added(env: &Env, patient_id: u64, assigned_doctor: u64) {
    env.events().publish(
        (symbol_short!("PAT_ADD"), patient_id),
        PatientAddedEvent {
            patient_id,
            assigned_doctor,
        },
    );
}

pub fn publish_patient_deleted(env: &Env, patient_id: u64, deleted_by: u64) {
    env.events().publish(
        (symbol_short!("PAT_DEL"), patient_id),
        PatientDeletedEvent {
            patient_id,
            deleted_by,
        },
    );
}

pub fn publish_access_denied(env: &Env, doctor_id: u64, patient_id: u64) {
    env.events().publish(
        (symbol_short!("ACC_DENY"), doctor_id),
        AccessDeniedEvent {
            doctor_id,
            patient_id,
        },
    );
}
