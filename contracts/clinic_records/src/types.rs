use soroban_sdk::{contracttype, String, Vec};

/// Staff roles that gate what a doctor may do to patient records
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    FullAccess,
    ReadOnly,
    ExternalConsultant,
}

/// Doctor record owned by the doctor registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub doctor_id: u64,
    pub name: String,
    pub role: Role,
    pub department: String,
}

/// Patient record owned by the patient registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub patient_id: u64,
    pub name: String,
    pub age: u32,
    pub medical_history: Vec<String>,
    pub current_treatment: String,
    /// Doctor id; never checked for existence on create/update.
    pub assigned_doctor: u64,
    pub reports: Vec<String>,
}

/// Row of the patient summary report
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientSummary {
    pub patient_id: u64,
    pub name: String,
    pub current_treatment: String,
    pub assigned_doctor: u64,
    pub reports: Vec<String>,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            patient_id: patient.patient_id,
            name: patient.name.clone(),
            current_treatment: patient.current_treatment.clone(),
            assigned_doctor: patient.assigned_doctor,
            reports: patient.reports.clone(),
        }
    }
}

/// Immutable audit entry — written once, never updated or deleted
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditEntry {
    /// Monotonic key; unique even when two entries share a timestamp.
    pub sequence: u64,
    pub timestamp: u64,
    pub actor: String,
    pub action: String,
}
