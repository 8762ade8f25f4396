use common::{IdSequence, KeyedStore};
use soroban_sdk::Env;

use crate::audit::AuditLog;
use crate::doctors::DoctorRegistry;
use crate::patients::PatientRegistry;
use crate::storage::{PersistentTable, Table};
use crate::types::{AuditEntry, Doctor, Patient};

/// Service context owning the doctor, patient and audit stores.
///
/// Registries are borrowed views over it, so every operation works against
/// the same three stores.
pub struct Clinic<D, P, A> {
    env: Env,
    doctors: D,
    patients: P,
    audit: AuditLog<A>,
}

pub type LedgerClinic =
    Clinic<PersistentTable<Doctor>, PersistentTable<Patient>, PersistentTable<AuditEntry>>;

impl LedgerClinic {
    /// Context backed by the contract's persistent storage.
    pub fn open(env: &Env) -> Self {
        Self::new(
            env,
            PersistentTable::new(env, Table::Doctors),
            PersistentTable::new(env, Table::Patients),
            PersistentTable::append_only(env, Table::Audit),
        )
    }
}

impl<D, P, A> Clinic<D, P, A>
where
    D: KeyedStore<u64, Doctor> + IdSequence,
    P: KeyedStore<u64, Patient> + IdSequence,
    A: KeyedStore<u64, AuditEntry> + IdSequence,
{
    pub fn new(env: &Env, doctors: D, patients: P, audit: A) -> Self {
        Self {
            env: env.clone(),
            doctors,
            patients,
            audit: AuditLog::new(env, audit),
        }
    }

    pub fn doctors(&self) -> DoctorRegistry<'_, D, A> {
        DoctorRegistry {
            env: &self.env,
            store: &self.doctors,
            audit: &self.audit,
        }
    }

    pub fn patients(&self) -> PatientRegistry<'_, P, D, A> {
        PatientRegistry {
            env: &self.env,
            store: &self.patients,
            doctors: &self.doctors,
            audit: &self.audit,
        }
    }

    pub fn audit(&self) -> &AuditLog<A> {
        &self.audit
    }
}
