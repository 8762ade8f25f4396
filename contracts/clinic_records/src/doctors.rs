use common::{IdSequence, KeyedStore};
use soroban_sdk::{Env, String, Vec};

use crate::audit::{Actor, AuditLog};
use crate::events;
use crate::types::{AuditEntry, Doctor, Role};
use crate::validation;
use crate::ContractError;

/// CRUD over doctor records.
pub struct DoctorRegistry<'a, D, A> {
    pub(crate) env: &'a Env,
    pub(crate) store: &'a D,
    pub(crate) audit: &'a AuditLog<A>,
}

impl<'a, D, A> DoctorRegistry<'a, D, A>
where
    D: KeyedStore<u64, Doctor> + IdSequence,
    A: KeyedStore<u64, AuditEntry> + IdSequence,
{
    /// Register a doctor under a freshly allocated id.
    pub fn create(
        &self,
        name: String,
        role: Role,
        department: String,
    ) -> Result<Doctor, ContractError> {
        validation::validate_doctor(&name, &department)?;

        let doctor = Doctor {
            doctor_id: self.store.next_id(),
            name,
            role,
            department,
        };
        self.store.insert(doctor.doctor_id, &doctor);

        self.audit
            .record(Actor::Doctor(doctor.doctor_id), "Added new doctor");
        events::publish_doctor_added(self.env, doctor.doctor_id, doctor.role.clone());

        Ok(doctor)
    }

    pub fn get(&self, doctor_id: u64) -> Result<Doctor, ContractError> {
        self.store.get(&doctor_id).ok_or(ContractError::NotFound)
    }

    /// Administrative update of the mutable `role` and `department` fields.
    pub fn update(
        &self,
        doctor_id: u64,
        role: Role,
        department: String,
    ) -> Result<Doctor, ContractError> {
        validation::validate_department(&department)?;
        let mut doctor = self.get(doctor_id)?;

        doctor.role = role;
        doctor.department = department;
        self.store.insert(doctor_id, &doctor);

        self.audit.record(
            Actor::Admin,
            &alloc::format!("Updated doctor: {}", doctor_id),
        );

        Ok(doctor)
    }

    /// Every doctor, in store order.
    pub fn list(&self) -> Vec<Doctor> {
        let mut doctors = Vec::new(self.env);
        for doctor_id in self.store.keys() {
            if let Some(doctor) = self.store.get(&doctor_id) {
                doctors.push_back(doctor);
            }
        }
        doctors
    }
}
