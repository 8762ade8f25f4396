#![no_main]

use arbitrary::Arbitrary;
use clinic_records::{ClinicRecordsContract, ClinicRecordsContractClient, ContractError, Role};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

#[derive(Arbitrary, Debug)]
enum Op {
    AddReport { patient: u8, tag: u8 },
    DeleteReport { patient: u8, index: u8 },
    Assign { patient: u8, doctor: u8 },
    Delete { patient: u8, requester: u8 },
    Summary,
}

#[derive(Arbitrary, Debug)]
struct Input {
    doctor_roles: Vec<u8>,
    patients: u8,
    ops: Vec<Op>,
}

fn role(tag: u8) -> Role {
    match tag % 3 {
        0 => Role::FullAccess,
        1 => Role::ReadOnly,
        _ => Role::ExternalConsultant,
    }
}

fuzz_target!(|input: Input| {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ClinicRecordsContract, ());
    let client = ClinicRecordsContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    let mut roles = Vec::new();
    for tag in input.doctor_roles.iter().take(4) {
        let doctor = client.create_doctor(
            &String::from_str(&env, "Dr. Fuzz"),
            &role(*tag),
            &String::from_str(&env, "General"),
        );
        roles.push(doctor.role);
    }
    for _ in 0..(input.patients % 4) {
        client.create_patient(
            &String::from_str(&env, "Patient"),
            &30,
            &None,
            &String::from_str(&env, "rest"),
            &1,
        );
    }

    for op in input.ops.into_iter().take(32) {
        let audit_before = client.audit_count();
        match op {
            Op::AddReport { patient, tag } => {
                let patient = patient as u64 % 5;
                let text = String::from_str(&env, if tag % 2 == 0 { "even" } else { "odd" });
                match client.try_add_patient_report(&patient, &text) {
                    Ok(Ok(reports)) => {
                        assert_eq!(reports.last(), Some(text));
                        assert_eq!(client.audit_count(), audit_before + 1);
                    }
                    Err(Ok(ContractError::NotFound)) => {
                        assert_eq!(client.audit_count(), audit_before)
                    }
                    other => panic!("unexpected result: {:?}", other),
                }
            }
            Op::DeleteReport { patient, index } => {
                let patient = patient as u64 % 5;
                let before = client.try_list_patient_reports(&patient);
                let result = client.try_delete_patient_report(&patient, &(index as u32 % 4));
                match (before, result) {
                    (Ok(Ok(reports)), Ok(Ok(()))) => {
                        let after = client.list_patient_reports(&patient);
                        assert_eq!(after.len() + 1, reports.len());
                        assert_eq!(client.audit_count(), audit_before + 1);
                    }
                    (Ok(Ok(reports)), Err(Ok(ContractError::IndexOutOfRange))) => {
                        assert_eq!(client.list_patient_reports(&patient), reports);
                        assert_eq!(client.audit_count(), audit_before);
                    }
                    (Err(_), Err(Ok(ContractError::NotFound))) => {
                        assert_eq!(client.audit_count(), audit_before)
                    }
                    other => panic!("unexpected result: {:?}", other),
                }
            }
            Op::Assign { patient, doctor } => {
                let patient = patient as u64 % 5;
                let doctor = doctor as u64 % 6;
                if client.try_assign_doctor(&patient, &doctor).is_ok() {
                    assert_eq!(client.get_patient(&patient).assigned_doctor, doctor);
                    assert_eq!(client.audit_count(), audit_before + 1);
                } else {
                    assert_eq!(client.audit_count(), audit_before);
                }
            }
            Op::Delete { patient, requester } => {
                let patient = patient as u64 % 5;
                let requester = requester as u64 % 6;
                let result = client.try_delete_patient(&patient, &requester);
                let allowed = requester >= 1
                    && roles.get(requester as usize - 1) == Some(&Role::FullAccess);
                if allowed {
                    assert!(result.is_ok());
                    assert!(client.try_get_patient(&patient).is_err());
                    assert_eq!(client.audit_count(), audit_before + 1);
                } else {
                    assert!(result.is_err());
                    assert_eq!(client.audit_count(), audit_before);
                }
            }
            Op::Summary => {
                client.generate_summary_report();
                assert_eq!(client.audit_count(), audit_before + 1);
            }
        }
    }
});
