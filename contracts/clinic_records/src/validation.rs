use soroban_sdk::String;

use crate::ContractError;

/// A text field counts as present when it is non-empty.
fn require_text(value: &String) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::ValidationError);
    }
    Ok(())
}

/// Ids are allocated from 1; 0 stands for a missing reference.
fn require_id(id: u64) -> Result<(), ContractError> {
    if id == 0 {
        return Err(ContractError::ValidationError);
    }
    Ok(())
}

/// Validate the inputs of a new doctor.
pub fn validate_doctor(name: &String, department: &String) -> Result<(), ContractError> {
    require_text(name)?;
    require_text(department)
}

/// Validate a doctor's department on administrative update.
pub fn validate_department(department: &String) -> Result<(), ContractError> {
    require_text(department)
}

/// Validate patient fields shared by create and update.
///
/// `name`, `age` and `assigned_doctor` must all be present and non-zero.
/// Age 0 is rejected. The assigned doctor is not looked up here.
pub fn validate_patient(
    name: &String,
    age: u32,
    assigned_doctor: u64,
) -> Result<(), ContractError> {
    require_text(name)?;
    if age == 0 {
        return Err(ContractError::ValidationError);
    }
    require_id(assigned_doctor)
}

/// Validate the id of an existing patient passed in by a caller.
pub fn validate_patient_id(patient_id: u64) -> Result<(), ContractError> {
    require_id(patient_id)
}

/// Validate a report position against the current number of reports.
pub fn validate_report_index(index: u32, len: u32) -> Result<(), ContractError> {
    if index >= len {
        return Err(ContractError::IndexOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_doctor() {
        let env = Env::default();
        let name = String::from_str(&env, "Dr. A");
        let dept = String::from_str(&env, "Cardio");
        let empty = String::from_str(&env, "");

        assert_eq!(validate_doctor(&name, &dept), Ok(()));
        assert_eq!(
            validate_doctor(&empty, &dept),
            Err(ContractError::ValidationError)
        );
        assert_eq!(
            validate_doctor(&name, &empty),
            Err(ContractError::ValidationError)
        );
    }

    #[test]
    fn test_validate_patient() {
        let env = Env::default();
        let name = String::from_str(&env, "P1");

        assert_eq!(validate_patient(&name, 40, 1), Ok(()));
        assert_eq!(validate_patient(&name, 1, 99), Ok(()));

        // Missing name
        assert_eq!(
            validate_patient(&String::from_str(&env, ""), 40, 1),
            Err(ContractError::ValidationError)
        );
        // Age 0 is falsy
        assert_eq!(
            validate_patient(&name, 0, 1),
            Err(ContractError::ValidationError)
        );
        // Missing doctor
        assert_eq!(
            validate_patient(&name, 40, 0),
            Err(ContractError::ValidationError)
        );
    }

    #[test]
    fn test_validate_patient_id() {
        assert_eq!(validate_patient_id(1), Ok(()));
        assert_eq!(validate_patient_id(0), Err(ContractError::ValidationError));
    }

    #[test]
    fn test_validate_report_index() {
        assert_eq!(validate_report_index(0, 1), Ok(()));
        assert_eq!(validate_report_index(2, 3), Ok(()));
        assert_eq!(
            validate_report_index(3, 3),
            Err(ContractError::IndexOutOfRange)
        );
        assert_eq!(
            validate_report_index(0, 0),
            Err(ContractError::IndexOutOfRange)
        );
        assert_eq!(
            validate_report_index(u32::MAX, 3),
            Err(ContractError::IndexOutOfRange)
        );
    }
}
