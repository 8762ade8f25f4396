use soroban_sdk::contracttype;

use crate::types::Role;
use crate::ContractError;

/// Action classes used for authorization decisions
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Reassign,
    GenerateReport,
}

/// Policy table: whether `role` may perform `action`.
///
/// | Role               | Create/Update/Reassign | Delete | Read  | GenerateReport |
/// |--------------------|------------------------|--------|-------|----------------|
/// | FullAccess         | allow                  | allow  | allow | allow          |
/// | ReadOnly           | deny                   | deny   | allow | deny           |
/// | ExternalConsultant | deny                   | deny   | allow | deny           |
pub fn authorize(role: &Role, action: &Action) -> bool {
    match role {
        Role::FullAccess => true,
        Role::ReadOnly | Role::ExternalConsultant => match action {
            Action::Read => true,
            Action::Create
            | Action::Update
            | Action::Delete
            | Action::Reassign
            | Action::GenerateReport => false,
        },
    }
}

/// Actions whose boundary operation consults the policy table.
///
/// Only deletion is gated today; add variants here to gate more.
pub fn is_enforced(action: &Action) -> bool {
    matches!(action, Action::Delete)
}

/// Fails with `PermissionDenied` when `action` is enforced and `role` lacks it.
pub fn require(role: &Role, action: &Action) -> Result<(), ContractError> {
    if is_enforced(action) && !authorize(role, action) {
        return Err(ContractError::PermissionDenied);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [Action; 6] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Reassign,
        Action::GenerateReport,
    ];

    #[test]
    fn test_full_access_allows_everything() {
        for action in ALL_ACTIONS.iter() {
            assert!(authorize(&Role::FullAccess, action));
        }
    }

    #[test]
    fn test_limited_roles_only_read() {
        for role in [Role::ReadOnly, Role::ExternalConsultant].iter() {
            for action in ALL_ACTIONS.iter() {
                assert_eq!(authorize(role, action), *action == Action::Read);
            }
        }
    }

    #[test]
    fn test_require_only_gates_delete() {
        assert_eq!(
            require(&Role::ReadOnly, &Action::Delete),
            Err(ContractError::PermissionDenied)
        );
        assert_eq!(
            require(&Role::ExternalConsultant, &Action::Delete),
            Err(ContractError::PermissionDenied)
        );
        assert_eq!(require(&Role::FullAccess, &Action::Delete), Ok(()));

        // Not enforced, so a denied policy answer does not fail the call.
        assert_eq!(require(&Role::ReadOnly, &Action::Update), Ok(()));
        assert_eq!(require(&Role::ExternalConsultant, &Action::Reassign), Ok(()));
    }
}
