use crate::{AccessRole, CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Student.as_str(), "Student");
    assert_eq!(Role::Management.as_str(), "Management");
    assert_eq!(Role::Marketer.as_str(), "Marketer");
}

#[test]
fn test_role_from_str_round_trips_every_variant() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    let result = Role::from_str("student");
    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_from_str_unknown() {
    assert!(Role::from_str("Janitor").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_access_role_from_str() {
    assert_eq!(AccessRole::from_str("admin").unwrap(), AccessRole::Admin);
    assert_eq!(AccessRole::from_str("user").unwrap(), AccessRole::User);
    assert_eq!(AccessRole::from_str("guest").unwrap(), AccessRole::Guest);
    assert!(AccessRole::from_str("root").is_err());
}

#[test]
fn test_access_role_serializes_lowercase() {
    let json = serde_json::to_string(&AccessRole::Admin).unwrap();
    assert_eq!(json, "\"admin\"");
}
