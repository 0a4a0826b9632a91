use crate::{CoreError, Role, UserProfile};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_padded_name_when_new_then_name_trimmed() {
    let profile = UserProfile::new("  Ann  ", Role::Student).unwrap();

    assert_that!(profile.name.as_str(), eq("Ann"));
    assert_that!(profile.role.as_str(), eq("Student"));
}

#[test]
fn given_blank_name_when_new_then_validation_error() {
    let result = UserProfile::new("   ", Role::Marketer);

    assert_that!(result, err(anything()));
    assert!(matches!(
        UserProfile::new("", Role::Marketer),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn given_known_role_when_parsed_role_then_ok() {
    let profile = UserProfile {
        name: "Bob".into(),
        role: "Management".into(),
    };

    assert_that!(profile.parsed_role(), ok(eq(&Role::Management)));
}

#[test]
fn given_unknown_role_when_parsed_role_then_error() {
    let profile = UserProfile {
        name: "Eve".into(),
        role: "Janitor".into(),
    };

    assert_that!(profile.parsed_role(), err(anything()));
}

#[test]
fn given_backend_json_when_deserialize_then_keeps_role_text() {
    let json = r#"{"name":"Zed","role":"Alien"}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.role, "Alien");
}
