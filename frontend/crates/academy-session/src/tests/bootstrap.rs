use crate::{LoginStatus, ProfileState, Screen, resolve_screen};

use academy_core::{Role, UserProfile};

fn present(name: &str, role: &str) -> ProfileState {
    ProfileState::Present(UserProfile {
        name: name.to_string(),
        role: role.to_string(),
    })
}

fn all_profile_states() -> Vec<ProfileState> {
    vec![
        ProfileState::Loading,
        ProfileState::Absent,
        present("Ann", "Student"),
        ProfileState::Failed("down".to_string()),
    ]
}

#[test]
fn given_initializing_when_resolve_then_initializing_regardless_of_profile() {
    for profile in all_profile_states() {
        for identity_present in [false, true] {
            let screen = resolve_screen(LoginStatus::Initializing, identity_present, &profile);
            assert_eq!(screen, Screen::Initializing);
        }
    }
}

#[test]
fn given_no_identity_when_resolve_then_public_homepage() {
    for status in [
        LoginStatus::Idle,
        LoginStatus::LoggingIn,
        LoginStatus::LoggedIn,
    ] {
        for profile in all_profile_states() {
            assert_eq!(
                resolve_screen(status, false, &profile),
                Screen::PublicHomepage
            );
        }
    }
}

#[test]
fn given_identity_and_absent_profile_when_resolve_then_profile_setup() {
    let screen = resolve_screen(LoginStatus::LoggedIn, true, &ProfileState::Absent);

    assert_eq!(screen, Screen::ProfileSetup);
    assert!(screen.role().is_none());
}

#[test]
fn given_student_profile_when_resolve_then_only_student_dashboard() {
    let screen = resolve_screen(LoginStatus::LoggedIn, true, &present("Ann", "Student"));

    assert_eq!(screen, Screen::Dashboard(Role::Student));
    assert_ne!(screen, Screen::Dashboard(Role::Management));
    assert_ne!(screen, Screen::Dashboard(Role::Marketer));
}

#[test]
fn given_each_role_when_resolve_then_matching_dashboard() {
    for role in Role::ALL {
        let screen = resolve_screen(LoginStatus::LoggedIn, true, &present("X", role.as_str()));
        assert_eq!(screen.role(), Some(role));
    }
}

#[test]
fn given_unknown_role_when_resolve_then_no_dashboard() {
    let screen = resolve_screen(LoginStatus::LoggedIn, true, &present("Ann", "Janitor"));

    assert_eq!(screen, Screen::UnknownRole("Janitor".to_string()));
    assert!(screen.role().is_none());
}

#[test]
fn given_lowercase_role_when_resolve_then_unknown_role() {
    let screen = resolve_screen(LoginStatus::LoggedIn, true, &present("Ann", "student"));

    assert_eq!(screen, Screen::UnknownRole("student".to_string()));
}

#[test]
fn given_profile_loading_when_resolve_then_loading() {
    let screen = resolve_screen(LoginStatus::LoggedIn, true, &ProfileState::Loading);

    assert_eq!(screen, Screen::Loading);
}

#[test]
fn given_profile_failed_when_resolve_then_profile_unavailable() {
    let screen = resolve_screen(
        LoginStatus::LoggedIn,
        true,
        &ProfileState::Failed("backend down".to_string()),
    );

    assert_eq!(screen, Screen::ProfileUnavailable("backend down".to_string()));
}

#[test]
fn test_screen_serializes_with_tag() {
    let json = serde_json::to_value(Screen::Dashboard(Role::Marketer)).unwrap();

    assert_eq!(json["screen"], "dashboard");
    assert_eq!(json["detail"], "Marketer");
}
