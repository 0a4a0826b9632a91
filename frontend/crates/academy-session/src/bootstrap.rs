//! Screen selection from login status, identity presence and profile state.

use crate::identity::login_status::LoginStatus;

use academy_core::{Role, UserProfile};

use log::warn;
use serde::Serialize;

/// Profile query state as seen by the bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    /// Not fetched yet, or fetch in flight
    Loading,
    /// Authenticated but no profile saved
    Absent,
    Present(UserProfile),
    /// Fetch failed; carries the user-facing message
    Failed(String),
}

/// Exactly one of these is shown at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "detail", rename_all = "snake_case")]
pub enum Screen {
    Initializing,
    PublicHomepage,
    ProfileSetup,
    Dashboard(Role),
    /// Profile carries a role with no dashboard
    UnknownRole(String),
    Loading,
    ProfileUnavailable(String),
}

impl Screen {
    pub fn role(&self) -> Option<Role> {
        match self {
            Screen::Dashboard(role) => Some(*role),
            _ => None,
        }
    }
}

/// Decide the screen. First match wins:
/// initializing, then unauthenticated, then the profile state.
pub fn resolve_screen(
    login_status: LoginStatus,
    identity_present: bool,
    profile: &ProfileState,
) -> Screen {
    if login_status == LoginStatus::Initializing {
        return Screen::Initializing;
    }

    if !identity_present {
        return Screen::PublicHomepage;
    }

    match profile {
        ProfileState::Absent => Screen::ProfileSetup,
        ProfileState::Present(profile) => match profile.parsed_role() {
            Ok(role) => Screen::Dashboard(role),
            Err(_) => {
                warn!(
                    "Profile for {} has unrecognized role {:?}",
                    profile.name, profile.role
                );
                Screen::UnknownRole(profile.role.clone())
            }
        },
        ProfileState::Loading => Screen::Loading,
        ProfileState::Failed(message) => Screen::ProfileUnavailable(message.clone()),
    }
}
