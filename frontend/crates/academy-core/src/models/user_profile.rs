//! User profile - display name and academy role, one per identity.

use crate::{CoreError, Result as CoreErrorResult, Role};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Profile as stored by the backend.
///
/// `role` stays textual so that a stored value outside [`Role`] can still be
/// decoded and reported instead of failing the whole profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
}

impl UserProfile {
    /// Build a profile from setup input. The name is trimmed and must not be empty.
    #[track_caller]
    pub fn new(name: &str, role: Role) -> CoreErrorResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("profile name must not be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            role: role.as_str().to_string(),
        })
    }

    /// Role as a closed enum, or `InvalidRole` for an unrecognized value
    #[track_caller]
    pub fn parsed_role(&self) -> CoreErrorResult<Role> {
        Role::from_str(&self.role)
    }
}
