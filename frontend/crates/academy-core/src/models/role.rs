use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Academy role chosen during profile setup.
///
/// Selects the dashboard an authenticated user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Management,
    Marketer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Management, Role::Marketer];

    /// Wire representation stored in the user profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Management => "Management",
            Self::Marketer => "Marketer",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Student" => Ok(Self::Student),
            "Management" => Ok(Self::Management),
            "Marketer" => Ok(Self::Marketer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
