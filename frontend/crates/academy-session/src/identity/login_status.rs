use std::fmt;

use serde::Serialize;

/// Lifecycle of the identity session.
///
/// `Initializing` is only ever observed before the stored identity has been
/// restored; once left it is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginStatus {
    Initializing,
    Idle,
    LoggingIn,
    LoggedIn,
}

impl LoginStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginStatus::Initializing => "initializing",
            LoginStatus::Idle => "idle",
            LoginStatus::LoggingIn => "logging-in",
            LoginStatus::LoggedIn => "logged-in",
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
