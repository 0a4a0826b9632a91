use crate::identity::error::IdentityError;
use crate::query::error::QueryError;

use academy_client::ClientError;
use academy_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Backend actor not available {location}")]
    ActorUnavailable { location: ErrorLocation },

    #[error("Not logged in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl SessionError {
    #[track_caller]
    pub fn actor_unavailable() -> Self {
        Self::ActorUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without location, for notifications and CLI output
    pub fn user_message(&self) -> String {
        match self {
            Self::ActorUnavailable { .. } => "Actor not available".to_string(),
            Self::NotAuthenticated { .. } => "Please log in first".to_string(),
            Self::Core(e) => e.user_message(),
            Self::Client(e) => e.user_message(),
            Self::Identity(e) => e.recovery_hint().to_string(),
            Self::Query(QueryError::Fetch { source, .. }) => source.user_message(),
            Self::Query(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
