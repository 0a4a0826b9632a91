use academy_client::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Query {key} failed: {source}")]
    Fetch {
        key: String,
        #[source]
        source: ClientError,
    },

    #[error("Query {key} result discarded after session reset {location}")]
    Discarded { key: String, location: ErrorLocation },

    #[error("Query {key} cache decode failed: {source} {location}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl QueryError {
    pub fn fetch(key: impl Into<String>, source: ClientError) -> Self {
        Self::Fetch {
            key: key.into(),
            source,
        }
    }

    #[track_caller]
    pub fn discarded(key: impl Into<String>) -> Self {
        Self::Discarded {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            key: key.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded { .. })
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
