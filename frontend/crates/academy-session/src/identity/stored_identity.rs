use academy_core::Principal;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SCHEMA_VERSION: i32 = 1;

/// Identity persisted in the config directory between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub principal: Principal,
    pub created_at: String,
    pub schema_version: i32,
}

impl StoredIdentity {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            created_at: chrono::Utc::now().to_rfc3339(),
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Fresh identity with a random principal
    pub fn generate() -> Self {
        Self::new(Principal::new(Uuid::new_v4().to_string()))
    }
}
