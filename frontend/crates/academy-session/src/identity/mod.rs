//! Identity provider: who the caller is and where the login lifecycle stands.

pub mod error;
pub mod file_provider;
pub mod load_result;
pub mod login_status;
pub mod stored_identity;

use crate::identity::{error::Result as IdentityResult, login_status::LoginStatus};

use academy_core::Principal;
use async_trait::async_trait;

/// Source of the caller identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Restore any persisted identity and leave `Initializing`. Idempotent.
    async fn initialize(&self) -> IdentityResult<()>;

    /// Current identity, if logged in
    async fn identity(&self) -> Option<Principal>;

    async fn login_status(&self) -> LoginStatus;

    /// Log in, reusing the stored identity unless a specific principal is requested
    async fn login(&self, principal: Option<Principal>) -> IdentityResult<Principal>;

    /// Forget the identity and return to `Idle`
    async fn clear(&self) -> IdentityResult<()>;
}
