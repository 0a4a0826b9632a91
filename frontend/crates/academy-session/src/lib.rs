//! Session core of the academy front-end.
//!
//! [`AppContext`] owns the identity provider, the backend actor and the
//! identity-keyed [`QueryClient`]. [`resolve_screen`] picks what to show from
//! login status, identity presence and profile state; [`load_dashboard`]
//! builds the role dashboard.

pub mod bootstrap;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod notifications;
pub mod query;

#[cfg(test)]
mod tests;

pub use bootstrap::{ProfileState, Screen, resolve_screen};
pub use context::{AppContext, retry_policy};
pub use dashboard::{
    Dashboard, DashboardFilters, homepage::PublicHomepage, load_dashboard,
    management::ManagementDashboard, marketer::MarketerDashboard, student::StudentDashboard,
};
pub use error::{Result as SessionResult, SessionError};
pub use identity::{
    IdentityProvider,
    error::{IdentityError, Result as IdentityResult},
    file_provider::FileIdentityProvider,
    login_status::LoginStatus,
    stored_identity::StoredIdentity,
};
pub use notifications::{Notification, NotificationLevel, Notifier};
pub use query::{
    error::QueryError,
    query_client::QueryClient,
    query_key::{QueryKey, QueryName},
    query_options::QueryOptions,
    query_status::QueryStatus,
};
