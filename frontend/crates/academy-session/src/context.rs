//! Process-wide application context.
//!
//! Owns the identity provider, the backend actor bound to the current
//! identity, the query cache and the notifier. Created once at startup and
//! passed by reference to every consumer.

use crate::bootstrap::{ProfileState, Screen, resolve_screen};
use crate::error::{Result as SessionResult, SessionError};
use crate::identity::{IdentityProvider, login_status::LoginStatus};
use crate::notifications::Notifier;
use crate::query::{
    error::QueryError,
    query_client::QueryClient,
    query_key::{QueryKey, QueryName},
    query_options::QueryOptions,
};

use academy_client::{BackendFactory, BackendService, ClientResult, RetryPolicy};
use academy_config::{Config, RetryConfig};
use academy_core::{
    AccessRole, ApplicationForm, ApplicationId, Course, CoreError, Marketer, MarketerStats,
    Principal, Role, Student, StudentApplication, UserProfile,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

const LOGIN_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Backend handle bound to the identity it was created for
#[derive(Clone)]
struct BoundActor {
    caller: Option<Principal>,
    service: Arc<dyn BackendService>,
}

/// Whether a mutation acts on data owned by the logged-in identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Caller {
    Required,
    Optional,
}

pub struct AppContext {
    identity: Arc<dyn IdentityProvider>,
    backends: Arc<dyn BackendFactory>,
    actor: RwLock<Option<BoundActor>>,
    queries: QueryClient,
    notifier: Notifier,
    read_options: QueryOptions,
    profile_options: QueryOptions,
}

/// Retry policy for read queries from the `[retry]` config section
pub fn retry_policy(config: &RetryConfig) -> RetryPolicy {
    RetryPolicy {
        max_attempts: config.max_attempts,
        initial_delay: config.initial_delay(),
        max_delay: config.max_delay(),
        backoff_multiplier: config.backoff_multiplier,
        jitter: config.jitter,
    }
}

impl AppContext {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        backends: Arc<dyn BackendFactory>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            identity,
            backends,
            actor: RwLock::new(None),
            queries: QueryClient::new(),
            notifier: Notifier::new(),
            read_options: QueryOptions::new(retry),
            // Profile failures surface immediately
            profile_options: QueryOptions::no_retry(),
        }
    }

    pub fn from_config(
        config: &Config,
        identity: Arc<dyn IdentityProvider>,
        backends: Arc<dyn BackendFactory>,
    ) -> Self {
        Self::new(identity, backends, retry_policy(&config.retry))
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Restore the persisted identity; leaves `LoginStatus::Initializing`
    pub async fn initialize(&self) -> SessionResult<()> {
        self.identity.initialize().await?;
        Ok(())
    }

    pub async fn login_status(&self) -> LoginStatus {
        self.identity.login_status().await
    }

    pub async fn identity(&self) -> Option<Principal> {
        self.identity.identity().await
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Log in; a transient identity-store failure is retried once
    pub async fn login(&self, principal: Option<Principal>) -> SessionResult<Principal> {
        let previous = self.identity.identity().await;

        let attempt = match self.identity.login(principal.clone()).await {
            Err(e) if e.is_transient() => {
                warn!("Login failed ({e}), retrying once");
                tokio::time::sleep(LOGIN_RETRY_DELAY).await;
                self.identity.login(principal).await
            }
            other => other,
        };

        let principal = match attempt {
            Ok(principal) => principal,
            Err(e) => {
                self.notifier
                    .error(format!("Login failed: {}", e.recovery_hint()));
                return Err(e.into());
            }
        };

        if previous.as_ref() != Some(&principal) {
            self.reset_session().await;
        }

        Ok(principal)
    }

    /// Clear the identity and every cached query
    pub async fn logout(&self) -> SessionResult<()> {
        self.identity.clear().await?;
        self.reset_session().await;
        info!("Logged out");
        Ok(())
    }

    async fn reset_session(&self) {
        self.queries.clear().await;
        *self.actor.write().await = None;
    }

    /// Backend handle for the current identity, or `None` when it cannot be
    /// created. Cache keys must be scoped to the returned `caller`, which may
    /// already differ from the current identity.
    async fn actor(&self) -> Option<BoundActor> {
        let caller = self.identity.identity().await;

        {
            let bound = self.actor.read().await;
            if let Some(bound) = bound.as_ref().filter(|b| b.caller == caller) {
                return Some(bound.clone());
            }
        }

        match self.backends.connect(caller.as_ref()).await {
            Ok(service) => {
                let bound = BoundActor { caller, service };
                if self.identity.identity().await == bound.caller {
                    *self.actor.write().await = Some(bound.clone());
                } else {
                    debug!("Identity changed while connecting, actor not kept");
                }
                Some(bound)
            }
            Err(e) => {
                warn!("Actor unavailable: {e}");
                None
            }
        }
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Profile query state. Only issued once an identity is present.
    pub async fn profile_state(&self) -> ProfileState {
        let epoch = self.queries.epoch().await;
        if self.identity.identity().await.is_none() {
            return ProfileState::Loading;
        }
        let Some(actor) = self.actor().await else {
            return ProfileState::Loading;
        };
        // Identity cleared while connecting
        let Some(caller) = actor.caller.as_ref() else {
            return ProfileState::Loading;
        };

        let key = QueryKey::new(Some(caller), QueryName::CurrentUserProfile);
        let result = self
            .queries
            .fetch_in_epoch(&key, &self.profile_options, epoch, || {
                let service = actor.service.clone();
                async move { service.get_caller_user_profile().await }
            })
            .await;

        match result {
            Ok(Some(profile)) => ProfileState::Present(profile),
            Ok(None) => ProfileState::Absent,
            Err(e) if e.is_discarded() => ProfileState::Loading,
            Err(QueryError::Fetch { source, .. }) => ProfileState::Failed(source.user_message()),
            Err(e) => ProfileState::Failed(e.to_string()),
        }
    }

    /// Screen for the current login status, identity and profile
    pub async fn current_screen(&self) -> Screen {
        let status = self.identity.login_status().await;
        let identity_present = self.identity.identity().await.is_some();

        let profile = if status != LoginStatus::Initializing && identity_present {
            self.profile_state().await
        } else {
            ProfileState::Loading
        };

        let screen = resolve_screen(status, identity_present, &profile);
        debug!("Resolved screen {screen:?} (status {status})");
        screen
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Cached read through the current actor; `fallback` when no actor exists
    async fn read<T, F, Fut>(
        &self,
        name: QueryName,
        arg: Option<String>,
        options: &QueryOptions,
        fallback: T,
        call: F,
    ) -> SessionResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(Arc<dyn BackendService>) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let epoch = self.queries.epoch().await;
        let Some(actor) = self.actor().await else {
            debug!("No actor for {name}, returning empty result");
            return Ok(fallback);
        };

        let mut key = QueryKey::new(actor.caller.as_ref(), name);
        if let Some(arg) = arg {
            key = key.with_arg(arg);
        }

        let value = self
            .queries
            .fetch_in_epoch(&key, options, epoch, || call(actor.service.clone()))
            .await?;
        Ok(value)
    }

    pub async fn caller_profile(&self) -> SessionResult<Option<UserProfile>> {
        let options = self.profile_options.clone();
        self.read(
            QueryName::CurrentUserProfile,
            None,
            &options,
            None,
            |actor| async move { actor.get_caller_user_profile().await },
        )
        .await
    }

    pub async fn user_profile(&self, user: &Principal) -> SessionResult<Option<UserProfile>> {
        let options = self.read_options.clone();
        self.read(
            QueryName::UserProfile,
            Some(user.to_string()),
            &options,
            None,
            |actor| {
                let user = user.clone();
                async move { actor.get_user_profile(&user).await }
            },
        )
        .await
    }

    pub async fn courses(&self) -> SessionResult<Vec<Course>> {
        let options = self.read_options.clone();
        self.read(QueryName::Courses, None, &options, Vec::new(), |actor| async move {
            actor.get_all_courses().await
        })
        .await
    }

    /// Courses the caller is enrolled in; empty without an identity
    pub async fn enrolled_courses(&self) -> SessionResult<Vec<Course>> {
        let Some(caller) = self.identity.identity().await else {
            return Ok(Vec::new());
        };

        let options = self.read_options.clone();
        self.read(
            QueryName::EnrolledCourses,
            Some(caller.to_string()),
            &options,
            Vec::new(),
            |actor| {
                let caller = caller.clone();
                async move { actor.get_enrolled_courses(&caller).await }
            },
        )
        .await
    }

    pub async fn students(&self) -> SessionResult<Vec<Student>> {
        let options = self.read_options.clone();
        self.read(QueryName::Students, None, &options, Vec::new(), |actor| async move {
            actor.get_all_students().await
        })
        .await
    }

    pub async fn marketers(&self) -> SessionResult<Vec<Marketer>> {
        let options = self.read_options.clone();
        self.read(QueryName::Marketers, None, &options, Vec::new(), |actor| async move {
            actor.get_all_marketers().await
        })
        .await
    }

    /// Caller's referral stats; `Unknown`/0 without an identity or actor
    pub async fn marketer_stats(&self) -> SessionResult<MarketerStats> {
        let Some(caller) = self.identity.identity().await else {
            return Ok(MarketerStats::unknown());
        };

        let options = self.read_options.clone();
        self.read(
            QueryName::MarketerStats,
            Some(caller.to_string()),
            &options,
            MarketerStats::unknown(),
            |actor| {
                let caller = caller.clone();
                async move { actor.get_marketer_stats(&caller).await }
            },
        )
        .await
    }

    pub async fn student_applications(
        &self,
    ) -> SessionResult<Vec<(ApplicationId, StudentApplication)>> {
        let options = self.read_options.clone();
        self.read(
            QueryName::StudentApplications,
            None,
            &options,
            Vec::new(),
            |actor| async move { actor.get_all_student_applications().await },
        )
        .await
    }

    pub async fn student_application(
        &self,
        id: ApplicationId,
    ) -> SessionResult<Option<StudentApplication>> {
        let options = self.read_options.clone();
        self.read(
            QueryName::StudentApplication,
            Some(id.to_string()),
            &options,
            None,
            |actor| async move { actor.get_student_application(id).await },
        )
        .await
    }

    pub async fn caller_access_role(&self) -> SessionResult<AccessRole> {
        let options = self.read_options.clone();
        self.read(
            QueryName::CallerUserRole,
            None,
            &options,
            AccessRole::Guest,
            |actor| async move { actor.get_caller_user_role().await },
        )
        .await
    }

    pub async fn is_caller_admin(&self) -> SessionResult<bool> {
        let options = self.read_options.clone();
        self.read(QueryName::IsCallerAdmin, None, &options, false, |actor| async move {
            actor.is_caller_admin().await
        })
        .await
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Run a mutation, notify the outcome and invalidate dependent queries on success
    async fn mutate<T, F, Fut>(
        &self,
        caller: Caller,
        failure: &str,
        success: &str,
        invalidates: &[QueryName],
        call: F,
    ) -> SessionResult<T>
    where
        F: FnOnce(Arc<dyn BackendService>) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if caller == Caller::Required && self.identity.identity().await.is_none() {
            return self.reject(failure, SessionError::not_authenticated());
        }
        let Some(actor) = self.actor().await else {
            return self.reject(failure, SessionError::actor_unavailable());
        };

        match call(actor.service).await {
            Ok(value) => {
                for name in invalidates {
                    self.queries.invalidate(*name).await;
                }
                self.notifier.success(success);
                Ok(value)
            }
            Err(e) => {
                self.notifier.error(format!("{failure}: {}", e.user_message()));
                Err(e.into())
            }
        }
    }

    fn reject<T>(&self, failure: &str, err: SessionError) -> SessionResult<T> {
        self.notifier
            .error(format!("{failure}: {}", err.user_message()));
        Err(err)
    }

    /// Save the caller's profile. The name is validated before any backend call.
    pub async fn save_profile(&self, name: &str, role: Role) -> SessionResult<()> {
        let profile = UserProfile::new(name, role)?;

        self.mutate(
            Caller::Required,
            "Failed to save profile",
            "Profile saved successfully",
            &[QueryName::CurrentUserProfile],
            |actor| async move { actor.save_caller_user_profile(&profile).await },
        )
        .await
    }

    pub async fn enroll_in_course(&self, course_id: &str) -> SessionResult<()> {
        let course_id = course_id.to_string();

        self.mutate(
            Caller::Required,
            "Enrollment failed",
            "Successfully enrolled in course!",
            &[QueryName::EnrolledCourses, QueryName::Students],
            |actor| async move { actor.enroll_in_course(&course_id).await },
        )
        .await
    }

    pub async fn update_student_name(&self, name: &str) -> SessionResult<()> {
        let name = non_blank_name(name)?;

        self.mutate(
            Caller::Required,
            "Failed to update name",
            "Name updated successfully",
            &[QueryName::Students],
            |actor| async move { actor.update_student_name(&name).await },
        )
        .await
    }

    pub async fn update_marketer_name(&self, name: &str) -> SessionResult<()> {
        let name = non_blank_name(name)?;

        self.mutate(
            Caller::Required,
            "Failed to update name",
            "Name updated successfully",
            &[QueryName::MarketerStats, QueryName::Marketers],
            |actor| async move { actor.update_marketer_name(&name).await },
        )
        .await
    }

    pub async fn track_referral(&self) -> SessionResult<()> {
        self.mutate(
            Caller::Required,
            "Failed to track referral",
            "Referral tracked successfully!",
            &[QueryName::MarketerStats, QueryName::Marketers],
            |actor| async move { actor.track_marketer_referral().await },
        )
        .await
    }

    /// Validate and submit an admission application. Validation failures are
    /// returned without a notification; the form shows them inline.
    pub async fn submit_application(&self, form: &ApplicationForm) -> SessionResult<ApplicationId> {
        let application = form.validate()?;

        self.mutate(
            Caller::Optional,
            "Failed to submit application",
            "Application submitted successfully!",
            &[QueryName::StudentApplications],
            |actor| async move { actor.submit_student_application(&application).await },
        )
        .await
    }

    pub async fn assign_role(&self, user: &Principal, role: AccessRole) -> SessionResult<()> {
        let user = user.clone();

        self.mutate(
            Caller::Required,
            "Failed to assign role",
            "Role assigned successfully",
            &[QueryName::CallerUserRole, QueryName::IsCallerAdmin],
            |actor| async move { actor.assign_caller_user_role(&user, role).await },
        )
        .await
    }
}

#[track_caller]
fn non_blank_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::validation("Name must not be empty"));
    }
    Ok(name.to_string())
}
