//! In-memory backend and context builders shared by the session tests.

use crate::{
    AppContext, FileIdentityProvider, IdentityError, IdentityProvider, IdentityResult,
    LoginStatus,
};

use academy_client::{
    BackendFactory, BackendService, ClientError, ClientResult, RetryPolicy,
};
use academy_core::{
    AccessRole, ApplicationId, Course, Marketer, MarketerStats, Principal, Student,
    StudentApplication, UserProfile,
};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::{Notify, Semaphore};

#[derive(Default)]
pub struct StoreState {
    pub profiles: HashMap<Principal, UserProfile>,
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub marketers: Vec<Marketer>,
    pub applications: Vec<StudentApplication>,
    pub access: HashMap<Principal, AccessRole>,
    pub calls: HashMap<&'static str, u32>,
    pub fail_profile: bool,
}

/// Backend state shared by every actor the fake factory hands out
#[derive(Clone, Default)]
pub struct FakeStore {
    pub state: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn with_courses() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().courses = vec![
            course("basic", "Basic Course"),
            course("advanced", "Advanced Course"),
            course("super", "Super Course"),
        ];
        store
    }

    pub fn calls(&self, operation: &str) -> u32 {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn set_profile(&self, principal: &Principal, name: &str, role: &str) {
        self.state.lock().unwrap().profiles.insert(
            principal.clone(),
            UserProfile {
                name: name.to_string(),
                role: role.to_string(),
            },
        );
    }

    fn record(&self, operation: &'static str) {
        *self
            .state
            .lock()
            .unwrap()
            .calls
            .entry(operation)
            .or_insert(0) += 1;
    }
}

pub fn course(id: &str, name: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
    }
}

pub struct FakeBackend {
    caller: Option<Principal>,
    store: FakeStore,
}

impl FakeBackend {
    fn require_caller(&self) -> ClientResult<Principal> {
        self.caller
            .clone()
            .ok_or_else(|| ClientError::api_error("UNAUTHORIZED", "Anonymous caller"))
    }
}

#[async_trait]
impl BackendService for FakeBackend {
    async fn get_caller_user_profile(&self) -> ClientResult<Option<UserProfile>> {
        self.store.record("getCallerUserProfile");
        let state = self.store.state.lock().unwrap();
        if state.fail_profile {
            return Err(ClientError::unavailable("backend down"));
        }
        Ok(self
            .caller
            .as_ref()
            .and_then(|c| state.profiles.get(c).cloned()))
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ClientResult<()> {
        self.store.record("saveCallerUserProfile");
        let caller = self.require_caller()?;
        self.store
            .state
            .lock()
            .unwrap()
            .profiles
            .insert(caller, profile.clone());
        Ok(())
    }

    async fn get_user_profile(&self, user: &Principal) -> ClientResult<Option<UserProfile>> {
        self.store.record("getUserProfile");
        Ok(self.store.state.lock().unwrap().profiles.get(user).cloned())
    }

    async fn get_all_courses(&self) -> ClientResult<Vec<Course>> {
        self.store.record("getAllCourses");
        Ok(self.store.state.lock().unwrap().courses.clone())
    }

    async fn get_enrolled_courses(&self, student: &Principal) -> ClientResult<Vec<Course>> {
        self.store.record("getEnrolledCourses");
        let state = self.store.state.lock().unwrap();
        let ids = state
            .students
            .iter()
            .find(|s| &s.principal == student)
            .map(|s| s.enrolled_courses.clone())
            .unwrap_or_default();
        Ok(state
            .courses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn enroll_in_course(&self, course_id: &str) -> ClientResult<()> {
        self.store.record("enrollInCourse");
        let caller = self.require_caller()?;
        let mut state = self.store.state.lock().unwrap();
        if !state.courses.iter().any(|c| c.id == course_id) {
            return Err(ClientError::api_error("NOT_FOUND", "Course not found"));
        }
        let name = state
            .profiles
            .get(&caller)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        match state.students.iter().position(|s| s.principal == caller) {
            Some(i) => state.students[i].enrolled_courses.push(course_id.to_string()),
            None => state.students.push(Student {
                principal: caller,
                name,
                enrolled_courses: vec![course_id.to_string()],
            }),
        }
        Ok(())
    }

    async fn get_all_students(&self) -> ClientResult<Vec<Student>> {
        self.store.record("getAllStudents");
        Ok(self.store.state.lock().unwrap().students.clone())
    }

    async fn update_student_name(&self, name: &str) -> ClientResult<()> {
        self.store.record("updateStudentName");
        let caller = self.require_caller()?;
        let mut state = self.store.state.lock().unwrap();
        if let Some(student) = state.students.iter_mut().find(|s| s.principal == caller) {
            student.name = name.to_string();
        }
        Ok(())
    }

    async fn get_all_marketers(&self) -> ClientResult<Vec<Marketer>> {
        self.store.record("getAllMarketers");
        Ok(self.store.state.lock().unwrap().marketers.clone())
    }

    async fn get_marketer_stats(&self, marketer: &Principal) -> ClientResult<MarketerStats> {
        self.store.record("getMarketerStats");
        self.store
            .state
            .lock()
            .unwrap()
            .marketers
            .iter()
            .find(|m| &m.principal == marketer)
            .map(|m| MarketerStats {
                name: m.name.clone(),
                referral_count: m.referral_count,
            })
            .ok_or_else(|| ClientError::api_error("NOT_FOUND", "Marketer not found"))
    }

    async fn update_marketer_name(&self, name: &str) -> ClientResult<()> {
        self.store.record("updateMarketerName");
        let caller = self.require_caller()?;
        let mut state = self.store.state.lock().unwrap();
        match state.marketers.iter().position(|m| m.principal == caller) {
            Some(i) => state.marketers[i].name = name.to_string(),
            None => state.marketers.push(Marketer {
                principal: caller,
                name: name.to_string(),
                referral_count: 0,
            }),
        }
        Ok(())
    }

    async fn track_marketer_referral(&self) -> ClientResult<()> {
        self.store.record("trackMarketerReferral");
        let caller = self.require_caller()?;
        let mut state = self.store.state.lock().unwrap();
        match state.marketers.iter().position(|m| m.principal == caller) {
            Some(i) => state.marketers[i].referral_count += 1,
            None => state.marketers.push(Marketer {
                principal: caller,
                name: "Unknown".to_string(),
                referral_count: 1,
            }),
        }
        Ok(())
    }

    async fn submit_student_application(
        &self,
        application: &StudentApplication,
    ) -> ClientResult<ApplicationId> {
        self.store.record("submitStudentApplication");
        let mut state = self.store.state.lock().unwrap();
        state.applications.push(application.clone());
        Ok(ApplicationId(state.applications.len() as u64 - 1))
    }

    async fn get_all_student_applications(
        &self,
    ) -> ClientResult<Vec<(ApplicationId, StudentApplication)>> {
        self.store.record("getAllStudentApplications");
        Ok(self
            .store
            .state
            .lock()
            .unwrap()
            .applications
            .iter()
            .enumerate()
            .map(|(i, a)| (ApplicationId(i as u64), a.clone()))
            .collect())
    }

    async fn get_student_application(
        &self,
        id: ApplicationId,
    ) -> ClientResult<Option<StudentApplication>> {
        self.store.record("getStudentApplication");
        Ok(self
            .store
            .state
            .lock()
            .unwrap()
            .applications
            .get(id.0 as usize)
            .cloned())
    }

    async fn get_caller_user_role(&self) -> ClientResult<AccessRole> {
        self.store.record("getCallerUserRole");
        let state = self.store.state.lock().unwrap();
        Ok(self
            .caller
            .as_ref()
            .and_then(|c| state.access.get(c).copied())
            .unwrap_or(AccessRole::Guest))
    }

    async fn is_caller_admin(&self) -> ClientResult<bool> {
        self.store.record("isCallerAdmin");
        Ok(self.get_caller_user_role().await? == AccessRole::Admin)
    }

    async fn assign_caller_user_role(
        &self,
        user: &Principal,
        role: AccessRole,
    ) -> ClientResult<()> {
        self.store.record("assignCallerUserRole");
        self.store
            .state
            .lock()
            .unwrap()
            .access
            .insert(user.clone(), role);
        Ok(())
    }
}

/// Factory handing out actors bound to the requested caller
pub struct FakeFactory {
    pub store: FakeStore,
    pub unavailable: AtomicBool,
    held: AtomicBool,
    gate: Semaphore,
    /// Signalled when a connect starts waiting on a held gate
    pub connecting: Notify,
}

impl FakeFactory {
    pub fn new(store: FakeStore) -> Self {
        Self {
            store,
            unavailable: AtomicBool::new(false),
            held: AtomicBool::new(false),
            gate: Semaphore::new(0),
            connecting: Notify::new(),
        }
    }

    /// Block every `connect` until `release_connections`
    pub fn hold_connections(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release_connections(&self) {
        self.held.store(false, Ordering::SeqCst);
        // Permits are returned on drop, so one lets every waiter through
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl BackendFactory for FakeFactory {
    async fn connect(&self, caller: Option<&Principal>) -> ClientResult<Arc<dyn BackendService>> {
        if self.held.load(Ordering::SeqCst) {
            self.connecting.notify_one();
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|_| ClientError::unavailable("gate closed"))?;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ClientError::unavailable("replica unreachable"));
        }
        Ok(Arc::new(FakeBackend {
            caller: caller.cloned(),
            store: self.store.clone(),
        }))
    }
}

/// File-backed identity whose next `failures` logins fail with `error`
pub struct FlakyIdentity {
    inner: FileIdentityProvider,
    failures: AtomicU32,
    transient: bool,
    pub logins: AtomicU32,
}

impl FlakyIdentity {
    pub fn new(path: PathBuf, failures: u32, transient: bool) -> Self {
        Self {
            inner: FileIdentityProvider::new(path),
            failures: AtomicU32::new(failures),
            transient,
            logins: AtomicU32::new(0),
        }
    }

    fn failure(&self) -> IdentityError {
        let path = self.inner.path().to_path_buf();
        if self.transient {
            IdentityError::file_write(path, std::io::Error::other("disk busy"))
        } else {
            IdentityError::dir_creation(path, std::io::Error::other("read-only"))
        }
    }
}

#[async_trait]
impl IdentityProvider for FlakyIdentity {
    async fn initialize(&self) -> IdentityResult<()> {
        self.inner.initialize().await
    }

    async fn identity(&self) -> Option<Principal> {
        self.inner.identity().await
    }

    async fn login_status(&self) -> LoginStatus {
        self.inner.login_status().await
    }

    async fn login(&self, principal: Option<Principal>) -> IdentityResult<Principal> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(self.failure());
        }
        self.inner.login(principal).await
    }

    async fn clear(&self) -> IdentityResult<()> {
        self.inner.clear().await
    }
}

pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

/// Context over a fresh temp identity file and the given store
pub struct TestContext {
    pub ctx: AppContext,
    pub store: FakeStore,
    pub factory: Arc<FakeFactory>,
    _dir: TempDir,
}

impl TestContext {
    pub fn new(store: FakeStore) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let identity = Arc::new(FileIdentityProvider::new(dir.path().join("identity.json")));
        let factory = Arc::new(FakeFactory::new(store.clone()));
        let ctx = AppContext::new(identity, factory.clone(), fast_retry());

        Self {
            ctx,
            store,
            factory,
            _dir: dir,
        }
    }

    pub async fn initialized(store: FakeStore) -> Self {
        let test = Self::new(store);
        test.ctx.initialize().await.unwrap();
        test
    }
}
