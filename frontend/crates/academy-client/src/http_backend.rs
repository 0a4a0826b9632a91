use crate::{BackendService, ClientError, ClientResult};

use std::time::Duration;

use academy_core::{
    AccessRole, ApplicationId, Course, Marketer, MarketerStats, Principal, Student,
    StudentApplication, UserProfile,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Header carrying the caller principal
pub const PRINCIPAL_HEADER: &str = "X-Principal";

/// REST client for the academy backend API
pub struct HttpBackend {
    pub base_url: String,
    pub caller: Option<Principal>,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct NameRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct AssignRoleRequest {
    role: AccessRole,
}

impl HttpBackend {
    /// Create a new backend handle
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:4943")
    /// * `caller` - Principal sent in the X-Principal header; anonymous when None
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, caller: Option<&Principal>, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            caller: caller.cloned(),
            client,
        })
    }

    /// Build a request with the caller header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref caller) = self.caller {
            req = req.header(PRINCIPAL_HEADER, caller.as_str());
        }

        req
    }

    /// Execute request and map error bodies to `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| status.as_u16().to_string());
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            debug!("{} -> {} ({})", status, code, message);
            return Err(ClientError::api_error(code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn call<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn call_unit(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        self.execute(req).await.map(|_| ())
    }
}

#[async_trait]
impl BackendService for HttpBackend {
    // =========================================================================
    // Profile Operations
    // =========================================================================

    async fn get_caller_user_profile(&self) -> ClientResult<Option<UserProfile>> {
        debug!("GET caller profile");
        self.call(self.request(Method::GET, "/api/v1/profile")).await
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ClientResult<()> {
        let req = self.request(Method::PUT, "/api/v1/profile").json(profile);
        self.call_unit(req).await
    }

    async fn get_user_profile(&self, user: &Principal) -> ClientResult<Option<UserProfile>> {
        let req = self.request(Method::GET, &format!("/api/v1/profiles/{}", user));
        self.call(req).await
    }

    // =========================================================================
    // Course Operations
    // =========================================================================

    async fn get_all_courses(&self) -> ClientResult<Vec<Course>> {
        self.call(self.request(Method::GET, "/api/v1/courses")).await
    }

    async fn get_enrolled_courses(&self, student: &Principal) -> ClientResult<Vec<Course>> {
        let req = self.request(Method::GET, &format!("/api/v1/students/{}/courses", student));
        self.call(req).await
    }

    async fn enroll_in_course(&self, course_id: &str) -> ClientResult<()> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/courses/{}/enrollments", course_id),
        );
        self.call_unit(req).await
    }

    // =========================================================================
    // Student Operations
    // =========================================================================

    async fn get_all_students(&self) -> ClientResult<Vec<Student>> {
        self.call(self.request(Method::GET, "/api/v1/students")).await
    }

    async fn update_student_name(&self, name: &str) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, "/api/v1/students/me/name")
            .json(&NameRequest { name });
        self.call_unit(req).await
    }

    // =========================================================================
    // Marketer Operations
    // =========================================================================

    async fn get_all_marketers(&self) -> ClientResult<Vec<Marketer>> {
        self.call(self.request(Method::GET, "/api/v1/marketers")).await
    }

    async fn get_marketer_stats(&self, marketer: &Principal) -> ClientResult<MarketerStats> {
        let req = self.request(Method::GET, &format!("/api/v1/marketers/{}/stats", marketer));
        self.call(req).await
    }

    async fn update_marketer_name(&self, name: &str) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, "/api/v1/marketers/me/name")
            .json(&NameRequest { name });
        self.call_unit(req).await
    }

    async fn track_marketer_referral(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/api/v1/marketers/me/referrals");
        self.call_unit(req).await
    }

    // =========================================================================
    // Application Operations
    // =========================================================================

    async fn submit_student_application(
        &self,
        application: &StudentApplication,
    ) -> ClientResult<ApplicationId> {
        let req = self
            .request(Method::POST, "/api/v1/applications")
            .json(application);
        self.call(req).await
    }

    async fn get_all_student_applications(
        &self,
    ) -> ClientResult<Vec<(ApplicationId, StudentApplication)>> {
        self.call(self.request(Method::GET, "/api/v1/applications"))
            .await
    }

    async fn get_student_application(
        &self,
        id: ApplicationId,
    ) -> ClientResult<Option<StudentApplication>> {
        let req = self.request(Method::GET, &format!("/api/v1/applications/{}", id));
        self.call(req).await
    }

    // =========================================================================
    // Access Control Operations
    // =========================================================================

    async fn get_caller_user_role(&self) -> ClientResult<AccessRole> {
        self.call(self.request(Method::GET, "/api/v1/access/role"))
            .await
    }

    async fn is_caller_admin(&self) -> ClientResult<bool> {
        self.call(self.request(Method::GET, "/api/v1/access/admin"))
            .await
    }

    async fn assign_caller_user_role(
        &self,
        user: &Principal,
        role: AccessRole,
    ) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, &format!("/api/v1/access/roles/{}", user))
            .json(&AssignRoleRequest { role });
        self.call_unit(req).await
    }
}
