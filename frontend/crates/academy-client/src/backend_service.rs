use crate::ClientResult;

use academy_core::{
    AccessRole, ApplicationId, Course, Marketer, MarketerStats, Principal, Student,
    StudentApplication, UserProfile,
};
use async_trait::async_trait;

/// Remote academy backend, as seen by one caller.
///
/// Every call is made on behalf of the identity the handle was created for;
/// `caller`-scoped operations act on that identity.
#[async_trait]
pub trait BackendService: Send + Sync {
    // Profiles
    async fn get_caller_user_profile(&self) -> ClientResult<Option<UserProfile>>;
    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ClientResult<()>;
    async fn get_user_profile(&self, user: &Principal) -> ClientResult<Option<UserProfile>>;

    // Courses
    async fn get_all_courses(&self) -> ClientResult<Vec<Course>>;
    async fn get_enrolled_courses(&self, student: &Principal) -> ClientResult<Vec<Course>>;
    async fn enroll_in_course(&self, course_id: &str) -> ClientResult<()>;

    // Students
    async fn get_all_students(&self) -> ClientResult<Vec<Student>>;
    async fn update_student_name(&self, name: &str) -> ClientResult<()>;

    // Marketers
    async fn get_all_marketers(&self) -> ClientResult<Vec<Marketer>>;
    async fn get_marketer_stats(&self, marketer: &Principal) -> ClientResult<MarketerStats>;
    async fn update_marketer_name(&self, name: &str) -> ClientResult<()>;
    async fn track_marketer_referral(&self) -> ClientResult<()>;

    // Applications
    async fn submit_student_application(
        &self,
        application: &StudentApplication,
    ) -> ClientResult<ApplicationId>;
    async fn get_all_student_applications(
        &self,
    ) -> ClientResult<Vec<(ApplicationId, StudentApplication)>>;
    async fn get_student_application(
        &self,
        id: ApplicationId,
    ) -> ClientResult<Option<StudentApplication>>;

    // Access control
    async fn get_caller_user_role(&self) -> ClientResult<AccessRole>;
    async fn is_caller_admin(&self) -> ClientResult<bool>;
    async fn assign_caller_user_role(&self, user: &Principal, role: AccessRole)
    -> ClientResult<()>;
}
