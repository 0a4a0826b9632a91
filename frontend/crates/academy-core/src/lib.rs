pub mod catalog;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogCourse, catalog, course_image, course_label};
pub use error::{CoreError, Result};
pub use models::access_role::AccessRole;
pub use models::application_form::ApplicationForm;
pub use models::application_id::ApplicationId;
pub use models::contact_info::ContactInfo;
pub use models::course::Course;
pub use models::marketer::Marketer;
pub use models::marketer_stats::MarketerStats;
pub use models::principal::Principal;
pub use models::role::Role;
pub use models::student::Student;
pub use models::student_application::StudentApplication;
pub use models::user_profile::UserProfile;
