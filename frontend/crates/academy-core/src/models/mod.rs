pub mod access_role;
pub mod application_form;
pub mod application_id;
pub mod contact_info;
pub mod course;
pub mod marketer;
pub mod marketer_stats;
pub mod principal;
pub mod role;
pub mod student;
pub mod student_application;
pub mod user_profile;
