use clap::Subcommand;

#[derive(Subcommand)]
pub enum CourseCommands {
    /// List all courses
    List,
    /// List the caller's enrolled courses
    Enrolled,
    /// Enroll the caller in a course
    Enroll {
        /// Course ID (basic, advanced, super)
        course_id: String,
    },
    /// Public course catalog
    Catalog,
}
