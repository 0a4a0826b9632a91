use crate::{
    application_commands::ApplicationCommands, course_commands::CourseCommands,
    marketer_commands::MarketerCommands, profile_commands::ProfileCommands,
    role_commands::RoleCommands, student_commands::StudentCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current screen (homepage, profile setup or role dashboard)
    Screen {
        /// Filter the management student table by name
        #[arg(long)]
        student_search: Option<String>,
        /// Filter the management application table
        #[arg(long)]
        application_search: Option<String>,
    },

    /// Log in, reusing the stored identity unless a principal is given
    Login {
        #[arg(long)]
        principal: Option<String>,
    },

    /// Forget the identity and all cached data
    Logout,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Course operations
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Student operations
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },

    /// Marketer operations
    Marketer {
        #[command(subcommand)]
        action: MarketerCommands,
    },

    /// Admission application operations
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },

    /// Backend access-control roles
    Role {
        #[command(subcommand)]
        action: RoleCommands,
    },
}
