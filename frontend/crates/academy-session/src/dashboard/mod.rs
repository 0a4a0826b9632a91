//! Role dashboards as view models, one variant per [`Role`].

pub mod homepage;
pub mod management;
pub mod marketer;
pub mod student;

use crate::context::AppContext;
use crate::dashboard::{
    management::ManagementDashboard, marketer::MarketerDashboard, student::StudentDashboard,
};
use crate::error::Result as SessionResult;

use academy_core::{MarketerStats, Role, UserProfile};

use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", content = "view", rename_all = "snake_case")]
pub enum Dashboard {
    Student(StudentDashboard),
    Management(ManagementDashboard),
    Marketer(MarketerDashboard),
}

impl Dashboard {
    pub fn role(&self) -> Role {
        match self {
            Dashboard::Student(_) => Role::Student,
            Dashboard::Management(_) => Role::Management,
            Dashboard::Marketer(_) => Role::Marketer,
        }
    }
}

/// Search terms applied to the management tables
#[derive(Debug, Clone, Default)]
pub struct DashboardFilters {
    pub student_search: Option<String>,
    pub application_search: Option<String>,
}

/// Load the dashboard for `role` with the queries that dashboard needs
pub async fn load_dashboard(
    ctx: &AppContext,
    role: Role,
    profile: &UserProfile,
    filters: &DashboardFilters,
) -> SessionResult<Dashboard> {
    let dashboard = match role {
        Role::Student => {
            let courses = ctx.courses().await?;
            let enrolled = ctx.enrolled_courses().await?;
            Dashboard::Student(StudentDashboard::build(&profile.name, &courses, &enrolled))
        }
        Role::Management => {
            let courses = ctx.courses().await?;
            let students = ctx.students().await?;
            let marketers = ctx.marketers().await?;
            let applications = ctx.student_applications().await?;
            Dashboard::Management(ManagementDashboard::build(
                &courses,
                &students,
                &marketers,
                &applications,
                filters,
            ))
        }
        Role::Marketer => {
            let stats = ctx.marketer_stats().await.unwrap_or_else(|e| {
                warn!("Marketer stats unavailable: {e}");
                MarketerStats::unknown()
            });
            Dashboard::Marketer(MarketerDashboard::from(stats))
        }
    };

    Ok(dashboard)
}
