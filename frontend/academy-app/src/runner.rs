//! Executes a parsed command against the application context.

use crate::{
    application_commands::ApplicationCommands, commands::Commands,
    course_commands::CourseCommands, error::Result as AppResult,
    marketer_commands::MarketerCommands, profile_commands::ProfileCommands,
    role_commands::RoleCommands, student_commands::StudentCommands,
};

use academy_core::{
    AccessRole, ApplicationForm, ApplicationId, Principal, Role, UserProfile, catalog,
};
use academy_session::{
    AppContext, Dashboard, DashboardFilters, LoginStatus, PublicHomepage, Screen,
    dashboard::management::search_applications, load_dashboard,
};

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};

/// Everything needed to render the current screen
#[derive(Debug, Serialize)]
pub struct ScreenView {
    pub screen: Screen,
    pub login_status: LoginStatus,
    pub principal: Option<Principal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<PublicHomepage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,
}

pub async fn screen_view(ctx: &AppContext, filters: &DashboardFilters) -> AppResult<ScreenView> {
    let screen = ctx.current_screen().await;
    let login_status = ctx.login_status().await;

    let mut view = ScreenView {
        screen: screen.clone(),
        login_status,
        principal: ctx.identity().await,
        homepage: None,
        profile: None,
        dashboard: None,
    };

    match screen {
        Screen::PublicHomepage => {
            view.homepage = Some(PublicHomepage::new(login_status));
        }
        Screen::Dashboard(role) => {
            if let Some(profile) = ctx.caller_profile().await? {
                view.dashboard = Some(load_dashboard(ctx, role, &profile, filters).await?);
                view.profile = Some(profile);
            }
        }
        Screen::Initializing
        | Screen::ProfileSetup
        | Screen::UnknownRole(_)
        | Screen::Loading
        | Screen::ProfileUnavailable(_) => {}
    }

    Ok(view)
}

fn to_json<T: Serialize>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

pub async fn run(ctx: &AppContext, command: Commands) -> AppResult<Value> {
    match command {
        Commands::Screen {
            student_search,
            application_search,
        } => {
            let filters = DashboardFilters {
                student_search,
                application_search,
            };
            to_json(&screen_view(ctx, &filters).await?)
        }

        Commands::Login { principal } => {
            let principal = ctx.login(principal.map(Principal::new)).await?;
            let screen = ctx.current_screen().await;
            Ok(json!({ "principal": principal, "screen": screen }))
        }

        Commands::Logout => {
            ctx.logout().await?;
            to_json(&ctx.current_screen().await)
        }

        Commands::Profile { action } => match action {
            ProfileCommands::Show => to_json(&ctx.caller_profile().await?),
            ProfileCommands::Setup { name, role } => {
                let role = Role::from_str(&role)?;
                ctx.save_profile(&name, role).await?;
                to_json(&ctx.current_screen().await)
            }
        },

        Commands::Course { action } => match action {
            CourseCommands::List => to_json(&ctx.courses().await?),
            CourseCommands::Enrolled => to_json(&ctx.enrolled_courses().await?),
            CourseCommands::Enroll { course_id } => {
                ctx.enroll_in_course(&course_id).await?;
                to_json(&ctx.enrolled_courses().await?)
            }
            CourseCommands::Catalog => to_json(&catalog()),
        },

        Commands::Student { action } => match action {
            StudentCommands::List => to_json(&ctx.students().await?),
            StudentCommands::Rename { name } => {
                ctx.update_student_name(&name).await?;
                to_json(&ctx.students().await?)
            }
        },

        Commands::Marketer { action } => match action {
            MarketerCommands::List => to_json(&ctx.marketers().await?),
            MarketerCommands::Stats => to_json(&ctx.marketer_stats().await?),
            MarketerCommands::Rename { name } => {
                ctx.update_marketer_name(&name).await?;
                to_json(&ctx.marketer_stats().await?)
            }
            MarketerCommands::Referral => {
                ctx.track_referral().await?;
                to_json(&ctx.marketer_stats().await?)
            }
        },

        Commands::Application { action } => match action {
            ApplicationCommands::Submit {
                student_name,
                father_name,
                city,
                age,
                contact_number,
                course,
                referred_by,
            } => {
                let form = ApplicationForm {
                    student_name,
                    father_name,
                    city,
                    age,
                    contact_number,
                    course_selected: course,
                    referred_by: referred_by.unwrap_or_default(),
                };
                let id = ctx.submit_application(&form).await?;
                Ok(json!({ "id": id }))
            }
            ApplicationCommands::List { search } => {
                let applications = ctx.student_applications().await?;
                to_json(&search_applications(&applications, search.as_deref()))
            }
            ApplicationCommands::Get { id } => {
                to_json(&ctx.student_application(ApplicationId(id)).await?)
            }
        },

        Commands::Role { action } => match action {
            RoleCommands::Get => to_json(&ctx.caller_access_role().await?),
            RoleCommands::IsAdmin => to_json(&ctx.is_caller_admin().await?),
            RoleCommands::Assign { principal, role } => {
                let role = AccessRole::from_str(&role)?;
                let principal = Principal::new(principal);
                ctx.assign_role(&principal, role).await?;
                Ok(json!({ "principal": principal, "role": role }))
            }
        },
    }
}
