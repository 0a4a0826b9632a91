use super::support::{FakeStore, TestContext, course};
use crate::dashboard::management::{
    average_enrollments, course_enrollments, rank_marketers, search_applications,
    search_students,
};
use crate::{
    Dashboard, DashboardFilters, LoginStatus, ManagementDashboard, PublicHomepage,
    StudentDashboard, load_dashboard,
};

use academy_core::{
    ApplicationId, ContactInfo, Marketer, MarketerStats, Principal, Role, Student,
    StudentApplication, UserProfile, course_image,
};

fn student(name: &str, courses: &[&str]) -> Student {
    Student {
        principal: Principal::new(name.to_lowercase()),
        name: name.to_string(),
        enrolled_courses: courses.iter().map(|c| c.to_string()).collect(),
    }
}

fn marketer(name: &str, referral_count: u64) -> Marketer {
    Marketer {
        principal: Principal::new(name.to_lowercase()),
        name: name.to_string(),
        referral_count,
    }
}

fn application(
    name: &str,
    father: &str,
    city: &str,
    referred_by: Option<&str>,
) -> StudentApplication {
    let contact = ContactInfo {
        father_name: father.to_string(),
        city: city.to_string(),
        age: "18".to_string(),
        contact_number: "555".to_string(),
    };
    StudentApplication {
        name: name.to_string(),
        contact_info: contact.encode().unwrap(),
        course_selected: "basic".to_string(),
        referred_by: referred_by.map(String::from),
    }
}

// =============================================================================
// Student
// =============================================================================

#[test]
fn given_enrolled_subset_when_build_student_dashboard_then_flags_and_counts() {
    let courses = vec![
        course("basic", "Basic Course"),
        course("advanced", "Advanced Course"),
        course("super", "Super Course"),
    ];
    let enrolled = vec![course("advanced", "Advanced Course")];

    let view = StudentDashboard::build("Ann", &courses, &enrolled);

    assert_eq!(view.enrolled_count, 1);
    assert_eq!(view.available_count, 2);
    assert!(!view.courses[0].enrolled);
    assert!(view.courses[1].enrolled);
    assert_eq!(view.courses[1].image, course_image("advanced"));
    assert!(view.enrolled_courses.iter().all(|c| c.enrolled));
}

// =============================================================================
// Management
// =============================================================================

#[test]
fn given_students_when_course_enrollments_then_counts_labels_and_share() {
    let courses = vec![
        course("basic", "Basic Course"),
        course("advanced", "Advanced Course"),
        course("super", "Super Course"),
    ];
    let students = vec![
        student("Ann", &["basic", "advanced"]),
        student("Ben", &["basic"]),
        student("Cy", &["basic"]),
    ];

    let rows = course_enrollments(&courses, &students);

    assert_eq!(rows[0].label, "Basic");
    assert_eq!(rows[0].enrollments, 3);
    assert_eq!(rows[0].share_percent, 75);
    assert_eq!(rows[1].share_percent, 25);
    assert_eq!(rows[2].enrollments, 0);
    assert!(!rows[2].active);
}

#[test]
fn given_no_enrollments_when_course_enrollments_then_zero_share() {
    let rows = course_enrollments(&[course("basic", "Basic Course")], &[]);

    assert_eq!(rows[0].share_percent, 0);
}

#[test]
fn given_students_when_average_enrollments_then_one_decimal() {
    let students = vec![student("Ann", &["basic", "advanced"]), student("Ben", &["basic"])];

    assert_eq!(average_enrollments(&students), "1.5");
    assert_eq!(average_enrollments(&[]), "0");
}

#[test]
fn given_marketers_when_rank_then_descending_with_stable_ties() {
    let marketers = vec![marketer("Low", 1), marketer("TieA", 5), marketer("TieB", 5)];

    let ranked = rank_marketers(&marketers);

    let names: Vec<&str> = ranked.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["TieA", "TieB", "Low"]);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[2].rank, 3);
}

#[test]
fn given_search_term_when_search_students_then_case_insensitive_with_course_names() {
    let courses = vec![course("basic", "Basic Course")];
    let students = vec![student("Annika", &["basic", "retired"]), student("Ben", &[])];

    let rows = search_students(&students, &courses, Some("ANN"));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].courses, vec!["Basic Course", "retired"]);
}

#[test]
fn given_term_when_search_applications_then_matches_contact_and_referrer() {
    let applications = vec![
        (ApplicationId(1), application("Asha", "Ravi", "Pune", None)),
        (ApplicationId(2), application("Bela", "Om", "Delhi", Some("Mia"))),
    ];

    let by_city = search_applications(&applications, Some("pune"));
    let by_referrer = search_applications(&applications, Some("mia"));
    let all = search_applications(&applications, None);

    assert_eq!(by_city.len(), 1);
    assert_eq!(by_city[0].father_name, "Ravi");
    assert_eq!(by_referrer.len(), 1);
    assert_eq!(by_referrer[0].id, ApplicationId(2));
    assert_eq!(all.len(), 2);
}

#[test]
fn given_unparseable_contact_when_search_applications_then_row_has_fallbacks() {
    let applications = vec![(
        ApplicationId(3),
        StudentApplication {
            name: "Raw".into(),
            contact_info: "98765".into(),
            course_selected: "super".into(),
            referred_by: None,
        },
    )];

    let rows = search_applications(&applications, None);

    assert_eq!(rows[0].city, "N/A");
    assert_eq!(rows[0].contact_number, "98765");
}

#[test]
fn given_data_when_build_management_dashboard_then_totals_and_top_performer() {
    let courses = vec![course("basic", "Basic Course")];
    let students = vec![student("Ann", &["basic"])];
    let marketers = vec![marketer("Mia", 2), marketer("Raj", 7)];

    let view = ManagementDashboard::build(
        &courses,
        &students,
        &marketers,
        &[],
        &DashboardFilters::default(),
    );

    assert_eq!(view.total_courses, 1);
    assert_eq!(view.total_enrollments, 1);
    assert_eq!(view.total_referrals, 9);
    assert_eq!(view.top_performer.unwrap().name, "Raj");
}

// =============================================================================
// Loading through the context
// =============================================================================

#[tokio::test]
async fn given_role_when_load_dashboard_then_variant_matches_role() {
    let test = TestContext::initialized(FakeStore::with_courses()).await;
    test.ctx.login(None).await.unwrap();
    let profile = UserProfile::new("Ann", Role::Student).unwrap();

    for role in Role::ALL {
        let dashboard = load_dashboard(&test.ctx, role, &profile, &DashboardFilters::default())
            .await
            .unwrap();
        assert_eq!(dashboard.role(), role);
    }
}

#[tokio::test]
async fn given_marketer_without_stats_when_load_dashboard_then_unknown_fallback() {
    let test = TestContext::initialized(FakeStore::with_courses()).await;
    test.ctx.login(None).await.unwrap();
    let profile = UserProfile::new("Mia", Role::Marketer).unwrap();

    let result = load_dashboard(
        &test.ctx,
        Role::Marketer,
        &profile,
        &DashboardFilters::default(),
    )
    .await
    .unwrap();

    match result {
        Dashboard::Marketer(view) => {
            let unknown = MarketerStats::unknown();
            assert_eq!(view.name, unknown.name);
            assert_eq!(view.referral_count, 0);
        }
        other => panic!("expected marketer dashboard, got {other:?}"),
    }
}

#[tokio::test]
async fn given_student_when_load_dashboard_then_courses_listed() {
    let test = TestContext::initialized(FakeStore::with_courses()).await;
    test.ctx.login(None).await.unwrap();
    test.ctx.enroll_in_course("super").await.unwrap();
    let profile = UserProfile::new("Ann", Role::Student).unwrap();

    let dashboard = load_dashboard(
        &test.ctx,
        Role::Student,
        &profile,
        &DashboardFilters::default(),
    )
    .await
    .unwrap();

    match dashboard {
        Dashboard::Student(view) => {
            assert_eq!(view.courses.len(), 3);
            assert_eq!(view.enrolled_count, 1);
        }
        other => panic!("expected student dashboard, got {other:?}"),
    }
}

#[test]
fn given_logging_in_when_homepage_then_flag_set_and_catalog_listed() {
    let page = PublicHomepage::new(LoginStatus::LoggingIn);

    assert!(page.logging_in);
    assert_eq!(page.courses.len(), 3);
    assert!(!PublicHomepage::new(LoginStatus::Idle).logging_in);
}
