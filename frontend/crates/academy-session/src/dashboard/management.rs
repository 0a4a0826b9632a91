//! Management overview: enrollment analytics, marketer ranking, searchable
//! student and application tables.

use crate::dashboard::DashboardFilters;

use academy_core::{ApplicationId, Course, Marketer, Principal, Student, StudentApplication};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEnrollment {
    pub id: String,
    pub name: String,
    /// Course name without the " Course" suffix, for chart labels
    pub label: String,
    pub enrollments: usize,
    /// Share of all per-course enrollments, rounded to whole percent
    pub share_percent: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMarketer {
    pub rank: usize,
    pub principal: Principal,
    pub name: String,
    pub referral_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    pub principal: Principal,
    pub name: String,
    /// Enrolled course names; unknown ids are shown as-is
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRow {
    pub id: ApplicationId,
    pub name: String,
    pub father_name: String,
    pub city: String,
    pub age: String,
    pub contact_number: String,
    pub course_selected: String,
    pub referred_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagementDashboard {
    pub total_courses: usize,
    pub total_students: usize,
    pub total_enrollments: usize,
    pub total_referrals: u64,
    /// Enrollments per student to one decimal, "0" with no students
    pub average_enrollments: String,
    pub course_enrollments: Vec<CourseEnrollment>,
    pub marketers: Vec<RankedMarketer>,
    pub top_performer: Option<RankedMarketer>,
    pub students: Vec<StudentRow>,
    pub applications: Vec<ApplicationRow>,
}

impl ManagementDashboard {
    pub fn build(
        courses: &[Course],
        students: &[Student],
        marketers: &[Marketer],
        applications: &[(ApplicationId, StudentApplication)],
        filters: &DashboardFilters,
    ) -> Self {
        let ranked = rank_marketers(marketers);

        Self {
            total_courses: courses.len(),
            total_students: students.len(),
            total_enrollments: total_enrollments(students),
            total_referrals: marketers.iter().map(|m| m.referral_count).sum(),
            average_enrollments: average_enrollments(students),
            course_enrollments: course_enrollments(courses, students),
            top_performer: ranked.first().cloned(),
            marketers: ranked,
            students: search_students(students, courses, filters.student_search.as_deref()),
            applications: search_applications(
                applications,
                filters.application_search.as_deref(),
            ),
        }
    }
}

pub fn total_enrollments(students: &[Student]) -> usize {
    students.iter().map(|s| s.enrolled_courses.len()).sum()
}

pub fn average_enrollments(students: &[Student]) -> String {
    if students.is_empty() {
        return "0".to_string();
    }
    let average = total_enrollments(students) as f64 / students.len() as f64;
    format!("{average:.1}")
}

/// Per-course enrollment counts in catalog order
pub fn course_enrollments(courses: &[Course], students: &[Student]) -> Vec<CourseEnrollment> {
    let counts: Vec<usize> = courses
        .iter()
        .map(|c| students.iter().filter(|s| s.is_enrolled_in(&c.id)).count())
        .collect();
    let total: usize = counts.iter().sum();

    courses
        .iter()
        .zip(counts)
        .map(|(course, enrollments)| CourseEnrollment {
            id: course.id.clone(),
            name: course.name.clone(),
            label: course.name.replacen(" Course", "", 1),
            enrollments,
            share_percent: share_percent(enrollments, total),
            active: enrollments > 0,
        })
        .collect()
}

fn share_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}

/// Marketers by referral count, highest first; ties keep backend order
pub fn rank_marketers(marketers: &[Marketer]) -> Vec<RankedMarketer> {
    let mut sorted: Vec<&Marketer> = marketers.iter().collect();
    sorted.sort_by(|a, b| b.referral_count.cmp(&a.referral_count));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankedMarketer {
            rank: i + 1,
            principal: m.principal.clone(),
            name: m.name.clone(),
            referral_count: m.referral_count,
        })
        .collect()
}

/// Students whose name contains `term` (case-insensitive)
pub fn search_students(
    students: &[Student],
    courses: &[Course],
    term: Option<&str>,
) -> Vec<StudentRow> {
    let needle = term.map(str::to_lowercase).unwrap_or_default();
    let course_name = |id: &String| {
        courses
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.clone())
    };

    students
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .map(|s| StudentRow {
            principal: s.principal.clone(),
            name: s.name.clone(),
            courses: s.enrolled_courses.iter().map(course_name).collect(),
        })
        .collect()
}

/// Applications matching `term` on name, father name, city, course or referrer
pub fn search_applications(
    applications: &[(ApplicationId, StudentApplication)],
    term: Option<&str>,
) -> Vec<ApplicationRow> {
    let needle = term.map(str::to_lowercase).unwrap_or_default();

    applications
        .iter()
        .filter_map(|(id, application)| {
            let contact = application.contact();
            let matches = application.name.to_lowercase().contains(&needle)
                || contact.matches(&needle)
                || application.course_selected.to_lowercase().contains(&needle)
                || application
                    .referred_by
                    .as_ref()
                    .is_some_and(|r| r.to_lowercase().contains(&needle));

            matches.then(|| ApplicationRow {
                id: *id,
                name: application.name.clone(),
                father_name: contact.father_name,
                city: contact.city,
                age: contact.age,
                contact_number: contact.contact_number,
                course_selected: application.course_selected.clone(),
                referred_by: application.referred_by.clone(),
            })
        })
        .collect()
}
