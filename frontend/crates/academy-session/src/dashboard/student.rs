use academy_core::{Course, course_image};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: &'static str,
    pub enrolled: bool,
}

impl CourseCard {
    fn new(course: &Course, enrolled: bool) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            description: course.description.clone(),
            image: course_image(&course.id),
            enrolled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub name: String,
    pub courses: Vec<CourseCard>,
    pub enrolled_courses: Vec<CourseCard>,
    pub enrolled_count: usize,
    /// Courses not yet enrolled in
    pub available_count: usize,
}

impl StudentDashboard {
    pub fn build(name: &str, courses: &[Course], enrolled: &[Course]) -> Self {
        let is_enrolled = |id: &str| enrolled.iter().any(|c| c.id == id);

        Self {
            name: name.to_string(),
            courses: courses
                .iter()
                .map(|c| CourseCard::new(c, is_enrolled(&c.id)))
                .collect(),
            enrolled_courses: enrolled.iter().map(|c| CourseCard::new(c, true)).collect(),
            enrolled_count: enrolled.len(),
            available_count: courses.len().saturating_sub(enrolled.len()),
        }
    }
}
