use crate::Principal;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub principal: Principal,
    pub name: String,
    /// Course ids the student is enrolled in
    pub enrolled_courses: Vec<String>,
}

impl Student {
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrolled_courses.iter().any(|id| id == course_id)
    }
}
