use crate::{ContactInfo, CoreError, Result as CoreErrorResult, StudentApplication};

use serde::Deserialize;

/// Raw input of the student application form, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    pub student_name: String,
    pub father_name: String,
    pub city: String,
    pub age: String,
    pub contact_number: String,
    pub course_selected: String,
    pub referred_by: String,
}

impl ApplicationForm {
    /// Validate field by field and build the application payload.
    ///
    /// The first invalid field is reported; nothing is submitted.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<StudentApplication> {
        let student_name = self.student_name.trim();
        if student_name.is_empty() {
            return Err(CoreError::validation("Please enter student name"));
        }

        let father_name = self.father_name.trim();
        if father_name.is_empty() {
            return Err(CoreError::validation("Please enter father name"));
        }

        let city = self.city.trim();
        if city.is_empty() {
            return Err(CoreError::validation("Please enter city"));
        }

        let age = self.age.trim();
        match age.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => {}
            _ => return Err(CoreError::validation("Please enter a valid age")),
        }

        let contact_number = self.contact_number.trim();
        if contact_number.is_empty() {
            return Err(CoreError::validation("Please enter contact number"));
        }

        let course_selected = self.course_selected.trim();
        if course_selected.is_empty() {
            return Err(CoreError::validation("Please select a course"));
        }

        let contact_info = ContactInfo {
            father_name: father_name.to_string(),
            city: city.to_string(),
            age: age.to_string(),
            contact_number: contact_number.to_string(),
        }
        .encode()?;

        let referred_by = self.referred_by.trim();

        Ok(StudentApplication {
            name: student_name.to_string(),
            contact_info,
            course_selected: course_selected.to_string(),
            referred_by: (!referred_by.is_empty()).then(|| referred_by.to_string()),
        })
    }
}
