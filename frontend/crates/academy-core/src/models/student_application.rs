use crate::ContactInfo;

use serde::{Deserialize, Serialize};

/// Admission application submitted from the student form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentApplication {
    pub name: String,
    /// JSON-encoded [`ContactInfo`]
    pub contact_info: String,
    pub course_selected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,
}

impl StudentApplication {
    pub fn contact(&self) -> ContactInfo {
        ContactInfo::parse(&self.contact_info)
    }
}
