use crate::identity::login_status::LoginStatus;

use academy_core::{CatalogCourse, catalog};

use serde::Serialize;

/// Public landing view for visitors without an identity
#[derive(Debug, Clone, Serialize)]
pub struct PublicHomepage {
    pub logging_in: bool,
    pub courses: Vec<CatalogCourse>,
}

impl PublicHomepage {
    pub fn new(status: LoginStatus) -> Self {
        Self {
            logging_in: status == LoginStatus::LoggingIn,
            courses: catalog(),
        }
    }
}
