use academy_core::Principal;

use std::fmt;

/// Named queries the front-end issues against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryName {
    CurrentUserProfile,
    UserProfile,
    Courses,
    EnrolledCourses,
    Students,
    Marketers,
    MarketerStats,
    StudentApplications,
    StudentApplication,
    CallerUserRole,
    IsCallerAdmin,
}

impl QueryName {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryName::CurrentUserProfile => "currentUserProfile",
            QueryName::UserProfile => "userProfile",
            QueryName::Courses => "courses",
            QueryName::EnrolledCourses => "enrolledCourses",
            QueryName::Students => "students",
            QueryName::Marketers => "marketers",
            QueryName::MarketerStats => "marketerStats",
            QueryName::StudentApplications => "studentApplications",
            QueryName::StudentApplication => "studentApplication",
            QueryName::CallerUserRole => "callerUserRole",
            QueryName::IsCallerAdmin => "isCallerAdmin",
        }
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cache key. `scope` is the identity the data was fetched for, so entries
/// from one identity are never served to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: Option<Principal>,
    pub name: QueryName,
    pub arg: Option<String>,
}

impl QueryKey {
    pub fn new(scope: Option<&Principal>, name: QueryName) -> Self {
        Self {
            scope: scope.cloned(),
            name,
            arg: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.as_ref().map(Principal::as_str).unwrap_or("anonymous");
        match &self.arg {
            Some(arg) => write!(f, "[{scope}] {}({arg})", self.name),
            None => write!(f, "[{scope}] {}", self.name),
        }
    }
}
