use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    /// Never fetched, or dropped by a cache clear
    Idle,
    Fetching,
    Success,
    Error,
}
