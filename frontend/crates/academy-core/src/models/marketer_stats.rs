use serde::{Deserialize, Serialize};

const UNKNOWN_MARKETER_NAME: &str = "Unknown";

/// Referral statistics for one marketer.
///
/// The backend answers with a `(name, count)` tuple; this decodes from and
/// encodes to that shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct MarketerStats {
    pub name: String,
    pub referral_count: u64,
}

impl MarketerStats {
    /// Placeholder shown while stats are missing
    pub fn unknown() -> Self {
        Self {
            name: String::from(UNKNOWN_MARKETER_NAME),
            referral_count: 0,
        }
    }
}

impl From<(String, u64)> for MarketerStats {
    fn from((name, referral_count): (String, u64)) -> Self {
        Self {
            name,
            referral_count,
        }
    }
}

impl From<MarketerStats> for (String, u64) {
    fn from(stats: MarketerStats) -> Self {
        (stats.name, stats.referral_count)
    }
}
