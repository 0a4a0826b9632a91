use academy_core::MarketerStats;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketerDashboard {
    pub name: String,
    pub referral_count: u64,
}

impl From<MarketerStats> for MarketerDashboard {
    fn from(stats: MarketerStats) -> Self {
        Self {
            name: stats.name,
            referral_count: stats.referral_count,
        }
    }
}
