use crate::Principal;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketer {
    pub principal: Principal,
    pub name: String,
    pub referral_count: u64,
}
