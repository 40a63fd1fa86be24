use serde::{Deserialize, Serialize};

/// Number of pull requests currently assigned to a reviewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReviewerStat {
    pub reviewer_id: String,
    pub assign_stat: u64,
}
