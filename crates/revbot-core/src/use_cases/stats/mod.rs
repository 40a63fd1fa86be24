pub(crate) mod get_assign_stats;

pub use get_assign_stats::GetAssignStatsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::get_assign_stats::MockGetAssignStatsInterface;
