mod pull_request;
mod pull_request_status;
mod reviewer_stat;
mod team;
mod user;

pub use pull_request::{PullRequest, PullRequestShort};
pub use pull_request_status::{PullRequestStatus, PullRequestStatusError};
pub use reviewer_stat::ReviewerStat;
pub use team::{Team, TeamMember};
pub use user::User;
