//! Reviewer assignment engine.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod random;
#[cfg(test)]
mod testutils;
pub mod use_cases;
mod utils;

pub use context::CoreContext;
pub use errors::{DomainError, ErrorKind, Result};
pub use random::{ChaChaRandomService, RandomService};
use shaku::module;
use use_cases::{
    pulls::{
        create_pull_request::CreatePullRequest,
        list_pull_requests_by_reviewer::ListPullRequestsByReviewer,
        merge_pull_request::MergePullRequest, reassign_reviewer::ReassignReviewer,
    },
    stats::get_assign_stats::GetAssignStats,
    teams::{add_team::AddTeam, get_team::GetTeam, set_user_is_active::SetUserIsActive},
};

module! {
    pub CoreModule {
        components = [
            CreatePullRequest, ReassignReviewer, MergePullRequest,
            ListPullRequestsByReviewer, GetAssignStats,
            AddTeam, GetTeam, SetUserIsActive
        ],
        providers = []
    }
}
