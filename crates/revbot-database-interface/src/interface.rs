use async_trait::async_trait;
use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, Team, User};

use crate::{DatabaseError, DbTransaction, Result};

/// Store entrypoint.
///
/// Methods on this trait run outside of any transaction. Multi-step operations
/// go through [`DbService::begin`] and the returned [`DbTransaction`].
#[async_trait]
pub trait DbService: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn DbTransaction>>;
    async fn health_check(&self) -> Result<()>;

    async fn users_get(&self, user_id: &str) -> Result<Option<User>>;
    async fn users_get_expect(&self, user_id: &str) -> Result<User> {
        self.users_get(user_id)
            .await?
            .ok_or_else(|| DatabaseError::UnknownUser(user_id.into()))
    }
    async fn users_set_is_active(&self, user_id: &str, value: bool) -> Result<User>;
    async fn users_list_active_team_members(
        &self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>>;

    async fn teams_get(&self, team_name: &str) -> Result<Option<Team>>;
    async fn teams_get_expect(&self, team_name: &str) -> Result<Team> {
        self.teams_get(team_name)
            .await?
            .ok_or_else(|| DatabaseError::UnknownTeam(team_name.into()))
    }

    async fn pull_requests_get(&self, pull_request_id: &str) -> Result<Option<PullRequest>>;
    async fn pull_requests_list_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>>;

    async fn reviewers_count_by_reviewer(&self) -> Result<Vec<ReviewerStat>>;
}
