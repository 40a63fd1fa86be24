use async_trait::async_trait;
use revbot_models::{PullRequest, TeamMember};
use time::OffsetDateTime;

use crate::{DatabaseError, Result};

/// Scoped transaction.
///
/// Every write and every read that informs a write happens through this handle.
/// Dropping it without calling [`DbTransaction::commit`] rolls everything back.
#[async_trait]
pub trait DbTransaction: Send {
    async fn commit(self: Box<Self>) -> Result<()>;
    async fn rollback(self: Box<Self>) -> Result<()>;

    async fn teams_create(&mut self, team_name: &str) -> Result<()>;
    async fn users_upsert(&mut self, team_name: &str, member: &TeamMember) -> Result<()>;
    async fn users_get_team(&mut self, user_id: &str) -> Result<String>;

    /// Active members of a team, minus one user.
    async fn users_list_active_team_members(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>>;

    /// Active members of a team, minus one user and minus every reviewer
    /// currently assigned to the pull request.
    async fn users_list_active_team_members_excluding_assigned(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
        pull_request_id: &str,
    ) -> Result<Vec<String>>;

    async fn pull_requests_create(&mut self, instance: &PullRequest) -> Result<()>;
    async fn pull_requests_get_with_reviewers(
        &mut self,
        pull_request_id: &str,
    ) -> Result<Option<PullRequest>>;
    async fn pull_requests_get_with_reviewers_expect(
        &mut self,
        pull_request_id: &str,
    ) -> Result<PullRequest> {
        self.pull_requests_get_with_reviewers(pull_request_id)
            .await?
            .ok_or_else(|| DatabaseError::UnknownPullRequest(pull_request_id.into()))
    }

    /// Returns `false` when no open pull request matched.
    async fn pull_requests_set_merged(
        &mut self,
        pull_request_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<bool>;

    async fn reviewers_add(&mut self, pull_request_id: &str, reviewer_ids: &[String])
        -> Result<()>;

    /// Returns `false` when `old_reviewer_id` is not (or no longer) assigned.
    async fn reviewers_replace(
        &mut self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<bool>;
}
