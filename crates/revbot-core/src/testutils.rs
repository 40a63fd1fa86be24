//! Store wrapper losing races on purpose.
//!
//! The memory driver serializes transactions, so the outcomes of a
//! concurrent writer are replayed here from inside a single transaction.

use async_trait::async_trait;
use revbot_database_interface::{DatabaseError, DbService, DbTransaction, Result};
use revbot_database_memory::MemoryDb;
use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, Team, TeamMember, User};
use time::OffsetDateTime;

use crate::{context::tests::CoreContextTest, CoreContext};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Race {
    /// Another merge committed between the read and the update.
    MergeAlreadyCommitted,
    /// The replaced edge vanished before the update.
    ReplaceMatchesNothing,
    /// Another reassignment picked the same reviewer first.
    ReplaceConflicts,
}

pub(crate) struct RacingDb<'a> {
    inner: &'a MemoryDb,
    race: Race,
}

impl<'a> RacingDb<'a> {
    pub fn new(inner: &'a MemoryDb, race: Race) -> Self {
        Self { inner, race }
    }

    pub fn context(&'a self, ctx: &'a CoreContextTest) -> CoreContext<'a> {
        CoreContext {
            config: &ctx.config,
            core_module: &ctx.core_module,
            db_service: self,
            random_service: &ctx.random_service,
        }
    }
}

#[async_trait]
impl DbService for RacingDb<'_> {
    async fn begin(&self) -> Result<Box<dyn DbTransaction>> {
        Ok(Box::new(RacingTransaction {
            inner: self.inner.begin().await?,
            race: self.race,
        }))
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }

    async fn users_get(&self, user_id: &str) -> Result<Option<User>> {
        self.inner.users_get(user_id).await
    }

    async fn users_set_is_active(&self, user_id: &str, value: bool) -> Result<User> {
        self.inner.users_set_is_active(user_id, value).await
    }

    async fn users_list_active_team_members(
        &self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        self.inner
            .users_list_active_team_members(team_name, exclude_user_id)
            .await
    }

    async fn teams_get(&self, team_name: &str) -> Result<Option<Team>> {
        self.inner.teams_get(team_name).await
    }

    async fn pull_requests_get(&self, pull_request_id: &str) -> Result<Option<PullRequest>> {
        self.inner.pull_requests_get(pull_request_id).await
    }

    async fn pull_requests_list_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        self.inner.pull_requests_list_by_reviewer(reviewer_id).await
    }

    async fn reviewers_count_by_reviewer(&self) -> Result<Vec<ReviewerStat>> {
        self.inner.reviewers_count_by_reviewer().await
    }
}

struct RacingTransaction {
    inner: Box<dyn DbTransaction>,
    race: Race,
}

#[async_trait]
impl DbTransaction for RacingTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.inner.rollback().await
    }

    async fn teams_create(&mut self, team_name: &str) -> Result<()> {
        self.inner.teams_create(team_name).await
    }

    async fn users_upsert(&mut self, team_name: &str, member: &TeamMember) -> Result<()> {
        self.inner.users_upsert(team_name, member).await
    }

    async fn users_get_team(&mut self, user_id: &str) -> Result<String> {
        self.inner.users_get_team(user_id).await
    }

    async fn users_list_active_team_members(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        self.inner
            .users_list_active_team_members(team_name, exclude_user_id)
            .await
    }

    async fn users_list_active_team_members_excluding_assigned(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
        pull_request_id: &str,
    ) -> Result<Vec<String>> {
        self.inner
            .users_list_active_team_members_excluding_assigned(
                team_name,
                exclude_user_id,
                pull_request_id,
            )
            .await
    }

    async fn pull_requests_create(&mut self, instance: &PullRequest) -> Result<()> {
        self.inner.pull_requests_create(instance).await
    }

    async fn pull_requests_get_with_reviewers(
        &mut self,
        pull_request_id: &str,
    ) -> Result<Option<PullRequest>> {
        self.inner
            .pull_requests_get_with_reviewers(pull_request_id)
            .await
    }

    async fn pull_requests_set_merged(
        &mut self,
        pull_request_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<bool> {
        match self.race {
            Race::MergeAlreadyCommitted => {
                // The other writer's merge lands, ours matches nothing.
                self.inner
                    .pull_requests_set_merged(pull_request_id, merged_at)
                    .await?;
                Ok(false)
            }
            _ => {
                self.inner
                    .pull_requests_set_merged(pull_request_id, merged_at)
                    .await
            }
        }
    }

    async fn reviewers_add(
        &mut self,
        pull_request_id: &str,
        reviewer_ids: &[String],
    ) -> Result<()> {
        self.inner.reviewers_add(pull_request_id, reviewer_ids).await
    }

    async fn reviewers_replace(
        &mut self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<bool> {
        match self.race {
            Race::ReplaceMatchesNothing => Ok(false),
            Race::ReplaceConflicts => Err(DatabaseError::ReviewerAlreadyAssigned(
                pull_request_id.into(),
                new_reviewer_id.into(),
            )),
            Race::MergeAlreadyCommitted => {
                self.inner
                    .reviewers_replace(pull_request_id, old_reviewer_id, new_reviewer_id)
                    .await
            }
        }
    }
}
