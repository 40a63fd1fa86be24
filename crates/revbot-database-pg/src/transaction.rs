use async_trait::async_trait;
use revbot_database_interface::{DatabaseError, DbTransaction, Result};
use revbot_models::{PullRequest, TeamMember};
use sqlx::{Postgres, Transaction};
use time::OffsetDateTime;

use crate::{errors::implementation_error, queries};

/// Wraps a sqlx transaction, which rolls back on drop.
pub(crate) struct PostgresTransaction {
    tx: Transaction<'static, Postgres>,
}

impl PostgresTransaction {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl DbTransaction for PostgresTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(implementation_error)
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn teams_create(&mut self, team_name: &str) -> Result<()> {
        queries::teams_create(&mut self.tx, team_name).await
    }

    #[tracing::instrument(skip(self))]
    async fn users_upsert(&mut self, team_name: &str, member: &TeamMember) -> Result<()> {
        queries::users_upsert(&mut self.tx, team_name, member).await
    }

    async fn users_get_team(&mut self, user_id: &str) -> Result<String> {
        queries::users_get(&mut self.tx, user_id)
            .await?
            .map(|u| u.team_name)
            .ok_or_else(|| DatabaseError::UnknownUser(user_id.into()))
    }

    async fn users_list_active_team_members(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        queries::users_list_active_team_members(&mut self.tx, team_name, exclude_user_id, None)
            .await
    }

    async fn users_list_active_team_members_excluding_assigned(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
        pull_request_id: &str,
    ) -> Result<Vec<String>> {
        queries::users_list_active_team_members(
            &mut self.tx,
            team_name,
            exclude_user_id,
            Some(pull_request_id),
        )
        .await
    }

    #[tracing::instrument(skip(self, instance), fields(pull_request_id = %instance.id))]
    async fn pull_requests_create(&mut self, instance: &PullRequest) -> Result<()> {
        queries::pull_requests_create(&mut self.tx, instance).await
    }

    async fn pull_requests_get_with_reviewers(
        &mut self,
        pull_request_id: &str,
    ) -> Result<Option<PullRequest>> {
        queries::pull_requests_get(&mut self.tx, pull_request_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_set_merged(
        &mut self,
        pull_request_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<bool> {
        queries::pull_requests_set_merged(&mut self.tx, pull_request_id, merged_at).await
    }

    #[tracing::instrument(skip(self))]
    async fn reviewers_add(
        &mut self,
        pull_request_id: &str,
        reviewer_ids: &[String],
    ) -> Result<()> {
        queries::reviewers_add(&mut self.tx, pull_request_id, reviewer_ids).await
    }

    #[tracing::instrument(skip(self))]
    async fn reviewers_replace(
        &mut self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<bool> {
        queries::reviewers_replace(&mut self.tx, pull_request_id, old_reviewer_id, new_reviewer_id)
            .await
    }
}
