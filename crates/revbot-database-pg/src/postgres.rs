use async_trait::async_trait;
use revbot_database_interface::{DbService, DbTransaction, Result};
use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, Team, User};
use sqlx::{pool::PoolConnection, PgPool, Postgres};

use crate::{errors::implementation_error, queries, transaction::PostgresTransaction};

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(implementation_error)
    }
}

#[async_trait]
impl DbService for PostgresDb {
    async fn begin(&self) -> Result<Box<dyn DbTransaction>> {
        let tx = self.pool.begin().await.map_err(implementation_error)?;
        Ok(Box::new(PostgresTransaction::new(tx)))
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(implementation_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn users_get(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = self.acquire().await?;
        queries::users_get(&mut conn, user_id).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn users_set_is_active(&self, user_id: &str, value: bool) -> Result<User> {
        let mut conn = self.acquire().await?;
        queries::users_set_is_active(&mut conn, user_id, value).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn users_list_active_team_members(
        &self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        let mut conn = self.acquire().await?;
        queries::users_list_active_team_members(&mut conn, team_name, exclude_user_id, None).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn teams_get(&self, team_name: &str) -> Result<Option<Team>> {
        let mut conn = self.acquire().await?;
        queries::teams_get(&mut conn, team_name).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_requests_get(&self, pull_request_id: &str) -> Result<Option<PullRequest>> {
        let mut conn = self.acquire().await?;
        queries::pull_requests_get(&mut conn, pull_request_id).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_requests_list_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        let mut conn = self.acquire().await?;
        queries::pull_requests_list_by_reviewer(&mut conn, reviewer_id).await
    }

    #[tracing::instrument(skip(self), ret)]
    async fn reviewers_count_by_reviewer(&self) -> Result<Vec<ReviewerStat>> {
        let mut conn = self.acquire().await?;
        queries::reviewers_count_by_reviewer(&mut conn).await
    }
}
