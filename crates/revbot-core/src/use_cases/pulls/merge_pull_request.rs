use async_trait::async_trait;
use revbot_database_interface::DatabaseError;
use revbot_models::PullRequest;
use shaku::{Component, Interface};

use crate::{utils::now_utc, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait MergePullRequestInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pull_request_id: &str) -> Result<PullRequest>;
}

#[derive(Component)]
#[shaku(interface = MergePullRequestInterface)]
pub(crate) struct MergePullRequest;

#[async_trait]
impl MergePullRequestInterface for MergePullRequest {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pull_request_id: &str) -> Result<PullRequest> {
        let not_found = || DomainError::PullRequestNotFound(pull_request_id.into());

        let mut tx = ctx.db_service.begin().await?;
        let pull_request = tx
            .pull_requests_get_with_reviewers(pull_request_id)
            .await?
            .ok_or_else(not_found)?;

        if pull_request.status.is_merged() {
            tx.rollback().await?;
            return Ok(pull_request);
        }

        let updated = tx
            .pull_requests_set_merged(pull_request_id, now_utc())
            .await?;

        let pull_request = tx
            .pull_requests_get_with_reviewers(pull_request_id)
            .await?
            .ok_or_else(not_found)?;

        // A concurrent merge may have committed between the read and the update.
        if !updated && !pull_request.status.is_merged() {
            return Err(DatabaseError::ImplementationError {
                source: format!("pull request '{pull_request_id}' could not be merged").into(),
            }
            .into());
        }

        tx.commit().await?;

        Ok(pull_request)
    }
}
