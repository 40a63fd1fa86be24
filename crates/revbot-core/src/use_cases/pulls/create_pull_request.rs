use async_trait::async_trait;
use revbot_database_interface::DatabaseErrorKind;
use revbot_models::{PullRequest, PullRequestShort, PullRequestStatus};
use shaku::{Component, Interface};

use crate::{utils::now_utc, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreatePullRequestInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, input: PullRequestShort)
        -> Result<PullRequest>;
}

#[derive(Component)]
#[shaku(interface = CreatePullRequestInterface)]
pub(crate) struct CreatePullRequest;

#[async_trait]
impl CreatePullRequestInterface for CreatePullRequest {
    #[tracing::instrument(skip(self, ctx), fields(pull_request_id = %input.id), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        input: PullRequestShort,
    ) -> Result<PullRequest> {
        let mut tx = ctx.db_service.begin().await?;

        let team_name = tx.users_get_team(&input.author_id).await.map_err(|e| {
            if e.is_not_found() {
                DomainError::AuthorNotFound(input.author_id.clone())
            } else {
                e.into()
            }
        })?;

        let candidates = tx
            .users_list_active_team_members(&team_name, &input.author_id)
            .await?;
        let reviewers = self.select_reviewers(ctx, candidates);

        // Incoming status is ignored, a new pull request is always open.
        let pull_request = PullRequest {
            id: input.id,
            name: input.name,
            author_id: input.author_id,
            status: PullRequestStatus::Open,
            assigned_reviewers: Vec::new(),
            created_at: now_utc(),
            merged_at: None,
        };

        tx.pull_requests_create(&pull_request)
            .await
            .map_err(|e| match e.kind() {
                DatabaseErrorKind::AlreadyExists => {
                    DomainError::PullRequestAlreadyExists(pull_request.id.clone())
                }
                DatabaseErrorKind::NotFound => {
                    DomainError::AuthorNotFound(pull_request.author_id.clone())
                }
                DatabaseErrorKind::Internal => e.into(),
            })?;
        tx.reviewers_add(&pull_request.id, &reviewers).await?;
        tx.commit().await?;

        Ok(PullRequest {
            assigned_reviewers: reviewers,
            ..pull_request
        })
    }
}

impl CreatePullRequest {
    /// Uniform draw without replacement when the pool is larger than needed.
    fn select_reviewers(&self, ctx: &CoreContext<'_>, mut candidates: Vec<String>) -> Vec<String> {
        let count = ctx.config.reviewers_per_pull_request;
        if candidates.len() > count {
            ctx.random_service.shuffle(&mut candidates);
            candidates.truncate(count);
        }

        candidates
    }
}
