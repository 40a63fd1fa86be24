use async_trait::async_trait;
use revbot_database_interface::DatabaseErrorKind;
use revbot_models::PullRequest;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

/// Pull request after a reassignment, with the newly assigned reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignedPullRequest {
    pub pull_request: PullRequest,
    pub replaced_by: String,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReassignReviewerInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pull_request_id: &str,
        old_reviewer_id: &str,
    ) -> Result<ReassignedPullRequest>;
}

#[derive(Component)]
#[shaku(interface = ReassignReviewerInterface)]
pub(crate) struct ReassignReviewer;

#[async_trait]
impl ReassignReviewerInterface for ReassignReviewer {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pull_request_id: &str,
        old_reviewer_id: &str,
    ) -> Result<ReassignedPullRequest> {
        let not_reviewer = || DomainError::UserNotReviewer {
            pull_request_id: pull_request_id.into(),
            user_id: old_reviewer_id.into(),
        };

        let mut tx = ctx.db_service.begin().await?;

        let pull_request = tx
            .pull_requests_get_with_reviewers(pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.into()))?;

        if pull_request.status.is_merged() {
            return Err(DomainError::PullRequestAlreadyMerged(
                pull_request_id.into(),
            ));
        }

        if !pull_request.has_reviewer(old_reviewer_id) {
            return Err(not_reviewer());
        }

        // Candidates come from the team of the replaced reviewer, not the author's.
        let team_name = tx.users_get_team(old_reviewer_id).await.map_err(|e| {
            if e.is_not_found() {
                DomainError::UserNotFound(old_reviewer_id.into())
            } else {
                e.into()
            }
        })?;

        let candidates = tx
            .users_list_active_team_members_excluding_assigned(
                &team_name,
                &pull_request.author_id,
                pull_request_id,
            )
            .await?;

        let new_reviewer_id = ctx
            .random_service
            .choose(&candidates)
            .ok_or(DomainError::NotEnoughMembersInTeam { team_name })?;

        // A concurrent reassignment either removed the old edge or took the
        // chosen reviewer first; both surface as a lost race.
        let replaced = tx
            .reviewers_replace(pull_request_id, old_reviewer_id, &new_reviewer_id)
            .await
            .or_else(|e| match e.kind() {
                DatabaseErrorKind::AlreadyExists => Ok(false),
                _ => Err(e),
            })?;
        if !replaced {
            return Err(not_reviewer());
        }

        let pull_request = tx
            .pull_requests_get_with_reviewers(pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.into()))?;

        tx.commit().await?;

        Ok(ReassignedPullRequest {
            pull_request,
            replaced_by: new_reviewer_id,
        })
    }
}
