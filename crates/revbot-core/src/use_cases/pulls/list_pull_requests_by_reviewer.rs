use async_trait::async_trait;
use revbot_models::PullRequestShort;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListPullRequestsByReviewerInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>>;
}

#[derive(Component)]
#[shaku(interface = ListPullRequestsByReviewerInterface)]
pub(crate) struct ListPullRequestsByReviewer;

#[async_trait]
impl ListPullRequestsByReviewerInterface for ListPullRequestsByReviewer {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        // Unknown users simply have nothing to review.
        ctx.db_service
            .pull_requests_list_by_reviewer(reviewer_id)
            .await
            .map_err(Into::into)
    }
}
