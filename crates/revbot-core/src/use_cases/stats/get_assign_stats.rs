use async_trait::async_trait;
use revbot_models::ReviewerStat;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetAssignStatsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<ReviewerStat>>;
}

#[derive(Component)]
#[shaku(interface = GetAssignStatsInterface)]
pub(crate) struct GetAssignStats;

#[async_trait]
impl GetAssignStatsInterface for GetAssignStats {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<ReviewerStat>> {
        ctx.db_service
            .reviewers_count_by_reviewer()
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use maplit::hashmap;
    use pretty_assertions::assert_eq;
    use revbot_database_interface::DbService;
    use revbot_models::{PullRequestShort, TeamMember};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::pulls::{
            create_pull_request::CreatePullRequest, merge_pull_request::MergePullRequest,
            reassign_reviewer::ReassignReviewer, CreatePullRequestInterface,
            MergePullRequestInterface, ReassignReviewerInterface,
        },
    };

    async fn stats(ctx: &CoreContextTest) -> HashMap<String, u64> {
        GetAssignStats
            .run(&ctx.as_context())
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.reviewer_id, s.assign_stat))
            .collect()
    }

    #[tokio::test]
    async fn empty() {
        let ctx = CoreContextTest::new();
        assert_eq!(stats(&ctx).await, HashMap::new());
    }

    #[tokio::test]
    async fn follows_live_edges() {
        let ctx = CoreContextTest::new();
        ctx.add_team("backend", &[("a", true), ("b", true), ("c", true)])
            .await;
        ctx.add_team("frontend", &[("x", true), ("y", true)]).await;

        for (id, author_id) in [("p1", "a"), ("p2", "b"), ("p3", "x")] {
            CreatePullRequest
                .run(
                    &ctx.as_context(),
                    PullRequestShort {
                        id: id.into(),
                        name: id.into(),
                        author_id: author_id.into(),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        assert_eq!(
            stats(&ctx).await,
            hashmap! {
                "a".to_string() => 1,
                "b".to_string() => 1,
                "c".to_string() => 2,
                "y".to_string() => 1,
            }
        );

        // Merge keeps edges, reassignment moves them.
        MergePullRequest
            .run(&ctx.as_context(), "p3")
            .await
            .unwrap();
        let mut tx = ctx.db_service.begin().await.unwrap();
        tx.users_upsert(
            "backend",
            &TeamMember {
                id: "d".into(),
                username: "User d".into(),
                is_active: true,
            },
        )
        .await
        .unwrap();
        tx.commit().await.unwrap();

        let reassigned = ReassignReviewer
            .run(&ctx.as_context(), "p1", "c")
            .await
            .unwrap();
        assert_eq!(reassigned.replaced_by, "d");

        assert_eq!(
            stats(&ctx).await,
            hashmap! {
                "a".to_string() => 1,
                "b".to_string() => 1,
                "c".to_string() => 1,
                "d".to_string() => 1,
                "y".to_string() => 1,
            }
        );
    }
}
