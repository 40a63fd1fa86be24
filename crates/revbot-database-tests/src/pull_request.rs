use pretty_assertions::assert_eq;
use revbot_database_interface::DatabaseError;
use revbot_models::{PullRequest, PullRequestShort, PullRequestStatus};
use time::macros::datetime;

use crate::testcase::{db_test_case, seed_team};

fn sample(id: &str, author_id: &str) -> PullRequest {
    PullRequest {
        id: id.into(),
        name: format!("{id} title"),
        author_id: author_id.into(),
        created_at: datetime!(2024-01-05 12:00:00 UTC),
        ..Default::default()
    }
}

#[tokio::test]
async fn create() {
    db_test_case("pull_request_create", |db| async move {
        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.pull_requests_create(&sample("pr-1", "u1")).await,
            Err(DatabaseError::UnknownUser(_))
        ));
        tx.rollback().await?;

        seed_team(&*db, "backend", &[("u1", true), ("u2", true)]).await?;

        let mut tx = db.begin().await?;
        tx.pull_requests_create(&sample("pr-1", "u1")).await?;
        tx.reviewers_add("pr-1", &["u2".into()]).await?;
        tx.commit().await?;

        assert_eq!(
            db.pull_requests_get("pr-1").await?,
            Some(PullRequest {
                assigned_reviewers: vec!["u2".into()],
                ..sample("pr-1", "u1")
            })
        );

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.pull_requests_create(&sample("pr-1", "u2")).await,
            Err(DatabaseError::PullRequestAlreadyExists(_))
        ));
        tx.rollback().await?;

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn set_merged() {
    db_test_case("pull_request_set_merged", |db| async move {
        seed_team(&*db, "backend", &[("u1", true)]).await?;

        let mut tx = db.begin().await?;
        assert!(
            !tx.pull_requests_set_merged("pr-1", datetime!(2024-01-06 08:00:00 UTC))
                .await?
        );
        tx.pull_requests_create(&sample("pr-1", "u1")).await?;
        assert!(
            tx.pull_requests_set_merged("pr-1", datetime!(2024-01-06 08:00:00 UTC))
                .await?
        );
        // Already merged, nothing matches anymore.
        assert!(
            !tx.pull_requests_set_merged("pr-1", datetime!(2024-01-07 08:00:00 UTC))
                .await?
        );
        tx.commit().await?;

        let pr = db.pull_requests_get("pr-1").await?.unwrap();
        assert_eq!(pr.status, PullRequestStatus::Merged);
        assert_eq!(pr.merged_at, Some(datetime!(2024-01-06 08:00:00 UTC)));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_by_reviewer() {
    db_test_case("pull_request_list_by_reviewer", |db| async move {
        seed_team(&*db, "backend", &[("u1", true), ("u2", true), ("u3", true)]).await?;

        let mut tx = db.begin().await?;
        for id in ["pr-2", "pr-1", "pr-3"] {
            tx.pull_requests_create(&sample(id, "u1")).await?;
        }
        tx.reviewers_add("pr-2", &["u2".into(), "u3".into()]).await?;
        tx.reviewers_add("pr-1", &["u2".into()]).await?;
        tx.reviewers_add("pr-3", &["u3".into()]).await?;
        tx.pull_requests_set_merged("pr-1", datetime!(2024-01-06 08:00:00 UTC))
            .await?;
        tx.commit().await?;

        assert_eq!(
            db.pull_requests_list_by_reviewer("u2").await?,
            vec![
                PullRequestShort {
                    id: "pr-1".into(),
                    name: "pr-1 title".into(),
                    author_id: "u1".into(),
                    status: PullRequestStatus::Merged,
                },
                PullRequestShort {
                    id: "pr-2".into(),
                    name: "pr-2 title".into(),
                    author_id: "u1".into(),
                    status: PullRequestStatus::Open,
                },
            ]
        );
        assert_eq!(
            db.pull_requests_list_by_reviewer("u1").await?,
            Vec::<PullRequestShort>::new()
        );
        assert_eq!(
            db.pull_requests_list_by_reviewer("nobody").await?,
            Vec::<PullRequestShort>::new()
        );

        Ok(())
    })
    .await;
}
