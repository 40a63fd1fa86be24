use pretty_assertions::assert_eq;
use revbot_database_interface::DatabaseError;
use revbot_models::{PullRequest, ReviewerStat};

use crate::testcase::{db_test_case, seed_team};

async fn seed_pull_request(
    db: &dyn revbot_database_interface::DbService,
    id: &str,
    author_id: &str,
    reviewers: &[&str],
) -> revbot_database_interface::Result<()> {
    let mut tx = db.begin().await?;
    tx.pull_requests_create(&PullRequest {
        id: id.into(),
        name: id.into(),
        author_id: author_id.into(),
        ..Default::default()
    })
    .await?;
    let reviewers: Vec<String> = reviewers.iter().map(|r| (*r).into()).collect();
    tx.reviewers_add(id, &reviewers).await?;
    tx.commit().await
}

#[tokio::test]
async fn add() {
    db_test_case("reviewer_add", |db| async move {
        seed_team(&*db, "backend", &[("u1", true), ("u2", true), ("u3", true)]).await?;

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.reviewers_add("pr-1", &["u2".into()]).await,
            Err(DatabaseError::UnknownPullRequest(_))
        ));
        tx.rollback().await?;

        seed_pull_request(&*db, "pr-1", "u1", &["u3", "u2"]).await?;

        // Insertion order is kept.
        assert_eq!(
            db.pull_requests_get("pr-1").await?.unwrap().assigned_reviewers,
            vec!["u3".to_string(), "u2".to_string()]
        );

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.reviewers_add("pr-1", &["u2".into()]).await,
            Err(DatabaseError::ReviewerAlreadyAssigned(_, _))
        ));
        tx.rollback().await?;

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.reviewers_add("pr-1", &["u9".into()]).await,
            Err(DatabaseError::UnknownUser(_))
        ));
        tx.rollback().await?;

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn replace() {
    db_test_case("reviewer_replace", |db| async move {
        seed_team(
            &*db,
            "backend",
            &[("u1", true), ("u2", true), ("u3", true), ("u4", true)],
        )
        .await?;
        seed_pull_request(&*db, "pr-1", "u1", &["u2", "u3"]).await?;

        let mut tx = db.begin().await?;
        assert!(!tx.reviewers_replace("pr-1", "u4", "u1").await?);
        assert!(tx.reviewers_replace("pr-1", "u2", "u4").await?);
        tx.commit().await?;

        // Position of the replaced reviewer is kept.
        assert_eq!(
            db.pull_requests_get("pr-1").await?.unwrap().assigned_reviewers,
            vec!["u4".to_string(), "u3".to_string()]
        );

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.reviewers_replace("pr-1", "u4", "u3").await,
            Err(DatabaseError::ReviewerAlreadyAssigned(_, _))
        ));
        tx.rollback().await?;

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn active_members_excluding_assigned() {
    db_test_case("reviewer_active_members_excluding_assigned", |db| async move {
        seed_team(
            &*db,
            "backend",
            &[("u1", true), ("u2", true), ("u3", true), ("u4", false), ("u5", true)],
        )
        .await?;
        seed_pull_request(&*db, "pr-1", "u1", &["u2"]).await?;

        let mut tx = db.begin().await?;
        assert_eq!(
            tx.users_list_active_team_members_excluding_assigned("backend", "u1", "pr-1")
                .await?,
            vec!["u3".to_string(), "u5".to_string()]
        );
        assert_eq!(
            tx.users_list_active_team_members("backend", "u1").await?,
            vec!["u2".to_string(), "u3".to_string(), "u5".to_string()]
        );
        tx.rollback().await?;

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn count_by_reviewer() {
    db_test_case("reviewer_count_by_reviewer", |db| async move {
        assert_eq!(
            db.reviewers_count_by_reviewer().await?,
            Vec::<ReviewerStat>::new()
        );

        seed_team(&*db, "backend", &[("u1", true), ("u2", true), ("u3", true)]).await?;
        seed_pull_request(&*db, "pr-1", "u1", &["u3", "u2"]).await?;
        seed_pull_request(&*db, "pr-2", "u1", &["u3"]).await?;

        assert_eq!(
            db.reviewers_count_by_reviewer().await?,
            vec![
                ReviewerStat {
                    reviewer_id: "u2".into(),
                    assign_stat: 1
                },
                ReviewerStat {
                    reviewer_id: "u3".into(),
                    assign_stat: 2
                },
            ]
        );

        Ok(())
    })
    .await;
}
