use pretty_assertions::assert_eq;
use revbot_database_interface::DatabaseError;
use revbot_models::{TeamMember, User};

use crate::testcase::{db_test_case, seed_team};

#[tokio::test]
async fn upsert_into_unknown_team() {
    db_test_case("user_upsert_unknown_team", |db| async move {
        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.users_upsert(
                "backend",
                &TeamMember {
                    id: "u1".into(),
                    username: "Alice".into(),
                    is_active: true,
                }
            )
            .await,
            Err(DatabaseError::UnknownTeam(_))
        ));
        tx.rollback().await?;

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn upsert_moves_user() {
    db_test_case("user_upsert_moves_user", |db| async move {
        seed_team(&*db, "backend", &[("u1", true), ("u2", true)]).await?;

        let mut tx = db.begin().await?;
        tx.teams_create("frontend").await?;
        tx.users_upsert(
            "frontend",
            &TeamMember {
                id: "u1".into(),
                username: "Alice".into(),
                is_active: false,
            },
        )
        .await?;
        tx.commit().await?;

        assert_eq!(
            db.users_get("u1").await?,
            Some(User {
                id: "u1".into(),
                username: "Alice".into(),
                team_name: "frontend".into(),
                is_active: false
            })
        );
        assert_eq!(db.teams_get_expect("backend").await?.members.len(), 1);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn set_is_active() {
    db_test_case("user_set_is_active", |db| async move {
        assert!(matches!(
            db.users_set_is_active("u1", false).await,
            Err(DatabaseError::UnknownUser(_))
        ));

        seed_team(&*db, "backend", &[("u1", true)]).await?;

        let user = db.users_set_is_active("u1", false).await?;
        assert!(!user.is_active);
        assert_eq!(user.team_name, "backend");

        // Same value twice is fine.
        let user = db.users_set_is_active("u1", false).await?;
        assert!(!user.is_active);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_active_team_members() {
    db_test_case("user_list_active_team_members", |db| async move {
        seed_team(
            &*db,
            "backend",
            &[("u3", true), ("u1", true), ("u2", true), ("u4", false)],
        )
        .await?;
        seed_team(&*db, "frontend", &[("u5", true)]).await?;

        assert_eq!(
            db.users_list_active_team_members("backend", "u1").await?,
            vec!["u2".to_string(), "u3".to_string()]
        );
        assert_eq!(
            db.users_list_active_team_members("unknown", "u1").await?,
            Vec::<String>::new()
        );

        let mut tx = db.begin().await?;
        assert_eq!(tx.users_get_team("u5").await?, "frontend");
        assert!(matches!(
            tx.users_get_team("u9").await,
            Err(DatabaseError::UnknownUser(_))
        ));
        tx.rollback().await?;

        Ok(())
    })
    .await;
}
