use pretty_assertions::assert_eq;
use revbot_database_interface::DatabaseError;
use revbot_models::{Team, TeamMember};

use crate::testcase::{db_test_case, seed_team};

#[tokio::test]
async fn create_and_get() {
    db_test_case("team_create_and_get", |db| async move {
        assert_eq!(db.teams_get("backend").await?, None);
        assert!(matches!(
            db.teams_get_expect("backend").await,
            Err(DatabaseError::UnknownTeam(_))
        ));

        seed_team(&*db, "backend", &[("u2", false), ("u1", true)]).await?;

        assert_eq!(
            db.teams_get("backend").await?,
            Some(Team {
                name: "backend".into(),
                members: vec![
                    TeamMember {
                        id: "u1".into(),
                        username: "u1-name".into(),
                        is_active: true
                    },
                    TeamMember {
                        id: "u2".into(),
                        username: "u2-name".into(),
                        is_active: false
                    },
                ]
            })
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn create_twice() {
    db_test_case("team_create_twice", |db| async move {
        seed_team(&*db, "backend", &[]).await?;

        let mut tx = db.begin().await?;
        assert!(matches!(
            tx.teams_create("backend").await,
            Err(DatabaseError::TeamAlreadyExists(_))
        ));
        tx.rollback().await?;

        assert_eq!(
            db.teams_get("backend").await?,
            Some(Team {
                name: "backend".into(),
                members: vec![]
            })
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn uncommitted_team_is_discarded() {
    db_test_case("team_uncommitted", |db| async move {
        {
            let mut tx = db.begin().await?;
            tx.teams_create("backend").await?;
            tx.users_upsert(
                "backend",
                &TeamMember {
                    id: "u1".into(),
                    username: "Alice".into(),
                    is_active: true,
                },
            )
            .await?;
        }

        assert_eq!(db.teams_get("backend").await?, None);
        assert_eq!(db.users_get("u1").await?, None);

        Ok(())
    })
    .await;
}
