//! Queries shared by the pool and transaction paths.

use revbot_database_interface::{DatabaseError, Result};
use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, Team, TeamMember, User};
use sqlx::{PgConnection, Row};
use time::OffsetDateTime;

use crate::{
    errors::{
        implementation_error, wrap_foreign_key_violation, wrap_pull_request_insert,
        wrap_reviewer_write, wrap_unique_violation,
    },
    row::{PullRequestRow, PullRequestShortRow, ReviewerStatRow, UserRow},
};

pub(crate) async fn teams_create(conn: &mut PgConnection, team_name: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO team (team_name)
        VALUES ($1)
    "#,
    )
    .bind(team_name)
    .execute(conn)
    .await
    .map_err(|e| wrap_unique_violation(e, DatabaseError::TeamAlreadyExists(team_name.into())))?;

    Ok(())
}

pub(crate) async fn teams_get(conn: &mut PgConnection, team_name: &str) -> Result<Option<Team>> {
    let exists = sqlx::query(
        r#"
        SELECT team_name
        FROM team
        WHERE team_name = $1
    "#,
    )
    .bind(team_name)
    .fetch_optional(&mut *conn)
    .await
    .map_err(implementation_error)?
    .is_some();

    if !exists {
        return Ok(None);
    }

    let members = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT *
        FROM app_user
        WHERE team_name = $1
        ORDER BY user_id
    "#,
    )
    .bind(team_name)
    .fetch_all(&mut *conn)
    .await
    .map_err(implementation_error)?
    .into_iter()
    .map(|r| TeamMember::from(User::from(r)))
    .collect();

    Ok(Some(Team {
        name: team_name.into(),
        members,
    }))
}

pub(crate) async fn users_get(conn: &mut PgConnection, user_id: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT *
        FROM app_user
        WHERE user_id = $1
    "#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map(|r| r.map(Into::into))
    .map_err(implementation_error)
}

pub(crate) async fn users_upsert(
    conn: &mut PgConnection,
    team_name: &str,
    member: &TeamMember,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO app_user (user_id, username, team_name, is_active)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id)
        DO UPDATE SET
            username = EXCLUDED.username,
            team_name = EXCLUDED.team_name,
            is_active = EXCLUDED.is_active
    "#,
    )
    .bind(&member.id)
    .bind(&member.username)
    .bind(team_name)
    .bind(member.is_active)
    .execute(conn)
    .await
    .map_err(|e| wrap_foreign_key_violation(e, DatabaseError::UnknownTeam(team_name.into())))?;

    Ok(())
}

pub(crate) async fn users_set_is_active(
    conn: &mut PgConnection,
    user_id: &str,
    value: bool,
) -> Result<User> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE app_user
        SET is_active = $2
        WHERE user_id = $1
        RETURNING *
    "#,
    )
    .bind(user_id)
    .bind(value)
    .fetch_optional(conn)
    .await
    .map_err(implementation_error)?
    .map(Into::into)
    .ok_or_else(|| DatabaseError::UnknownUser(user_id.into()))
}

pub(crate) async fn users_list_active_team_members(
    conn: &mut PgConnection,
    team_name: &str,
    exclude_user_id: &str,
    pull_request_id: Option<&str>,
) -> Result<Vec<String>> {
    let rows = sqlx::query(
        r#"
        SELECT user_id
        FROM app_user
        WHERE team_name = $1
        AND is_active = TRUE
        AND user_id <> $2
        AND ($3::VARCHAR IS NULL OR user_id NOT IN (
            SELECT reviewer_id
            FROM reviewer
            WHERE pull_request_id = $3
        ))
        ORDER BY user_id
    "#,
    )
    .bind(team_name)
    .bind(exclude_user_id)
    .bind(pull_request_id)
    .fetch_all(conn)
    .await
    .map_err(implementation_error)?;

    rows.iter()
        .map(|r| r.try_get("user_id"))
        .collect::<core::result::Result<_, _>>()
        .map_err(implementation_error)
}

pub(crate) async fn pull_requests_create(
    conn: &mut PgConnection,
    instance: &PullRequest,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO pull_request
        (
            pull_request_id,
            pull_request_name,
            author_id,
            status,
            created_at,
            merged_at
        )
        VALUES
        (
            $1,
            $2,
            $3,
            $4,
            $5,
            $6
        )
    "#,
    )
    .bind(&instance.id)
    .bind(&instance.name)
    .bind(&instance.author_id)
    .bind(instance.status.to_str())
    .bind(instance.created_at)
    .bind(instance.merged_at)
    .execute(conn)
    .await
    .map_err(|e| wrap_pull_request_insert(e, &instance.id, &instance.author_id))?;

    Ok(())
}

pub(crate) async fn pull_requests_get(
    conn: &mut PgConnection,
    pull_request_id: &str,
) -> Result<Option<PullRequest>> {
    let pull_request: Option<PullRequest> = sqlx::query_as::<_, PullRequestRow>(
        r#"
        SELECT *
        FROM pull_request
        WHERE pull_request_id = $1
    "#,
    )
    .bind(pull_request_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(implementation_error)?
    .map(Into::into);

    match pull_request {
        Some(mut pull_request) => {
            pull_request.assigned_reviewers = reviewers_list(conn, pull_request_id).await?;
            Ok(Some(pull_request))
        }
        None => Ok(None),
    }
}

pub(crate) async fn pull_requests_list_by_reviewer(
    conn: &mut PgConnection,
    reviewer_id: &str,
) -> Result<Vec<PullRequestShort>> {
    sqlx::query_as::<_, PullRequestShortRow>(
        r#"
        SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status
        FROM pull_request pr
        INNER JOIN reviewer r ON r.pull_request_id = pr.pull_request_id
        WHERE r.reviewer_id = $1
        ORDER BY pr.pull_request_id
    "#,
    )
    .bind(reviewer_id)
    .fetch_all(conn)
    .await
    .map(|x| x.into_iter().map(Into::into).collect())
    .map_err(implementation_error)
}

pub(crate) async fn pull_requests_set_merged(
    conn: &mut PgConnection,
    pull_request_id: &str,
    merged_at: OffsetDateTime,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE pull_request
        SET status = 'MERGED',
            merged_at = $2
        WHERE pull_request_id = $1
        AND status = 'OPEN'
    "#,
    )
    .bind(pull_request_id)
    .bind(merged_at)
    .execute(conn)
    .await
    .map_err(implementation_error)?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn reviewers_list(
    conn: &mut PgConnection,
    pull_request_id: &str,
) -> Result<Vec<String>> {
    let rows = sqlx::query(
        r#"
        SELECT reviewer_id
        FROM reviewer
        WHERE pull_request_id = $1
        ORDER BY id
    "#,
    )
    .bind(pull_request_id)
    .fetch_all(conn)
    .await
    .map_err(implementation_error)?;

    rows.iter()
        .map(|r| r.try_get("reviewer_id"))
        .collect::<core::result::Result<_, _>>()
        .map_err(implementation_error)
}

pub(crate) async fn reviewers_add(
    conn: &mut PgConnection,
    pull_request_id: &str,
    reviewer_ids: &[String],
) -> Result<()> {
    for reviewer_id in reviewer_ids {
        sqlx::query(
            r#"
            INSERT INTO reviewer (pull_request_id, reviewer_id)
            VALUES ($1, $2)
        "#,
        )
        .bind(pull_request_id)
        .bind(reviewer_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| wrap_reviewer_write(e, pull_request_id, reviewer_id))?;
    }

    Ok(())
}

pub(crate) async fn reviewers_replace(
    conn: &mut PgConnection,
    pull_request_id: &str,
    old_reviewer_id: &str,
    new_reviewer_id: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE reviewer
        SET reviewer_id = $3
        WHERE pull_request_id = $1
        AND reviewer_id = $2
    "#,
    )
    .bind(pull_request_id)
    .bind(old_reviewer_id)
    .bind(new_reviewer_id)
    .execute(conn)
    .await
    .map_err(|e| wrap_reviewer_write(e, pull_request_id, new_reviewer_id))?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn reviewers_count_by_reviewer(
    conn: &mut PgConnection,
) -> Result<Vec<ReviewerStat>> {
    sqlx::query_as::<_, ReviewerStatRow>(
        r#"
        SELECT reviewer_id, COUNT(*) AS assign_stat
        FROM reviewer
        GROUP BY reviewer_id
        ORDER BY reviewer_id
    "#,
    )
    .fetch_all(conn)
    .await
    .map(|x| x.into_iter().map(Into::into).collect())
    .map_err(implementation_error)
}
