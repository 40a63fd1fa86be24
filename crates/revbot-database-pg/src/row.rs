use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, User};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::fields::PullRequestStatusDecode;

pub(crate) struct PullRequestRow(PullRequest);
pub(crate) struct PullRequestShortRow(PullRequestShort);
pub(crate) struct ReviewerStatRow(ReviewerStat);
pub(crate) struct UserRow(User);

impl From<PullRequestRow> for PullRequest {
    fn from(r: PullRequestRow) -> Self {
        r.0
    }
}

impl From<PullRequestShortRow> for PullRequestShort {
    fn from(r: PullRequestShortRow) -> Self {
        r.0
    }
}

impl From<ReviewerStatRow> for ReviewerStat {
    fn from(r: ReviewerStatRow) -> Self {
        r.0
    }
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        r.0
    }
}

impl<'r> FromRow<'r, PgRow> for PullRequestRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(PullRequest {
            id: row.try_get("pull_request_id")?,
            name: row.try_get("pull_request_name")?,
            author_id: row.try_get("author_id")?,
            status: *row.try_get::<PullRequestStatusDecode, _>("status")?,
            assigned_reviewers: Vec::new(),
            created_at: row.try_get("created_at")?,
            merged_at: row.try_get("merged_at")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for PullRequestShortRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(PullRequestShort {
            id: row.try_get("pull_request_id")?,
            name: row.try_get("pull_request_name")?,
            author_id: row.try_get("author_id")?,
            status: *row.try_get::<PullRequestStatusDecode, _>("status")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewerStatRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(ReviewerStat {
            reviewer_id: row.try_get("reviewer_id")?,
            assign_stat: row.try_get::<i64, _>("assign_stat")? as u64,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for UserRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            team_name: row.try_get("team_name")?,
            is_active: row.try_get("is_active")?,
        }))
    }
}
