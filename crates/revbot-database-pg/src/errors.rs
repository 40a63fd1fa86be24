//! Mapping of Postgres failures to store errors.

use revbot_database_interface::DatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub(crate) fn implementation_error(e: sqlx::Error) -> DatabaseError {
    DatabaseError::ImplementationError { source: e.into() }
}

fn has_code(e: &sqlx::Error, code: &str) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

fn violated_constraint(e: &sqlx::Error) -> Option<&str> {
    match e {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

pub(crate) fn wrap_unique_violation(e: sqlx::Error, target: DatabaseError) -> DatabaseError {
    if has_code(&e, UNIQUE_VIOLATION) {
        target
    } else {
        implementation_error(e)
    }
}

pub(crate) fn wrap_foreign_key_violation(e: sqlx::Error, target: DatabaseError) -> DatabaseError {
    if has_code(&e, FOREIGN_KEY_VIOLATION) {
        target
    } else {
        implementation_error(e)
    }
}

/// Classify a failed insert of a pull request row.
pub(crate) fn wrap_pull_request_insert(
    e: sqlx::Error,
    pull_request_id: &str,
    author_id: &str,
) -> DatabaseError {
    if has_code(&e, UNIQUE_VIOLATION) {
        DatabaseError::PullRequestAlreadyExists(pull_request_id.into())
    } else {
        wrap_foreign_key_violation(e, DatabaseError::UnknownUser(author_id.into()))
    }
}

/// Classify a failed write on the `reviewer` table.
pub(crate) fn wrap_reviewer_write(
    e: sqlx::Error,
    pull_request_id: &str,
    reviewer_id: &str,
) -> DatabaseError {
    if has_code(&e, UNIQUE_VIOLATION) {
        DatabaseError::ReviewerAlreadyAssigned(pull_request_id.into(), reviewer_id.into())
    } else if has_code(&e, FOREIGN_KEY_VIOLATION) {
        match violated_constraint(&e) {
            Some("reviewer_pull_request_id_fkey") => {
                DatabaseError::UnknownPullRequest(pull_request_id.into())
            }
            _ => DatabaseError::UnknownUser(reviewer_id.into()),
        }
    } else {
        implementation_error(e)
    }
}
