//! Domain errors.

use revbot_database_interface::DatabaseErrorKind;
use thiserror::Error;

/// Error category, independent from the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    StateViolation,
    ResourceExhausted,
    Internal,
}

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Author '{0}' not found")]
    AuthorNotFound(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Team '{0}' not found")]
    TeamNotFound(String),

    #[error("Pull request '{0}' not found")]
    PullRequestNotFound(String),

    #[error("Pull request '{0}' already exists")]
    PullRequestAlreadyExists(String),

    #[error("Team '{0}' already exists")]
    TeamAlreadyExists(String),

    #[error("Pull request '{0}' is already merged")]
    PullRequestAlreadyMerged(String),

    #[error("User '{user_id}' is not a reviewer of pull request '{pull_request_id}'")]
    UserNotReviewer {
        pull_request_id: String,
        user_id: String,
    },

    #[error("No active replacement candidate in team '{team_name}'")]
    NotEnoughMembersInTeam { team_name: String },

    /// Wraps [`revbot_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: revbot_database_interface::DatabaseError,
    },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthorNotFound(_)
            | Self::UserNotFound(_)
            | Self::TeamNotFound(_)
            | Self::PullRequestNotFound(_) => ErrorKind::NotFound,
            Self::PullRequestAlreadyExists(_) | Self::TeamAlreadyExists(_) => {
                ErrorKind::AlreadyExists
            }
            Self::PullRequestAlreadyMerged(_) | Self::UserNotReviewer { .. } => {
                ErrorKind::StateViolation
            }
            Self::NotEnoughMembersInTeam { .. } => ErrorKind::ResourceExhausted,
            Self::DatabaseError { source } => match source.kind() {
                DatabaseErrorKind::NotFound => ErrorKind::NotFound,
                DatabaseErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
                DatabaseErrorKind::Internal => ErrorKind::Internal,
            },
        }
    }

    /// Stable code exposed to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthorNotFound(_)
            | Self::UserNotFound(_)
            | Self::TeamNotFound(_)
            | Self::PullRequestNotFound(_) => "NOT_FOUND",
            Self::PullRequestAlreadyExists(_) => "PR_EXISTS",
            Self::TeamAlreadyExists(_) => "TEAM_EXISTS",
            Self::PullRequestAlreadyMerged(_) => "PR_MERGED",
            Self::UserNotReviewer { .. } => "NOT_ASSIGNED",
            Self::NotEnoughMembersInTeam { .. } => "NO_CANDIDATE",
            Self::DatabaseError { source } => match source.kind() {
                DatabaseErrorKind::NotFound => "NOT_FOUND",
                DatabaseErrorKind::AlreadyExists => "CONFLICT",
                DatabaseErrorKind::Internal => "INTERNAL",
            },
        }
    }
}

impl From<revbot_database_interface::DatabaseError> for DomainError {
    fn from(e: revbot_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
