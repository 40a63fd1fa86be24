use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error("Unknown team '{0}'")]
    UnknownTeam(String),

    #[error("Unknown pull request '{0}'")]
    UnknownPullRequest(String),

    #[error("Team '{0}' already exists")]
    TeamAlreadyExists(String),

    #[error("Pull request '{0}' already exists")]
    PullRequestAlreadyExists(String),

    #[error("Reviewer '{1}' is already assigned to pull request '{0}'")]
    ReviewerAlreadyAssigned(String, String),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Driver-independent classification of a [`DatabaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseErrorKind {
    NotFound,
    AlreadyExists,
    Internal,
}

impl DatabaseError {
    pub fn kind(&self) -> DatabaseErrorKind {
        match self {
            Self::UnknownUser(_) | Self::UnknownTeam(_) | Self::UnknownPullRequest(_) => {
                DatabaseErrorKind::NotFound
            }
            Self::TeamAlreadyExists(_)
            | Self::PullRequestAlreadyExists(_)
            | Self::ReviewerAlreadyAssigned(_, _) => DatabaseErrorKind::AlreadyExists,
            Self::ImplementationError { .. } => DatabaseErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == DatabaseErrorKind::NotFound
    }
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
