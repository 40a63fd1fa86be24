mod state;
mod transaction;

use std::sync::Arc;

use async_trait::async_trait;
use revbot_database_interface::{DatabaseError, DbService, DbTransaction, Result};
use revbot_models::{PullRequest, PullRequestShort, ReviewerStat, Team, User};
use tokio::sync::Mutex;

use crate::{state::MemoryState, transaction::MemoryTransaction};

/// In-memory store.
///
/// Transactions are serialized: a transaction holds the whole state until it
/// is committed, rolled back or dropped.
#[derive(Debug, Default)]
pub struct MemoryDb {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn begin(&self) -> Result<Box<dyn DbTransaction>> {
        let guard = self.state.clone().lock_owned().await;
        Ok(Box::new(MemoryTransaction::new(guard)))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    async fn users_get(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.state.lock().await.users.get(user_id).cloned())
    }

    async fn users_set_is_active(&self, user_id: &str, value: bool) -> Result<User> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .get_mut(user_id)
            .ok_or_else(|| DatabaseError::UnknownUser(user_id.into()))?;
        user.is_active = value;
        Ok(user.clone())
    }

    async fn users_list_active_team_members(
        &self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .await
            .active_team_members(team_name, &[exclude_user_id]))
    }

    async fn teams_get(&self, team_name: &str) -> Result<Option<Team>> {
        Ok(self.state.lock().await.team(team_name))
    }

    async fn pull_requests_get(&self, pull_request_id: &str) -> Result<Option<PullRequest>> {
        Ok(self
            .state
            .lock()
            .await
            .pull_request_with_reviewers(pull_request_id))
    }

    async fn pull_requests_list_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        let state = self.state.lock().await;
        let mut values: Vec<_> = state
            .reviewers
            .iter()
            .filter(|edge| edge.reviewer_id == reviewer_id)
            .filter_map(|edge| state.pull_requests.get(&edge.pull_request_id))
            .map(PullRequest::to_short)
            .collect();
        values.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(values)
    }

    async fn reviewers_count_by_reviewer(&self) -> Result<Vec<ReviewerStat>> {
        Ok(self.state.lock().await.reviewer_stats())
    }
}
