use async_trait::async_trait;
use revbot_database_interface::{DatabaseError, DbTransaction, Result};
use revbot_models::{PullRequest, PullRequestStatus, TeamMember, User};
use time::OffsetDateTime;
use tokio::sync::OwnedMutexGuard;

use crate::state::{MemoryState, ReviewerEdge};

pub(crate) struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    /// State at `begin`, restored unless the transaction commits.
    snapshot: Option<MemoryState>,
}

impl MemoryTransaction {
    pub fn new(guard: OwnedMutexGuard<MemoryState>) -> Self {
        let snapshot = guard.clone();
        Self {
            guard,
            snapshot: Some(snapshot),
        }
    }

    fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.guard = snapshot;
        }
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        self.restore();
    }
}

#[async_trait]
impl DbTransaction for MemoryTransaction {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.restore();
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn teams_create(&mut self, team_name: &str) -> Result<()> {
        if !self.guard.teams.insert(team_name.into()) {
            return Err(DatabaseError::TeamAlreadyExists(team_name.into()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn users_upsert(&mut self, team_name: &str, member: &TeamMember) -> Result<()> {
        if !self.guard.teams.contains(team_name) {
            return Err(DatabaseError::UnknownTeam(team_name.into()));
        }

        self.guard
            .users
            .insert(member.id.clone(), member.clone().into_user(team_name));
        Ok(())
    }

    async fn users_get_team(&mut self, user_id: &str) -> Result<String> {
        self.guard
            .users
            .get(user_id)
            .map(|u: &User| u.team_name.clone())
            .ok_or_else(|| DatabaseError::UnknownUser(user_id.into()))
    }

    async fn users_list_active_team_members(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<String>> {
        Ok(self.guard.active_team_members(team_name, &[exclude_user_id]))
    }

    async fn users_list_active_team_members_excluding_assigned(
        &mut self,
        team_name: &str,
        exclude_user_id: &str,
        pull_request_id: &str,
    ) -> Result<Vec<String>> {
        let assigned = self.guard.assigned_reviewers(pull_request_id);
        let mut excluded: Vec<&str> = assigned.iter().map(String::as_str).collect();
        excluded.push(exclude_user_id);

        Ok(self.guard.active_team_members(team_name, &excluded))
    }

    #[tracing::instrument(skip(self, instance), fields(pull_request_id = %instance.id))]
    async fn pull_requests_create(&mut self, instance: &PullRequest) -> Result<()> {
        if self.guard.pull_requests.contains_key(&instance.id) {
            return Err(DatabaseError::PullRequestAlreadyExists(instance.id.clone()));
        }
        if !self.guard.users.contains_key(&instance.author_id) {
            return Err(DatabaseError::UnknownUser(instance.author_id.clone()));
        }

        self.guard.pull_requests.insert(
            instance.id.clone(),
            PullRequest {
                assigned_reviewers: Vec::new(),
                ..instance.clone()
            },
        );
        Ok(())
    }

    async fn pull_requests_get_with_reviewers(
        &mut self,
        pull_request_id: &str,
    ) -> Result<Option<PullRequest>> {
        Ok(self.guard.pull_request_with_reviewers(pull_request_id))
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_set_merged(
        &mut self,
        pull_request_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<bool> {
        match self.guard.pull_requests.get_mut(pull_request_id) {
            Some(pr) if pr.status == PullRequestStatus::Open => {
                pr.status = PullRequestStatus::Merged;
                pr.merged_at = Some(merged_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn reviewers_add(
        &mut self,
        pull_request_id: &str,
        reviewer_ids: &[String],
    ) -> Result<()> {
        if !self.guard.pull_requests.contains_key(pull_request_id) {
            return Err(DatabaseError::UnknownPullRequest(pull_request_id.into()));
        }

        for reviewer_id in reviewer_ids {
            if !self.guard.users.contains_key(reviewer_id) {
                return Err(DatabaseError::UnknownUser(reviewer_id.clone()));
            }
            if self.guard.has_edge(pull_request_id, reviewer_id) {
                return Err(DatabaseError::ReviewerAlreadyAssigned(
                    pull_request_id.into(),
                    reviewer_id.clone(),
                ));
            }

            self.guard.reviewers.push(ReviewerEdge {
                pull_request_id: pull_request_id.into(),
                reviewer_id: reviewer_id.clone(),
            });
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn reviewers_replace(
        &mut self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> Result<bool> {
        if !self.guard.has_edge(pull_request_id, old_reviewer_id) {
            return Ok(false);
        }
        if self.guard.has_edge(pull_request_id, new_reviewer_id) {
            return Err(DatabaseError::ReviewerAlreadyAssigned(
                pull_request_id.into(),
                new_reviewer_id.into(),
            ));
        }
        if !self.guard.users.contains_key(new_reviewer_id) {
            return Err(DatabaseError::UnknownUser(new_reviewer_id.into()));
        }

        for edge in self.guard.reviewers.iter_mut() {
            if edge.pull_request_id == pull_request_id && edge.reviewer_id == old_reviewer_id {
                edge.reviewer_id = new_reviewer_id.into();
            }
        }

        Ok(true)
    }
}
