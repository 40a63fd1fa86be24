use std::collections::{BTreeMap, BTreeSet, HashMap};

use revbot_models::{PullRequest, ReviewerStat, Team, TeamMember, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReviewerEdge {
    pub pull_request_id: String,
    pub reviewer_id: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    pub teams: BTreeSet<String>,
    pub users: HashMap<String, User>,
    /// Pull request rows, without reviewers.
    pub pull_requests: HashMap<String, PullRequest>,
    pub reviewers: Vec<ReviewerEdge>,
}

impl MemoryState {
    pub fn team(&self, team_name: &str) -> Option<Team> {
        if !self.teams.contains(team_name) {
            return None;
        }

        let mut members: Vec<TeamMember> = self
            .users
            .values()
            .filter(|u| u.team_name == team_name)
            .cloned()
            .map(Into::into)
            .collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));

        Some(Team {
            name: team_name.into(),
            members,
        })
    }

    pub fn active_team_members(&self, team_name: &str, excluded: &[&str]) -> Vec<String> {
        let mut values: Vec<_> = self
            .users
            .values()
            .filter(|u| u.team_name == team_name && u.is_active)
            .filter(|u| !excluded.contains(&u.id.as_str()))
            .map(|u| u.id.clone())
            .collect();
        values.sort();
        values
    }

    pub fn assigned_reviewers(&self, pull_request_id: &str) -> Vec<String> {
        self.reviewers
            .iter()
            .filter(|edge| edge.pull_request_id == pull_request_id)
            .map(|edge| edge.reviewer_id.clone())
            .collect()
    }

    pub fn has_edge(&self, pull_request_id: &str, reviewer_id: &str) -> bool {
        self.reviewers
            .iter()
            .any(|edge| edge.pull_request_id == pull_request_id && edge.reviewer_id == reviewer_id)
    }

    pub fn pull_request_with_reviewers(&self, pull_request_id: &str) -> Option<PullRequest> {
        self.pull_requests.get(pull_request_id).map(|pr| PullRequest {
            assigned_reviewers: self.assigned_reviewers(pull_request_id),
            ..pr.clone()
        })
    }

    pub fn reviewer_stats(&self) -> Vec<ReviewerStat> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for edge in &self.reviewers {
            *counts.entry(edge.reviewer_id.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(reviewer_id, assign_stat)| ReviewerStat {
                reviewer_id: reviewer_id.into(),
                assign_stat,
            })
            .collect()
    }
}
