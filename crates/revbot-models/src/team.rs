use serde::{Deserialize, Serialize};

use crate::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(rename = "team_name")]
    pub name: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// A user as seen from its team.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    #[serde(rename = "user_id")]
    pub id: String,
    pub username: String,
    pub is_active: bool,
}

impl TeamMember {
    pub fn into_user(self, team_name: &str) -> User {
        User {
            id: self.id,
            username: self.username,
            team_name: team_name.into(),
            is_active: self.is_active,
        }
    }
}

impl From<User> for TeamMember {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}
