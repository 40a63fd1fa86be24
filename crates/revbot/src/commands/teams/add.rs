use std::str::FromStr;

use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::teams::AddTeamInterface;
use revbot_models::{Team, TeamMember};
use shaku::HasComponent;
use thiserror::Error;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

#[derive(Debug, Error)]
#[error("Invalid member '{0}', expected 'user_id:username' or 'user_id:username:inactive'")]
pub(crate) struct MemberArgError(String);

/// Team member written as `user_id:username`, with an optional `:inactive` suffix.
#[derive(Debug, Clone)]
pub(crate) struct MemberArg(TeamMember);

impl FromStr for MemberArg {
    type Err = MemberArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MemberArgError(s.into());

        let (id, rest) = s.split_once(':').ok_or_else(invalid)?;
        let (username, is_active) = match rest.rsplit_once(':') {
            Some((username, "inactive")) => (username, false),
            Some((username, "active")) => (username, true),
            _ => (rest, true),
        };

        if id.is_empty() || username.is_empty() {
            return Err(invalid());
        }

        Ok(Self(TeamMember {
            id: id.into(),
            username: username.into(),
            is_active,
        }))
    }
}

/// Create a team, moving already known members into it
#[derive(Parser)]
pub(crate) struct TeamAddCommand {
    /// Team name
    team_name: String,

    /// Member (e.g. `u1:Alice` or `u2:Bob:inactive`), can be repeated
    #[arg(short, long = "member")]
    members: Vec<MemberArg>,
}

#[async_trait]
impl Command for TeamAddCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let add_team: &dyn AddTeamInterface = ctx.core_module.resolve_ref();
        let team = add_team
            .run(
                &ctx.as_core_context(),
                Team {
                    name: self.team_name,
                    members: self.members.into_iter().map(|m| m.0).collect(),
                },
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Team '{}' created with {} member(s).",
            team.name,
            team.members.len()
        )?;

        Ok(())
    }
}
