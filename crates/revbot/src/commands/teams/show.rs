use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::teams::GetTeamInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show team members
#[derive(Parser)]
pub(crate) struct TeamShowCommand {
    /// Team name
    team_name: String,
}

#[async_trait]
impl Command for TeamShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_team: &dyn GetTeamInterface = ctx.core_module.resolve_ref();
        let team = get_team
            .run(&ctx.as_core_context(), &self.team_name)
            .await?;

        writeln!(ctx.writer.write().await, "Team '{}':", team.name)?;
        if team.members.is_empty() {
            writeln!(ctx.writer.write().await, "  No member.")?;
        }

        for member in team.members {
            writeln!(
                ctx.writer.write().await,
                "  - {} ({}){}",
                member.id,
                member.username,
                if member.is_active { "" } else { " [inactive]" }
            )?;
        }

        Ok(())
    }
}
