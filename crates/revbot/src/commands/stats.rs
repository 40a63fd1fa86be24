use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::stats::GetAssignStatsInterface;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Show how many pull requests each reviewer is assigned to
#[derive(Parser)]
pub(crate) struct StatsCommand;

#[async_trait]
impl Command for StatsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_assign_stats: &dyn GetAssignStatsInterface = ctx.core_module.resolve_ref();
        let stats = get_assign_stats.run(&ctx.as_core_context()).await?;

        if stats.is_empty() {
            writeln!(ctx.writer.write().await, "No reviewer assignment.")?;
        } else {
            writeln!(ctx.writer.write().await, "Reviewer assignments:")?;
            for stat in stats {
                writeln!(
                    ctx.writer.write().await,
                    "  - {}: {}",
                    stat.reviewer_id,
                    stat.assign_stat
                )?;
            }
        }

        Ok(())
    }
}
