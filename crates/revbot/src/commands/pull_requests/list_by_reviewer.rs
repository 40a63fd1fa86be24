use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::pulls::ListPullRequestsByReviewerInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List pull requests a user is assigned to
#[derive(Parser)]
pub(crate) struct PullRequestListByReviewerCommand {
    /// Reviewer user ID
    user_id: String,
}

#[async_trait]
impl Command for PullRequestListByReviewerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let list_pull_requests: &dyn ListPullRequestsByReviewerInterface =
            ctx.core_module.resolve_ref();
        let pull_requests = list_pull_requests
            .run(&ctx.as_core_context(), &self.user_id)
            .await?;

        if pull_requests.is_empty() {
            writeln!(
                ctx.writer.write().await,
                "No pull request assigned to '{}'.",
                self.user_id
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "Pull requests assigned to '{}':",
                self.user_id
            )?;
            for pr in pull_requests {
                writeln!(
                    ctx.writer.write().await,
                    "  - {} '{}' by {} [{}]",
                    pr.id,
                    pr.name,
                    pr.author_id,
                    pr.status
                )?;
            }
        }

        Ok(())
    }
}
