use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::pulls::CreatePullRequestInterface;
use revbot_models::PullRequestShort;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Create a pull request and assign reviewers from the author team
#[derive(Parser)]
pub(crate) struct PullRequestCreateCommand {
    /// Pull request ID
    pull_request_id: String,
    /// Pull request name
    name: String,
    /// Author user ID
    author_id: String,
}

#[async_trait]
impl Command for PullRequestCreateCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let create_pull_request: &dyn CreatePullRequestInterface = ctx.core_module.resolve_ref();
        let pr = create_pull_request
            .run(
                &ctx.as_core_context(),
                PullRequestShort {
                    id: self.pull_request_id,
                    name: self.name,
                    author_id: self.author_id,
                    ..Default::default()
                },
            )
            .await?;

        if pr.assigned_reviewers.is_empty() {
            writeln!(
                ctx.writer.write().await,
                "Pull request '{}' created without reviewer.",
                pr.id
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "Pull request '{}' created, reviewers: {}.",
                pr.id,
                pr.assigned_reviewers.join(", ")
            )?;
        }

        Ok(())
    }
}
