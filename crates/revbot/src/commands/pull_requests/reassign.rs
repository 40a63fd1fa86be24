use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::pulls::ReassignReviewerInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Replace an assigned reviewer by another member of their team
#[derive(Parser)]
pub(crate) struct PullRequestReassignCommand {
    /// Pull request ID
    pull_request_id: String,
    /// Reviewer to replace
    old_user_id: String,
}

#[async_trait]
impl Command for PullRequestReassignCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let reassign_reviewer: &dyn ReassignReviewerInterface = ctx.core_module.resolve_ref();
        let result = reassign_reviewer
            .run(
                &ctx.as_core_context(),
                &self.pull_request_id,
                &self.old_user_id,
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Reviewer '{}' replaced by '{}' on pull request '{}', reviewers: {}.",
            self.old_user_id,
            result.replaced_by,
            result.pull_request.id,
            result.pull_request.assigned_reviewers.join(", ")
        )?;

        Ok(())
    }
}
