use async_trait::async_trait;
use clap::Parser;
use revbot_core::use_cases::teams::SetUserIsActiveInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Enable or disable a user for future assignments
#[derive(Parser)]
pub(crate) struct TeamSetActiveCommand {
    /// User ID
    user_id: String,
    /// Status
    #[arg(action = clap::ArgAction::Set)]
    status: bool,
}

#[async_trait]
impl Command for TeamSetActiveCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let set_user_is_active: &dyn SetUserIsActiveInterface = ctx.core_module.resolve_ref();
        let user = set_user_is_active
            .run(&ctx.as_core_context(), &self.user_id, self.status)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "User '{}' of team '{}' is now {}.",
            user.id,
            user.team_name,
            if user.is_active { "active" } else { "inactive" }
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_error, CommandContextTest};

    #[tokio::test]
    async fn set_active() {
        let ctx = CommandContextTest::new()
            .with_team("backend", &[("u1", true)])
            .await;

        assert_eq!(
            test_command(ctx, &["teams", "set-active", "u1", "false"]).await,
            "User 'u1' of team 'backend' is now inactive.\n"
        );
    }

    #[tokio::test]
    async fn unknown_user() {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command_error(ctx, &["teams", "set-active", "u9", "true"]).await,
            "User 'u9' not found"
        );
    }
}
