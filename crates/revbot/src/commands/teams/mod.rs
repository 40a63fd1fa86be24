use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod add;
mod set_active;
mod show;

use self::{add::TeamAddCommand, set_active::TeamSetActiveCommand, show::TeamShowCommand};

/// Manage teams and their members
#[derive(Parser)]
pub(crate) struct TeamCommand {
    #[clap(subcommand)]
    inner: TeamSubCommand,
}

#[async_trait]
impl Command for TeamCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
pub(crate) enum TeamSubCommand {
    Add(TeamAddCommand),
    Show(TeamShowCommand),
    SetActive(TeamSetActiveCommand),
}

#[async_trait]
impl Command for TeamSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Add(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
            Self::SetActive(sub) => sub.execute(ctx).await,
        }
    }
}
