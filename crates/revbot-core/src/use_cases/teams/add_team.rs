use async_trait::async_trait;
use revbot_database_interface::DatabaseErrorKind;
use revbot_models::Team;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AddTeamInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, team: Team) -> Result<Team>;
}

#[derive(Component)]
#[shaku(interface = AddTeamInterface)]
pub(crate) struct AddTeam;

#[async_trait]
impl AddTeamInterface for AddTeam {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, team: Team) -> Result<Team> {
        let mut tx = ctx.db_service.begin().await?;
        tx.teams_create(&team.name).await.map_err(|e| match e.kind() {
            DatabaseErrorKind::AlreadyExists => DomainError::TeamAlreadyExists(team.name.clone()),
            _ => e.into(),
        })?;

        // Existing users are moved to this team.
        for member in &team.members {
            tx.users_upsert(&team.name, member).await?;
        }

        tx.commit().await?;

        ctx.db_service
            .teams_get(&team.name)
            .await?
            .ok_or_else(|| DomainError::TeamNotFound(team.name.clone()))
    }
}
