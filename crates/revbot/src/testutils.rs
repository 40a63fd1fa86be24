use std::{io::Write, sync::Arc};

use clap::Parser;
use revbot_config::Config;
use revbot_core::{ChaChaRandomService, CoreModule};
use revbot_database_interface::DbService;
use revbot_database_memory::MemoryDb;
use revbot_models::TeamMember;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub db_service: MemoryDb,
    pub random_service: ChaChaRandomService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version();
        config.reviewers_per_pull_request = 2;

        Self {
            config,
            core_module: CoreModule::builder().build(),
            db_service: MemoryDb::new(),
            random_service: ChaChaRandomService::new(0),
        }
    }

    /// Seed a team, members are `(user_id, is_active)` pairs.
    pub async fn with_team(self, team_name: &str, members: &[(&str, bool)]) -> Self {
        let mut tx = self.db_service.begin().await.unwrap();
        tx.teams_create(team_name).await.unwrap();
        for (id, is_active) in members {
            tx.users_upsert(
                team_name,
                &TeamMember {
                    id: (*id).into(),
                    username: format!("User {}", id),
                    is_active: *is_active,
                },
            )
            .await
            .unwrap();
        }
        tx.commit().await.unwrap();

        self
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            db_service: Box::new(self.db_service),
            random_service: Box::new(self.random_service),
            writer,
        }
    }
}

async fn run_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (anyhow::Result<()>, String) {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let result = {
        let command_args = {
            let mut tmp_args = vec!["bot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => {
                CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await
            }
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    let vec = buf.read().await.to_vec();
    (result, std::str::from_utf8(&vec).unwrap().to_string())
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (result, output) = run_command(ctx, command_args).await;
    result.unwrap();
    output
}

pub(crate) async fn test_command_error(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (result, _) = run_command(ctx, command_args).await;
    result.unwrap_err().to_string()
}
