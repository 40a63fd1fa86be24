use revbot_config::Config;
use revbot_database_interface::DbService;

use crate::{random::RandomService, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub db_service: &'a (dyn DbService + 'a),
    pub random_service: &'a (dyn RandomService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use revbot_config::Config;
    use revbot_database_interface::DbService;
    use revbot_database_memory::MemoryDb;
    use revbot_models::TeamMember;

    use crate::{random::ChaChaRandomService, CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub db_service: MemoryDb,
        pub random_service: ChaChaRandomService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
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

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                db_service: &self.db_service,
                random_service: &self.random_service,
            }
        }

        /// Seed a team with `(user_id, is_active)` members.
        #[allow(dead_code)]
        pub async fn add_team(&self, team_name: &str, members: &[(&str, bool)]) {
            let mut tx = self.db_service.begin().await.unwrap();
            tx.teams_create(team_name).await.unwrap();
            for (id, is_active) in members {
                tx.users_upsert(
                    team_name,
                    &TeamMember {
                        id: (*id).into(),
                        username: format!("User {id}"),
                        is_active: *is_active,
                    },
                )
                .await
                .unwrap();
            }
            tx.commit().await.unwrap();
        }
    }
}
