use futures::Future;
use revbot_config::Config;
use revbot_database_interface::DbService;
use revbot_database_memory::MemoryDb;
use revbot_database_pg::{
    create_db_pool_connection, create_db_url, get_base_url, setup_test_db, teardown_test_db,
    PostgresDb,
};
use tracing::info;

/// Run the same block against every store driver.
///
/// The Postgres run is skipped when `BOT_DATABASE_PG_URL` is empty.
pub async fn db_test_case<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Box<dyn DbService>) -> Fut,
    Fut: Future<Output = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>>,
{
    let mut config = Config::from_env_no_version();
    let full_name = format!("test-revbot-{test_name}");

    {
        // In memory
        let mem_db = Box::new(MemoryDb::new());
        info!("running memory test {full_name} ...");
        block(mem_db).await.unwrap();
    }

    if config.database.pg.url.is_empty() {
        info!("skipping postgres test {full_name}, no database url");
        return;
    }

    let base_url = get_base_url(&config.database.pg.url);
    let new_url = create_db_url(&base_url, &full_name);
    config.database.pg.url.clone_from(&new_url);
    config.database.pg.pool_size = 2;
    config.database.pg.connection_timeout = 5;

    {
        // Postgres
        setup_test_db(&base_url, &full_name).await.unwrap();

        let pool = create_db_pool_connection(&config, &base_url, &full_name)
            .await
            .unwrap();
        let pg_db = Box::new(PostgresDb::new(pool));
        info!("running postgres test {full_name} ...");
        block(pg_db).await.unwrap();

        teardown_test_db(&base_url, &full_name).await.unwrap();
    }
}

#[cfg(test)]
pub(crate) async fn seed_team(
    db: &dyn DbService,
    team_name: &str,
    members: &[(&str, bool)],
) -> revbot_database_interface::Result<()> {
    let mut tx = db.begin().await?;
    tx.teams_create(team_name).await?;
    for (id, is_active) in members {
        tx.users_upsert(
            team_name,
            &revbot_models::TeamMember {
                id: (*id).into(),
                username: format!("{id}-name"),
                is_active: *is_active,
            },
        )
        .await?;
    }
    tx.commit().await
}
