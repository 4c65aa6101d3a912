use std::sync::Arc;

use forum_api::{config, server};
use forum_api::server::state::AppState;
use forum_repository::{
    PostgresCommentsRepository, PostgresSubjectsRepository, PostgresUsersRepository, connect_pool,
    postgres::MIGRATOR,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize environment and logging
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Starting discussion board server...");

    let database_url = config::database_url();
    let pool = match connect_pool(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = MIGRATOR.run(&pool).await {
        error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let state = AppState {
        users: Arc::new(PostgresUsersRepository::new(pool.clone())),
        subjects: Arc::new(PostgresSubjectsRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentsRepository::new(pool)),
    };

    let app = server::create_app(state);
    let addr = config::server_addr();

    if let Err(e) = server::run_server(app, addr).await {
        error!("Server error: {e:?}");
        std::process::exit(1);
    }
}
