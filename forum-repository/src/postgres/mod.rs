//! PostgreSQL implementations of the repository traits.
//!
//! All implementations share a `sqlx::PgPool` and use the runtime query API
//! with `FromRow` row structs, so the crate builds without a live database.
//! Migrations live under `migrations/` at the crate root.
mod comments_repository;
mod subjects_repository;
mod users_repository;

pub use comments_repository::PostgresCommentsRepository;
pub use subjects_repository::PostgresSubjectsRepository;
pub use users_repository::PostgresUsersRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Embedded migrations for the discussion board schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Opens a connection pool against `database_url`.
pub async fn connect_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Collects a membership set into the form sqlx binds as `text[]`.
pub(crate) fn to_array(set: &std::collections::HashSet<String>) -> Vec<String> {
    set.iter().cloned().collect()
}
