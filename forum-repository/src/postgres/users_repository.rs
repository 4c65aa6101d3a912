//! PostgreSQL implementation of the users repository.
//!
//! Uniqueness of username and email is enforced both up front (the handler
//! checks before inserting, as the original flow did) and by the unique
//! indexes, with the violation mapped to `DuplicateUser`.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_shared::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::UsersRepositoryError;
use crate::interfaces::UsersRepository;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    phone: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const USER_COLUMNS: &str = "id, username, email, phone, password_hash, created_at, updated_at";

/// PostgreSQL implementation of the users repository.
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn insert_user(&self, user: &User) -> Result<(), UsersRepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, phone, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(UsersRepositoryError::DuplicateUser)
            }
            Err(e) => Err(UsersRepositoryError::DatabaseError(e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersRepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UsersRepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $2 LIMIT 1"
        ))
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}
