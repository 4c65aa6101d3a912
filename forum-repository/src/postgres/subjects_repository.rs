//! PostgreSQL implementation of the subjects repository.
//!
//! Vote persistence follows the engine's contract: the membership arrays are
//! replaced wholesale with the engine's output, while the stored count moves
//! by `like_count = like_count + $delta` in the same statement, so two voters
//! acting concurrently on one subject cannot lose a count update.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_shared::{Subject, SubjectSummary, VoteSets};
use sqlx::PgPool;
use uuid::Uuid;

use super::to_array;
use crate::errors::SubjectsRepositoryError;
use crate::interfaces::SubjectsRepository;

#[derive(sqlx::FromRow)]
struct SubjectRow {
    id: Uuid,
    title: String,
    description: String,
    author_id: String,
    author_username: String,
    like_count: i64,
    liked_by: Vec<String>,
    disliked_by: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Subject {
            id: row.id,
            title: row.title,
            description: row.description,
            author_id: row.author_id,
            author_username: row.author_username,
            like_count: row.like_count,
            votes: VoteSets {
                liked_by: row.liked_by.into_iter().collect(),
                disliked_by: row.disliked_by.into_iter().collect(),
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubjectSummaryRow {
    #[sqlx(flatten)]
    subject: SubjectRow,
    comment_count: i64,
}

const SUBJECT_COLUMNS: &str = "id, title, description, author_id, author_username, like_count, \
     liked_by, disliked_by, created_at, updated_at";

/// PostgreSQL implementation of the subjects repository.
pub struct PostgresSubjectsRepository {
    pool: PgPool,
}

impl PostgresSubjectsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectsRepository for PostgresSubjectsRepository {
    async fn insert_subject(&self, subject: &Subject) -> Result<(), SubjectsRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO subjects (id, title, description, author_id, author_username,
                like_count, liked_by, disliked_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(subject.id)
        .bind(&subject.title)
        .bind(&subject.description)
        .bind(&subject.author_id)
        .bind(&subject.author_username)
        .bind(subject.like_count)
        .bind(to_array(&subject.votes.liked_by))
        .bind(to_array(&subject.votes.disliked_by))
        .bind(subject.created_at)
        .bind(subject.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_subjects(&self) -> Result<Vec<SubjectSummary>, SubjectsRepositoryError> {
        let rows: Vec<SubjectSummaryRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.title, s.description, s.author_id, s.author_username,
                   s.like_count, s.liked_by, s.disliked_by, s.created_at, s.updated_at,
                   (SELECT count(*) FROM comments c WHERE c.subject_id = s.id) AS comment_count
            FROM subjects s
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| SubjectSummary {
                subject: row.subject.into(),
                comment_count: row.comment_count,
            })
            .collect())
    }

    async fn get_subject(&self, id: Uuid) -> Result<Option<Subject>, SubjectsRepositoryError> {
        let row: Option<SubjectRow> =
            sqlx::query_as(&format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Subject::from))
    }

    async fn apply_vote(
        &self,
        id: Uuid,
        votes: &VoteSets,
        delta: i64,
    ) -> Result<Option<Subject>, SubjectsRepositoryError> {
        let row: Option<SubjectRow> = sqlx::query_as(&format!(
            r#"
            UPDATE subjects
            SET liked_by = $2,
                disliked_by = $3,
                like_count = like_count + $4,
                updated_at = now()
            WHERE id = $1
            RETURNING {SUBJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(to_array(&votes.liked_by))
        .bind(to_array(&votes.disliked_by))
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Subject::from))
    }
}
