//! PostgreSQL implementation of the comments repository.
//!
//! Comments are stored flat with a nullable parent reference; the thread
//! builder reconstructs the tree on read. Vote persistence uses the same
//! atomic-increment contract as subjects.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_shared::{Comment, VoteSets};
use sqlx::PgPool;
use uuid::Uuid;

use super::to_array;
use crate::errors::CommentsRepositoryError;
use crate::interfaces::CommentsRepository;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    subject_id: Uuid,
    parent_comment_id: Option<Uuid>,
    content: String,
    author_id: String,
    author_username: String,
    like_count: i64,
    liked_by: Vec<String>,
    disliked_by: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            subject_id: row.subject_id,
            parent_comment_id: row.parent_comment_id,
            content: row.content,
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

const COMMENT_COLUMNS: &str = "id, subject_id, parent_comment_id, content, author_id, \
     author_username, like_count, liked_by, disliked_by, created_at, updated_at";

/// PostgreSQL implementation of the comments repository.
pub struct PostgresCommentsRepository {
    pool: PgPool,
}

impl PostgresCommentsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentsRepository for PostgresCommentsRepository {
    async fn insert_comment(&self, comment: &Comment) -> Result<(), CommentsRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, subject_id, parent_comment_id, content, author_id,
                author_username, like_count, liked_by, disliked_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(comment.id)
        .bind(comment.subject_id)
        .bind(comment.parent_comment_id)
        .bind(&comment.content)
        .bind(&comment.author_id)
        .bind(&comment.author_username)
        .bind(comment.like_count)
        .bind(to_array(&comment.votes.liked_by))
        .bind(to_array(&comment.votes.disliked_by))
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<Comment>, CommentsRepositoryError> {
        let rows: Vec<CommentRow> = sqlx::query_as(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE subject_id = $1 ORDER BY created_at"
        ))
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn get_comment(&self, id: Uuid) -> Result<Option<Comment>, CommentsRepositoryError> {
        let row: Option<CommentRow> =
            sqlx::query_as(&format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Comment::from))
    }

    async fn apply_vote(
        &self,
        id: Uuid,
        votes: &VoteSets,
        delta: i64,
    ) -> Result<Option<Comment>, CommentsRepositoryError> {
        let row: Option<CommentRow> = sqlx::query_as(&format!(
            r#"
            UPDATE comments
            SET liked_by = $2,
                disliked_by = $3,
                like_count = like_count + $4,
                updated_at = now()
            WHERE id = $1
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(to_array(&votes.liked_by))
        .bind(to_array(&votes.disliked_by))
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Comment::from))
    }
}
