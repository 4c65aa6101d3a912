//! Wire DTOs for the HTTP surface.
//!
//! Stored membership sets never leave the service; responses carry only the
//! viewer's own `user_liked`/`user_disliked` booleans alongside the counts.
use chrono::{DateTime, Utc};
use forum_engine::CommentNode;
use forum_shared::{Subject, SubjectSummary, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Registration and login both answer with the session user.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_username: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author_id: String,
    pub author_username: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub user_liked: bool,
    pub user_disliked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubjectResponse {
    pub fn from_subject(subject: &Subject, comment_count: i64, viewer: Option<&str>) -> Self {
        SubjectResponse {
            id: subject.id,
            title: subject.title.clone(),
            description: subject.description.clone(),
            author_id: subject.author_id.clone(),
            author_username: subject.author_username.clone(),
            like_count: subject.like_count,
            comment_count,
            user_liked: viewer.is_some_and(|v| subject.votes.liked(v)),
            user_disliked: viewer.is_some_and(|v| subject.votes.disliked(v)),
            created_at: subject.created_at,
            updated_at: subject.updated_at,
        }
    }

    pub fn from_summary(summary: &SubjectSummary, viewer: Option<&str>) -> Self {
        Self::from_subject(&summary.subject, summary.comment_count, viewer)
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectsListResponse {
    pub subjects: Vec<SubjectResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreateSubjectResponse {
    pub subject: SubjectResponse,
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
    pub like_count: i64,
    pub user_liked: bool,
    pub user_disliked: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_username: String,
    pub parent_comment_id: Option<Uuid>,
}

/// One node of the threaded comment response; `replies` nests recursively.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    pub like_count: i64,
    pub user_liked: bool,
    pub user_disliked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<CommentResponse>,
}

impl CommentResponse {
    pub fn from_node(node: CommentNode, viewer: Option<&str>) -> Self {
        let comment = node.comment;
        CommentResponse {
            id: comment.id,
            subject_id: comment.subject_id,
            parent_comment_id: comment.parent_comment_id,
            content: comment.content,
            author_id: comment.author_id,
            author_username: comment.author_username,
            like_count: comment.like_count,
            user_liked: viewer.is_some_and(|v| comment.votes.liked(v)),
            user_disliked: viewer.is_some_and(|v| comment.votes.disliked(v)),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            replies: node
                .replies
                .into_iter()
                .map(|reply| CommentResponse::from_node(reply, viewer))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentsListResponse {
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub comment: CommentResponse,
}

/// Query string shared by the read endpoints: the acting user (for the
/// `user_liked`/`user_disliked` flags) and the top-level sort toggle.
#[derive(Debug, Default, Deserialize)]
pub struct ViewerQuery {
    pub user_id: Option<String>,
    pub sort: Option<String>,
}
