//! Comment listing, creation, and voting handlers.
//!
//! The read path returns the reconstructed thread: the flat stored list goes
//! through the engine's tree builder with the caller's sort toggle, and the
//! response nests replies recursively.
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use forum_engine::{apply_vote, build_tree, parse_action};
use forum_shared::{Comment, SortOrder, VoteSets};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{
    CommentResponse, CommentsListResponse, CreateCommentRequest, CreateCommentResponse,
    ViewerQuery, VoteRequest, VoteResponse,
};
use crate::server::state::AppState;
use crate::validate::validate_comment;

fn parse_sort(query: &ViewerQuery) -> Result<SortOrder, ApiError> {
    match query.sort.as_deref() {
        None => Ok(SortOrder::default()),
        Some(value) => SortOrder::from_wire(value).ok_or_else(|| {
            ApiError::Validation("Invalid sort. Must be 'newest' or 'oldest'".to_string())
        }),
    }
}

/// GET /api/subjects/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<CommentsListResponse>, ApiError> {
    let order = parse_sort(&query)?;
    state
        .subjects
        .get_subject(subject_id)
        .await?
        .ok_or(ApiError::NotFound("Subject"))?;

    let flat = state.comments.list_for_subject(subject_id).await?;
    let viewer = query.user_id.as_deref();
    let comments = build_tree(flat, order)
        .into_iter()
        .map(|node| CommentResponse::from_node(node, viewer))
        .collect();
    Ok(Json(CommentsListResponse { comments }))
}

/// POST /api/subjects/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>, ApiError> {
    if request.content.is_empty() || request.author_id.is_empty() || request.author_username.is_empty()
    {
        return Err(ApiError::Validation(
            "Content, author_id, and author_username are required".to_string(),
        ));
    }
    validate_comment(&request.content)?;

    state
        .subjects
        .get_subject(subject_id)
        .await?
        .ok_or(ApiError::NotFound("Subject"))?;

    let now = Utc::now();
    let comment = Comment {
        id: Uuid::new_v4(),
        subject_id,
        parent_comment_id: request.parent_comment_id,
        content: request.content.trim().to_string(),
        author_id: request.author_id,
        author_username: request.author_username,
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now,
        updated_at: now,
    };
    state.comments.insert_comment(&comment).await?;

    info!("Created comment {} under subject {}", comment.id, subject_id);
    Ok(Json(CreateCommentResponse {
        comment: CommentResponse::from_node(
            forum_engine::CommentNode {
                comment,
                replies: Vec::new(),
            },
            None,
        ),
    }))
}

/// POST /api/subjects/{id}/comments/{comment_id}/vote
pub async fn vote_comment(
    State(state): State<AppState>,
    Path((_subject_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::Validation(
            "User ID and action are required".to_string(),
        ));
    }
    let action = parse_action(&request.action)?;

    let comment = state
        .comments
        .get_comment(comment_id)
        .await?
        .ok_or(ApiError::NotFound("Comment"))?;

    let outcome = apply_vote(&comment.votes, &request.user_id, action);
    let updated = state
        .comments
        .apply_vote(comment_id, &outcome.sets, outcome.delta)
        .await?
        .ok_or(ApiError::NotFound("Comment"))?;

    Ok(Json(VoteResponse {
        success: true,
        like_count: updated.like_count,
        user_liked: updated.votes.liked(&request.user_id),
        user_disliked: updated.votes.disliked(&request.user_id),
    }))
}
