//! Subject listing, creation, and voting handlers.
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use forum_engine::{apply_vote, parse_action};
use forum_shared::{Subject, VoteSets};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{
    CreateSubjectRequest, CreateSubjectResponse, SubjectResponse, SubjectsListResponse,
    ViewerQuery, VoteRequest, VoteResponse,
};
use crate::server::state::AppState;
use crate::validate::validate_subject;

/// GET /api/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<SubjectsListResponse>, ApiError> {
    let viewer = query.user_id.as_deref();
    let subjects = state
        .subjects
        .list_subjects()
        .await?
        .iter()
        .map(|summary| SubjectResponse::from_summary(summary, viewer))
        .collect();
    Ok(Json(SubjectsListResponse { subjects }))
}

/// POST /api/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    Json(request): Json<CreateSubjectRequest>,
) -> Result<Json<CreateSubjectResponse>, ApiError> {
    if request.title.is_empty() || request.author_id.is_empty() || request.author_username.is_empty()
    {
        return Err(ApiError::Validation(
            "Title, author_id, and author_username are required".to_string(),
        ));
    }
    let description = request.description.unwrap_or_default();
    validate_subject(&request.title, &description)?;

    let now = Utc::now();
    let subject = Subject {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        description: description.trim().to_string(),
        author_id: request.author_id,
        author_username: request.author_username,
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now,
        updated_at: now,
    };
    state.subjects.insert_subject(&subject).await?;

    info!("Created subject {}", subject.id);
    Ok(Json(CreateSubjectResponse {
        subject: SubjectResponse::from_subject(&subject, 0, None),
    }))
}

/// POST /api/subjects/{id}/vote
///
/// Runs the vote engine against the stored membership and persists the
/// outcome; the count moves by the engine's delta, applied atomically by the
/// repository.
pub async fn vote_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::Validation(
            "User ID and action are required".to_string(),
        ));
    }
    let action = parse_action(&request.action)?;

    let subject = state
        .subjects
        .get_subject(subject_id)
        .await?
        .ok_or(ApiError::NotFound("Subject"))?;

    let outcome = apply_vote(&subject.votes, &request.user_id, action);
    let updated = state
        .subjects
        .apply_vote(subject_id, &outcome.sets, outcome.delta)
        .await?
        .ok_or(ApiError::NotFound("Subject"))?;

    Ok(Json(VoteResponse {
        success: true,
        like_count: updated.like_count,
        user_liked: updated.votes.liked(&request.user_id),
        user_disliked: updated.votes.disliked(&request.user_id),
    }))
}
