//! Registration and login handlers.
//!
//! Credential handling is deliberately a placeholder: the stored value is a
//! deterministic digest of the password, which keeps login self-consistent
//! for any registered user without pretending to be real password security
//! (an explicit non-goal of this system).
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use forum_shared::User;
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::server::state::AppState;
use crate::validate::validate_registration;

/// Placeholder demo digest standing in for a real password hash.
fn demo_password_hash(password: &str) -> String {
    format!("$2b$10$demo_hash_{password}")
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate_registration(&request)?;

    if state
        .users
        .find_by_username_or_email(&request.username, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "User with this email or username already exists".to_string(),
        ));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: request.username,
        email: request.email,
        phone: request.phone.filter(|phone| !phone.is_empty()),
        password_hash: demo_password_hash(&request.password),
        created_at: now,
        updated_at: now,
    };
    state.users.insert_user(&user).await?;

    info!("Registered user {}", user.username);
    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if user.password_hash != demo_password_hash(&request.password) {
        return Err(ApiError::InvalidCredentials);
    }

    info!("User {} logged in", user.username);
    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
    }))
}
