//! Request validation for the write endpoints.
//!
//! The rules mirror the original form constraints: username shape and
//! length, a permissive email pattern, a minimum password length, and an
//! optional phone number kept for password recovery.
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ApiError;
use crate::models::RegisterRequest;

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const COMMENT_MAX_LEN: usize = 1000;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").expect("static pattern");
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern");
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[\d\s\-()]{10,15}$").expect("static pattern");
}

pub fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Username, email, and password are required".to_string(),
        ));
    }
    if request.username.len() < 3 || request.username.len() > 50 {
        return Err(ApiError::Validation(
            "Username must be between 3 and 50 characters".to_string(),
        ));
    }
    if !USERNAME_RE.is_match(&request.username) {
        return Err(ApiError::Validation(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }
    if !EMAIL_RE.is_match(&request.email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }
    if request.password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    if let Some(phone) = &request.phone {
        let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !compact.is_empty() && !PHONE_RE.is_match(&compact) {
            return Err(ApiError::Validation(
                "Invalid phone number format".to_string(),
            ));
        }
    }
    Ok(())
}

pub fn validate_subject(title: &str, description: &str) -> Result<(), ApiError> {
    if title.len() > TITLE_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "Title must be {TITLE_MAX_LEN} characters or less"
        )));
    }
    if description.len() > DESCRIPTION_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "Description must be {DESCRIPTION_MAX_LEN} characters or less"
        )));
    }
    Ok(())
}

pub fn validate_comment(content: &str) -> Result<(), ApiError> {
    if content.len() > COMMENT_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "Comment must be {COMMENT_MAX_LEN} characters or less"
        )));
    }
    Ok(())
}
