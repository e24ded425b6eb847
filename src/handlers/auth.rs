use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::QuillError;
use crate::middleware::json_body::LenientJson;
use crate::router::QuillState;
use crate::service::password::{hash_password, verify_password};

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AuthRequest {
    /// Presence check only; no complexity rules, no normalization.
    fn into_fields(self) -> Result<(String, String), QuillError> {
        match (self.username, self.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
            _ => Err(QuillError::MissingCredentials),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user_id: i64,
}

/// POST /register -> 201 on success, 409 when the username is taken.
pub async fn register(
    State(state): State<QuillState>,
    LenientJson(req): LenientJson<AuthRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), QuillError> {
    let (username, password) = req.into_fields()?;

    let password_hash = hash_password(&password)?;
    let user = state.users.create(&username, &password_hash).await?;
    info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully!",
        }),
    ))
}

/// POST /login -> 200 with the user's id; unknown username and wrong
/// password share one 401 response so neither case is distinguishable.
pub async fn login(
    State(state): State<QuillState>,
    LenientJson(req): LenientJson<AuthRequest>,
) -> Result<Json<LoginResponse>, QuillError> {
    let (username, password) = req.into_fields()?;

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or(QuillError::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(QuillError::InvalidCredentials);
    }

    info!(user_id = user.id, "login successful");
    Ok(Json(LoginResponse {
        message: "Login successful!",
        user_id: user.id,
    }))
}
