use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum QuillError {
    #[error("no JSON data provided")]
    NoJsonBody,

    #[error("username and password are required")]
    MissingCredentials,

    #[error("prompt is required")]
    MissingPrompt,

    #[error("username already exists")]
    UsernameTaken,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("provider returned no text")]
    EmptyCompletion,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for QuillError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            QuillError::NoJsonBody => (
                StatusCode::BAD_REQUEST,
                "No JSON data provided!".to_string(),
            ),
            QuillError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Username and password are required!".to_string(),
            ),
            QuillError::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                "Prompt is required for essay generation!".to_string(),
            ),
            QuillError::UsernameTaken => {
                (StatusCode::CONFLICT, "Username already exists!".to_string())
            }
            QuillError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password!".to_string(),
            ),
            QuillError::EmptyCompletion => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate content.".to_string(),
            ),
            QuillError::Provider(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {msg}"),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {other}"),
            ),
        };
        (status, Json(ApiMessage { message })).into_response()
    }
}

/// Standardized JSON body for every non-success response.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Gemini API error response structure, used to relay the upstream
/// message when `generateContent` returns a non-success status.
#[derive(Deserialize, Debug)]
pub struct GeminiError {
    pub error: GeminiErrorBody,
}

#[derive(Deserialize, Debug)]
pub struct GeminiErrorBody {
    pub code: u32,
    pub message: String,
    pub status: String,
}
