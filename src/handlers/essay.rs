use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::QuillError;
use crate::middleware::json_body::LenientJson;
use crate::router::QuillState;

#[derive(Debug, Deserialize)]
pub struct EssayRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EssayResponse {
    pub essay: String,
}

/// POST /generate_essay -> relay the prompt to Gemini and return the
/// generated text. Holds no state; prompt content and length are not
/// validated beyond presence.
pub async fn generate_essay(
    State(state): State<QuillState>,
    LenientJson(req): LenientJson<EssayRequest>,
) -> Result<Json<EssayResponse>, QuillError> {
    let prompt = req
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(QuillError::MissingPrompt)?;

    let essay = state.gemini.generate(&prompt).await?;
    info!(prompt_chars = prompt.len(), essay_chars = essay.len(), "essay generated");

    Ok(Json(EssayResponse { essay }))
}
