use tracing::error;
use url::Url;

use crate::error::{GeminiError, QuillError};
use crate::types::gemini::{GenerateContentRequest, GenerateContentResponse};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin caller around the Gemini `generateContent` REST endpoint.
/// One shared `reqwest::Client`; one call per request, no retry.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: String, model: &str) -> Result<Self, QuillError> {
        let endpoint = Url::parse(&format!("{GEMINI_API_BASE}/models/{model}:generateContent"))?;
        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Forward `prompt` verbatim and return the generated text.
    ///
    /// A non-success upstream status becomes `Provider` carrying the
    /// upstream message; a well-formed response with no text becomes
    /// `EmptyCompletion`; transport failures propagate as `Reqwest`.
    pub async fn generate(&self, prompt: &str) -> Result<String, QuillError> {
        let body = GenerateContentRequest::from_prompt(prompt);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let payload = resp.text().await.unwrap_or_default();
            error!(%status, "Gemini generateContent returned an error");
            let message = serde_json::from_str::<GeminiError>(&payload)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("upstream returned status {status}"));
            return Err(QuillError::Provider(message));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let text = parsed.text();
        if text.is_empty() {
            return Err(QuillError::EmptyCompletion);
        }
        Ok(text)
    }
}
