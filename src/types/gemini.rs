use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for `models/<model>:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// A single user turn carrying the prompt verbatim.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Successful `generateContent` response. Only the candidate text is
/// consumed; everything else stays as raw JSON.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Value>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; empty when the
    /// response carries no candidates or only non-text parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(Value::as_str))
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wraps_the_prompt_in_one_user_turn() {
        let req = GenerateContentRequest::from_prompt("write about autumn");
        let json = serde_json::to_value(&req).expect("request should serialize");
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "write about autumn"}]}]})
        );
    }

    #[test]
    fn text_concatenates_first_candidate_parts() {
        let payload = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Autumn "}, {"text": "leaves."}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}], "role": "model"}}
            ],
            "usageMetadata": {"totalTokenCount": 12},
            "modelVersion": "gemini-1.5-flash-latest"
        }"#;
        let parsed: GenerateContentResponse =
            serde_json::from_str(payload).expect("payload should parse");
        assert_eq!(parsed.text(), "Autumn leaves.");
    }

    #[test]
    fn text_is_empty_without_candidates_or_text_parts() {
        let empty: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("payload should parse");
        assert_eq!(empty.text(), "");

        let non_text: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}"#,
        )
        .expect("payload should parse");
        assert_eq!(non_text.text(), "");
    }
}
