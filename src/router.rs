use axum::{
    Router,
    routing::{get, post},
};

use crate::api::gemini_api::GeminiClient;
use crate::db::UserStorage;
use crate::handlers::{auth, essay, health};

/// Shared state: the injected user storage and provider client.
/// Cloned per request; both members are cheap handles.
#[derive(Clone)]
pub struct QuillState {
    pub users: UserStorage,
    pub gemini: GeminiClient,
}

impl QuillState {
    pub fn new(users: UserStorage, gemini: GeminiClient) -> Self {
        Self { users, gemini }
    }
}

pub fn quill_router(state: QuillState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/test", get(health::test))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/generate_essay", post(essay::generate_essay))
        .with_state(state)
}
