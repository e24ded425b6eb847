use axum::Json;
use axum::response::Html;
use serde_json::{Value, json};

/// GET / -> the bundled front-end page, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /test -> liveness probe.
pub async fn test() -> Json<Value> {
    Json(json!({ "message": "Server is running!" }))
}
