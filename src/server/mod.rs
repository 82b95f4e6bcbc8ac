//! HTTP endpoints for the chat front end
//!
//! GET /           landing page
//! GET /ask?q=...  {"answer": "..."}
//! GET /health     liveness probe

use crate::command::router::{QuestionRouter, EMPTY_QUESTION_TEXT};
use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    router: Arc<QuestionRouter>,
}

impl AppState {
    pub fn new(router: QuestionRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AskParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>MLB Chat</title></head>
<body>
<h1>MLB Chat is running</h1>
<p>Ask a question at <code>/ask?q=your+question</code>, for example
<a href="/ask?q=Who+is+Shohei+Ohtani%3F">/ask?q=Who is Shohei Ohtani?</a></p>
</body>
</html>
"#;

/// Create router for the chat endpoints
pub fn create_chat_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", get(ask))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ask(State(state): State<AppState>, Query(params): Query<AskParams>) -> Json<AskResponse> {
    let answer = if params.q.trim().is_empty() {
        EMPTY_QUESTION_TEXT.to_string()
    } else {
        state.router.route_question(&params.q).await
    };
    Json(AskResponse { answer })
}

async fn health() -> &'static str {
    "ok"
}
