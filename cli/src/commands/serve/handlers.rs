//! # faqbot HTTP Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//!
//! ## Overview
//!
//! The two routes of the chat server:
//! - `GET /` returns the embedded chat page
//! - `POST /ask` answers `{"q": "..."}` with `{"answer": "..."}`
//!
//! `/ask` never fails. A body that is not JSON, not an object, lacks `q`, or
//! has a non-string `q` is answered as if the question were empty, which
//! produces the fallback sentence with status 200.
//!
use crate::faq::responder;
use axum::{body::Bytes, extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// The single-page chat UI, embedded at compile time.
pub const CHAT_PAGE: &str = include_str!("chat.html");

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Log every question, its topic and the answer at INFO level.
    pub debug: bool,
}

/// Response body of `POST /ask`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}

/// Serves the chat page.
pub async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

/// Answers a question posted by the chat page.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Json<AskResponse> {
    let question = question_from_body(&body);
    let answer = responder::find_answer(&question);

    if state.debug {
        info!(
            question = %question,
            topic = ?responder::classify(&question),
            answer = %answer,
            "Answered question"
        );
    } else {
        debug!(topic = ?responder::classify(&question), "Answered question");
    }

    Json(AskResponse { answer })
}

/// Extracts the question from a raw `/ask` body, treating anything unusable
/// as the empty string. A repeated `q` key keeps its last value.
fn question_from_body(body: &[u8]) -> String {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Unparseable /ask body ({}), treating question as empty", e);
            return String::new();
        }
    };
    match value.get("q").and_then(Value::as_str) {
        Some(question) => question.to_string(),
        None => {
            debug!("/ask body has no string `q`, treating question as empty");
            String::new()
        }
    }
}
