//! Chat endpoint: one message in, one reply out, per session

use crate::bot::models::{DEFAULT_USER_NAME, GOODBYE};
use crate::bot::{Reply, Session, SharedState};
use crate::store::helpers::get_or_create_session_id;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The line the user typed
    pub message: String,

    /// Existing session; a new one is opened when absent
    pub session_id: Option<String>,

    /// Display name used when the session is created
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub time: DateTime<Local>,
}

/// Creates routes for chat operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/chat", post(chat))
}

/// Endpoint: POST /chat
/// Dispatches the message inside the caller's session. `exit` ends it.
async fn chat(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = get_or_create_session_id(payload.session_id);
    let message = payload.message.trim();

    let reply = if message.eq_ignore_ascii_case("exit") {
        if state.sessions.remove(&session_id).is_some() {
            tracing::info!(session = %session_id, "session closed");
        }
        Reply::now(GOODBYE)
    } else {
        let name = payload.name.as_deref().unwrap_or(DEFAULT_USER_NAME);
        let mut session = state.sessions.entry(session_id.clone()).or_insert_with(|| {
            tracing::info!(session = %session_id, name, "session opened");
            Session::new(name)
        });
        session.respond(message)
    };

    Json(ChatResponse {
        session_id,
        reply: reply.content,
        time: reply.time,
    })
}
