use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream::{self, Stream};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::api::errors::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::api::middleware::AuthSession;
use crate::api::state::AppState;
use crate::chat::{ChatEvent, ChatMessage};

const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Stream a model reply to the conversation
///
/// POST /api/chat
///
/// Each text fragment is sent as a `data:` event; the stream ends with an
/// `event: done` or `event: error`.
pub async fn chat(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let Json(req) = payload?;
    if req.messages.is_empty() {
        return Err(ApiError::bad_request("messages must not be empty"));
    }

    tracing::debug!(user_id = %session.user_id, messages = req.messages.len(), "chat request");

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let model = Arc::clone(&state.chat);
    tokio::spawn(async move {
        if let Err(e) = model.stream_chat(req.messages, tx.clone()).await {
            tracing::error!(error = %e, "chat completion failed to start");
            let _ = tx
                .send(ChatEvent::Error(INTERNAL_ERROR_MESSAGE.to_string()))
                .await;
        }
    });

    let events = stream::unfold(rx, |mut rx| async move {
        let event = rx.recv().await?;
        Some((Ok::<_, Infallible>(to_sse(event)), rx))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn to_sse(event: ChatEvent) -> Event {
    match event {
        ChatEvent::Token(text) => Event::default().data(normalize_newlines(&text)),
        ChatEvent::Done => Event::default().event("done").data("[DONE]"),
        ChatEvent::Error(message) => Event::default()
            .event("error")
            .data(normalize_newlines(&message)),
    }
}

/// SSE fields cannot carry `\r`; `\n` is split into extra `data:` lines
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
