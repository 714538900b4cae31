// Streaming client for OpenAI-compatible chat-completions endpoints.
//
// Sends the conversation with `stream: true` and turns the Server-Sent
// Events into `ChatEvent`s on an mpsc channel.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest_eventsource::{retry, Event, RequestBuilderExt};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::errors::ChatError;
use super::{ChatEvent, ChatMessage, ChatModel};
use crate::config::LlmConfig;

// ---------------------------------------------------------------------------
// Chunk parsing
// ---------------------------------------------------------------------------

/// One decoded `data:` payload
#[derive(Debug, PartialEq, Eq)]
enum Chunk {
    Delta(String),
    Done,
    Error(String),
    Skip,
}

fn parse_chunk(data: &str) -> Chunk {
    let data = data.trim();
    if data == "[DONE]" {
        return Chunk::Done;
    }

    let value: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        Err(_) => return Chunk::Skip,
    };

    if let Some(message) = value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Chunk::Error(message.to_string());
    }

    value
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("delta"))
        .and_then(|delta| delta.get("content"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(|text| Chunk::Delta(text.to_string()))
        .unwrap_or(Chunk::Skip)
}

fn describe_error(err: &reqwest_eventsource::Error) -> String {
    use reqwest_eventsource::Error;

    match err {
        Error::InvalidStatusCode(status, _) => format!("Model endpoint returned {status}"),
        Error::InvalidContentType(_, _) => "Model endpoint did not return an event stream".into(),
        Error::Transport(e) => format!("Model endpoint unreachable: {e}"),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// OpenAiChatClient
// ---------------------------------------------------------------------------

pub struct OpenAiChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    async fn stream_chat(
        &self,
        messages: Vec<ChatMessage>,
        tx: mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError> {
        let body = serde_json::json!({
            "model": self.model,
            "stream": true,
            "messages": messages,
        });

        let request = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body);

        let mut es = request
            .eventsource()
            .map_err(|e| ChatError::Request(e.to_string()))?;
        es.set_retry_policy(Box::new(retry::Never));

        while let Some(event) = es.next().await {
            match event {
                Ok(Event::Open) => {
                    debug!(model = %self.model, "model stream opened");
                }
                Ok(Event::Message(msg)) => match parse_chunk(&msg.data) {
                    Chunk::Delta(text) => {
                        if tx.send(ChatEvent::Token(text)).await.is_err() {
                            // client went away
                            es.close();
                            return Ok(());
                        }
                    }
                    Chunk::Done => {
                        let _ = tx.send(ChatEvent::Done).await;
                        es.close();
                        return Ok(());
                    }
                    Chunk::Error(message) => {
                        warn!(%message, "model reported an error");
                        let _ = tx.send(ChatEvent::Error(message)).await;
                        es.close();
                        return Ok(());
                    }
                    Chunk::Skip => {}
                },
                Err(reqwest_eventsource::Error::StreamEnded) => break,
                Err(err) => {
                    warn!(?err, "model stream error");
                    let _ = tx.send(ChatEvent::Error(describe_error(&err))).await;
                    es.close();
                    return Ok(());
                }
            }
        }

        es.close();
        let _ = tx.send(ChatEvent::Done).await;
        Ok(())
    }
}
