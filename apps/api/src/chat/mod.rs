// Chat assistant
//
// Conversation messages are forwarded verbatim to a hosted model endpoint
// and the generated text is relayed back as it streams. No conversation
// memory is kept between requests.

pub mod client;
pub mod errors;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

pub use client::OpenAiChatClient;
pub use errors::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Streamed output of one completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A fragment of generated text
    Token(String),
    /// Generation finished normally
    Done,
    /// Generation stopped early
    Error(String),
}

/// A hosted model that can stream a chat completion
///
/// Implementations send any number of `Token`s followed by exactly one
/// `Done` or `Error`, and stop quietly if the receiver goes away. An `Err`
/// return means the request could not be started at all.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn stream_chat(
        &self,
        messages: Vec<ChatMessage>,
        tx: mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError>;
}
