//! Chat transport abstraction

use async_trait::async_trait;

use cryptonews_core::{NewsBotResult, OutboundMessage};

/// Chat identifier
pub type ChatId = i64;

/// A message already delivered to a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: i32,
}

/// Delivers messages to a chat platform
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a message and return a handle to it
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> NewsBotResult<MessageRef>;

    /// Replace the text of a sent message
    async fn edit_text(&self, message: MessageRef, text: &str) -> NewsBotResult<()>;

    /// Remove a sent message
    async fn delete(&self, message: MessageRef) -> NewsBotResult<()>;
}
