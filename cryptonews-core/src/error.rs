//! Error types for the bot

use thiserror::Error;

/// Bot-wide error type
#[derive(Error, Debug)]
pub enum NewsBotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl NewsBotError {
    pub fn network(msg: impl Into<String>) -> Self {
        NewsBotError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        NewsBotError::Parse(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        NewsBotError::Transport(msg.into())
    }
}

/// Result type alias for bot operations
pub type NewsBotResult<T> = Result<T, NewsBotError>;
