//! Core types for the Crypto News Bot
//!
//! This crate defines the shared data structures used across the bot,
//! including the normalized article model, source configuration, and the
//! transport-independent outbound message shape.

pub mod article;
pub mod error;
pub mod message;
pub mod source;

pub use article::Article;
pub use error::{NewsBotError, NewsBotResult};
pub use message::{LinkButton, OutboundMessage};
pub use source::{resolve_active_sources, ActiveSource, SourceKind, SourceSpec};
