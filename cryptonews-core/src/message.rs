//! Transport-independent outbound chat messages

use serde::{Deserialize, Serialize};

/// A button that opens a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    /// Button caption
    pub label: String,
    /// Target URL
    pub url: String,
}

/// One message to deliver to a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Markdown-formatted body
    pub text: String,
    /// Optional link button shown under the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_button: Option<LinkButton>,
    /// Ask the transport not to expand link previews
    pub suppress_link_preview: bool,
}

impl OutboundMessage {
    /// Plain text message without a button
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link_button: None,
            suppress_link_preview: false,
        }
    }

    /// Attach a link button
    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.link_button = Some(LinkButton {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Disable link preview expansion
    pub fn without_preview(mut self) -> Self {
        self.suppress_link_preview = true;
        self
    }
}
