//! Telegram transport on top of teloxide
//!
//! Maps [`OutboundMessage`] onto Bot API calls: legacy Markdown text, an
//! optional URL button and link previews turned off on request.

use async_trait::async_trait;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::requests::Requester;
use teloxide::types::{
    ChatId as TelegramChatId, InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions,
    MessageId, ParseMode,
};
use teloxide::{Bot, RequestError};
use tracing::{debug, instrument};
use url::Url;

use cryptonews_core::{NewsBotError, NewsBotResult, OutboundMessage};

use crate::transport::{ChatId, ChatTransport, MessageRef};

/// [`ChatTransport`] backed by a teloxide [`Bot`]
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Inline keyboard with the message's link button, if it has one
fn reply_markup(message: &OutboundMessage) -> NewsBotResult<Option<InlineKeyboardMarkup>> {
    message
        .link_button
        .as_ref()
        .map(|button| {
            let url = Url::parse(&button.url)
                .map_err(|e| NewsBotError::parse(format!("bad link '{}': {}", button.url, e)))?;
            Ok(InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
                button.label.clone(),
                url,
            )]]))
        })
        .transpose()
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Bot API errors as bot errors
///
/// Network errors are reduced to a fixed message because their display
/// includes the request URL, which carries the bot token.
fn transport_error(err: RequestError) -> NewsBotError {
    match err {
        RequestError::Network(e) if e.is_timeout() => {
            NewsBotError::network("Telegram request timed out")
        }
        RequestError::Network(_) => NewsBotError::network("Telegram request failed"),
        err @ RequestError::InvalidJson { .. } => NewsBotError::parse(err.to_string()),
        other => NewsBotError::transport(other.to_string()),
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    #[instrument(skip(self, message))]
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> NewsBotResult<MessageRef> {
        let mut request = self
            .bot
            .send_message(TelegramChatId(chat_id), message.text.as_str())
            .parse_mode(ParseMode::Markdown);

        if let Some(markup) = reply_markup(message)? {
            request = request.reply_markup(markup);
        }
        if message.suppress_link_preview {
            request = request.link_preview_options(disabled_link_preview());
        }

        let sent = request.await.map_err(transport_error)?;
        debug!("Sent message {}", sent.id.0);

        Ok(MessageRef {
            chat_id: sent.chat.id.0,
            message_id: sent.id.0,
        })
    }

    async fn edit_text(&self, message: MessageRef, text: &str) -> NewsBotResult<()> {
        self.bot
            .edit_message_text(
                TelegramChatId(message.chat_id),
                MessageId(message.message_id),
                text,
            )
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn delete(&self, message: MessageRef) -> NewsBotResult<()> {
        self.bot
            .delete_message(TelegramChatId(message.chat_id), MessageId(message.message_id))
            .await
            .map_err(transport_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;
    use teloxide::ApiError;

    #[test]
    fn test_link_button_becomes_url_keyboard() {
        let message = OutboundMessage::text("*1.* Story")
            .with_link("📖 Read Full Article", "https://example.com/a")
            .without_preview();

        let markup = reply_markup(&message).unwrap().unwrap();

        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0].len(), 1);
        let button = &markup.inline_keyboard[0][0];
        assert_eq!(button.text, "📖 Read Full Article");
        assert!(matches!(
            &button.kind,
            InlineKeyboardButtonKind::Url(url) if url.as_str() == "https://example.com/a"
        ));
    }

    #[test]
    fn test_plain_message_has_no_keyboard() {
        assert!(reply_markup(&OutboundMessage::text("hello")).unwrap().is_none());
    }

    #[test]
    fn test_unparseable_link_rejected() {
        let message = OutboundMessage::text("x").with_link("read", "not a url");
        assert!(matches!(reply_markup(&message), Err(NewsBotError::Parse(_))));
    }

    #[test]
    fn test_link_preview_disabled() {
        assert!(disabled_link_preview().is_disabled);
    }

    #[test]
    fn test_api_error_maps_to_transport() {
        let err = transport_error(RequestError::Api(ApiError::BotBlocked));
        assert!(matches!(err, NewsBotError::Transport(_)));
    }
}
