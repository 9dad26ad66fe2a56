//! Chat command parsing and handling

use std::sync::Arc;
use std::time::Duration;

use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use cryptonews_core::{NewsBotResult, OutboundMessage};
use cryptonews_services::formatter::{
    ERROR_TEXT, HELP_TEXT, LOADING_TEXT, NO_NEWS_TEXT, WELCOME_TEXT,
};
use cryptonews_services::{DigestOutcome, NewsPipeline, RateLimiter};

use crate::transport::{ChatId, ChatTransport, MessageRef};

/// Commands the bot responds to
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Crypto News Bot commands:")]
pub enum Command {
    #[command(description = "welcome message")]
    Start,
    #[command(description = "how to use this bot")]
    Help,
    #[command(description = "get the top crypto news stories")]
    News,
}

/// How a `/news` request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsOutcome {
    /// Number of messages delivered, header included
    Delivered(usize),
    NoNews,
    Failed,
}

/// Runs commands against a transport and a news pipeline
pub struct CommandHandler {
    transport: Arc<dyn ChatTransport>,
    pipeline: Arc<dyn NewsPipeline>,
    send_interval: Duration,
}

impl CommandHandler {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        pipeline: Arc<dyn NewsPipeline>,
        send_interval: Duration,
    ) -> Self {
        Self {
            transport,
            pipeline,
            send_interval,
        }
    }

    pub async fn handle(&self, chat_id: ChatId, command: Command) -> NewsBotResult<()> {
        info!("[BOT] /{:?} from chat {}", command, chat_id);

        match command {
            Command::Start => {
                self.transport
                    .send(chat_id, &OutboundMessage::text(WELCOME_TEXT))
                    .await?;
            }
            Command::Help => {
                self.transport
                    .send(chat_id, &OutboundMessage::text(HELP_TEXT))
                    .await?;
            }
            Command::News => {
                self.handle_news(chat_id).await?;
            }
        }
        Ok(())
    }

    /// Loading notice, pipeline run, then the digest or a notice in its place
    pub async fn handle_news(&self, chat_id: ChatId) -> NewsBotResult<NewsOutcome> {
        let loading = self
            .transport
            .send(chat_id, &OutboundMessage::text(LOADING_TEXT))
            .await?;

        // Run on its own task so a panic inside the pipeline surfaces as a
        // JoinError instead of taking the handler down with it.
        let pipeline = Arc::clone(&self.pipeline);
        let result = tokio::spawn(async move { pipeline.run().await }).await;

        match result {
            Ok(DigestOutcome::Ready(messages)) => {
                if let Err(e) = self.transport.delete(loading).await {
                    warn!("[BOT] Failed to delete loading message: {}", e);
                }

                match self.deliver(chat_id, &messages).await {
                    Ok(()) => {
                        info!("[BOT] Delivered {} messages to chat {}", messages.len(), chat_id);
                        Ok(NewsOutcome::Delivered(messages.len()))
                    }
                    Err(e) => {
                        error!("[BOT] Delivery to chat {} failed: {}", chat_id, e);
                        self.report_error(loading).await;
                        Ok(NewsOutcome::Failed)
                    }
                }
            }
            Ok(DigestOutcome::NoNews) => {
                self.replace_notice(loading, NO_NEWS_TEXT).await;
                Ok(NewsOutcome::NoNews)
            }
            Err(e) => {
                error!("[BOT] News pipeline failed: {}", e);
                self.report_error(loading).await;
                Ok(NewsOutcome::Failed)
            }
        }
    }

    async fn deliver(&self, chat_id: ChatId, messages: &[OutboundMessage]) -> NewsBotResult<()> {
        let limiter = RateLimiter::new(self.send_interval, "chat");
        for message in messages {
            limiter.acquire().await;
            self.transport.send(chat_id, message).await?;
        }
        Ok(())
    }

    async fn report_error(&self, loading: MessageRef) {
        self.replace_notice(loading, ERROR_TEXT).await;
    }

    /// Edit the loading message into `text`, or send `text` fresh if the
    /// loading message is gone
    async fn replace_notice(&self, loading: MessageRef, text: &str) {
        if self.transport.edit_text(loading, text).await.is_ok() {
            return;
        }

        if let Err(e) = self
            .transport
            .send(loading.chat_id, &OutboundMessage::text(text))
            .await
        {
            error!("[BOT] Failed to notify chat {}: {}", loading.chat_id, e);
        }
    }
}
