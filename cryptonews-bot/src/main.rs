//! Crypto News Bot
//!
//! Telegram bot that answers `/news` with a digest of the latest crypto
//! headlines gathered from RSS/Atom feeds and NewsAPI.

mod commands;
mod config;
mod telegram;
mod transport;

use std::sync::Arc;

use anyhow::Context;
use teloxide::prelude::*;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cryptonews_core::resolve_active_sources;
use cryptonews_services::{AggregatorConfig, DigestService, NewsAggregator, MAX_RESULTS};
use cryptonews_sources::default_sources;

use crate::commands::{Command, CommandHandler};
use crate::config::BotConfig;
use crate::telegram::TelegramTransport;

const SETUP_HELP: &str = "Setup:
  1. Create a bot with @BotFather on Telegram and copy its token
  2. Put TELEGRAM_BOT_TOKEN=<token> in a .env file or the environment
  3. Optionally set NEWS_API_KEY=<key> from https://newsapi.org";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cryptonews_bot=debug")),
        )
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("{}", SETUP_HELP);
            return Err(e.into());
        }
    };
    debug!("Loaded {:?}", config);

    info!("Starting Crypto News Bot");

    if config.news_api_key.is_some() {
        info!("NewsAPI key found - NewsAPI source enabled");
    } else {
        info!("No NEWS_API_KEY set - using RSS feeds only");
    }

    // Build the news pipeline
    let sources = resolve_active_sources(&default_sources(), config.news_api_key.as_deref());
    info!(
        "Active sources: {}",
        sources
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let aggregator = NewsAggregator::new(
        sources,
        AggregatorConfig {
            fetch_timeout: config.fetch_timeout,
            max_results: MAX_RESULTS,
        },
    )
    .context("Failed to build news sources")?;
    let pipeline = Arc::new(DigestService::new(aggregator));

    // Connect to Telegram
    let bot = Bot::new(&config.bot_token);
    let me = bot
        .get_me()
        .await
        .context("Failed to reach Telegram; check TELEGRAM_BOT_TOKEN")?;
    info!("Connected as @{}", me.username());

    let handler = Arc::new(CommandHandler::new(
        Arc::new(TelegramTransport::new(bot.clone())),
        pipeline,
        config.send_interval,
    ));

    let schema = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(on_command);

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler])
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Crypto News Bot stopped");
    Ok(())
}

/// Run one parsed command; failures are logged, never fatal to the dispatcher
async fn on_command(
    handler: Arc<CommandHandler>,
    msg: Message,
    command: Command,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    if let Err(e) = handler.handle(chat_id, command).await {
        error!("Failed to handle {:?} in chat {}: {}", command, chat_id, e);
    }
    Ok(())
}
