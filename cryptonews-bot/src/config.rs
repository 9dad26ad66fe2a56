//! Bot configuration from environment variables

use std::env;
use std::fmt;
use std::time::Duration;

use cryptonews_services::rate_limiter::CHAT_MIN_SEND_INTERVAL_MS;
use cryptonews_sources::DEFAULT_FETCH_TIMEOUT;

/// Runtime configuration for the bot
#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// NewsAPI key; `None` disables the NewsAPI source
    pub news_api_key: Option<String>,
    /// Per-source fetch timeout
    pub fetch_timeout: Duration,
    /// Delay between consecutive chat messages
    pub send_interval: Duration,
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// Expects:
    /// - TELEGRAM_BOT_TOKEN: Telegram bot token (required)
    /// - NEWS_API_KEY: NewsAPI key (optional)
    /// - FETCH_TIMEOUT_SECS: per-source timeout (optional, default 10)
    /// - SEND_INTERVAL_MS: delay between messages (optional, default 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        if bot_token.starts_with("your_") {
            return Err(ConfigError::PlaceholderToken);
        }

        let news_api_key = lookup("NEWS_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && !k.starts_with("your_"));

        let fetch_timeout = match parse_number(&lookup, "FETCH_TIMEOUT_SECS")? {
            Some(0) => {
                return Err(ConfigError::InvalidNumber {
                    field: "FETCH_TIMEOUT_SECS".to_string(),
                    value: "0".to_string(),
                })
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_FETCH_TIMEOUT,
        };

        let send_interval = Duration::from_millis(
            parse_number(&lookup, "SEND_INTERVAL_MS")?.unwrap_or(CHAT_MIN_SEND_INTERVAL_MS),
        );

        Ok(Self {
            bot_token,
            news_api_key,
            fetch_timeout,
            send_interval,
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"***")
            .field("news_api_key", &self.news_api_key.as_ref().map(|_| "***"))
            .field("fetch_timeout", &self.fetch_timeout)
            .field("send_interval", &self.send_interval)
            .finish()
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    field: &str,
) -> Result<Option<u64>, ConfigError> {
    match lookup(field) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                field: field.to_string(),
                value: raw,
            }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN not found in environment variables")]
    MissingToken,

    #[error("TELEGRAM_BOT_TOKEN is still the placeholder value")]
    PlaceholderToken,

    #[error("Invalid number in {field}: {value}")]
    InvalidNumber { field: String, value: String },
}
