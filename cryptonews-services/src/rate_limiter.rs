//! Fixed-interval rate limiter for outbound chat messages
//!
//! Spaces consecutive sends by a minimum interval so a burst of digest
//! messages stays under the chat platform's flood limits.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Default spacing between chat messages
pub const CHAT_MIN_SEND_INTERVAL_MS: u64 = 500;

/// Rate limiter that enforces a minimum delay between permits
///
/// Each caller reserves its slot while holding the lock and sleeps after
/// releasing it, so concurrent callers get distinct, evenly spaced slots.
#[derive(Debug)]
pub struct RateLimiter {
    /// Earliest instant the next permit may be handed out
    next_slot: Mutex<Option<Instant>>,
    min_interval: Duration,
    name: String,
}

impl RateLimiter {
    /// Create a new rate limiter with the given minimum interval
    pub fn new(min_interval: Duration, name: &str) -> Self {
        Self {
            next_slot: Mutex::new(None),
            min_interval,
            name: name.to_string(),
        }
    }

    /// Rate limiter for chat delivery (500ms between messages)
    pub fn for_chat() -> Self {
        Self::new(Duration::from_millis(CHAT_MIN_SEND_INTERVAL_MS), "chat")
    }

    /// Wait until a permit is available
    pub async fn acquire(&self) {
        let now = Instant::now();

        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let slot = match *next_slot {
                Some(next) if next > now => next,
                _ => now,
            };
            *next_slot = Some(slot + self.min_interval);
            slot
        };

        if slot > now {
            debug!(
                "[RATE_LIMITER:{}] waiting {:?}",
                self.name,
                slot.saturating_duration_since(now)
            );
            tokio::time::sleep_until(slot).await;
        }
    }

    /// Whether [`acquire`](Self::acquire) would return without waiting
    pub async fn can_acquire_immediately(&self) -> bool {
        match *self.next_slot.lock().await {
            Some(next) => Instant::now() >= next,
            None => true,
        }
    }

    /// Minimum interval between permits
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
