use crate::domain::error::WatchError;
use async_trait::async_trait;

/// Embed color for triggered buy signals (red).
pub const COLOR_TRIGGER: u32 = 15_158_332;
/// Embed color for observed (non-triggered) symbols on manual runs (gold).
pub const COLOR_OBSERVE: u32 = 15_844_367;
/// Embed color for regime summaries (blue).
pub const COLOR_SUMMARY: u32 = 3_447_003;

/// A rendered alert, mapped one-to-one onto an outbound send.
#[derive(Debug, Clone)]
pub struct Message {
    pub title: String,
    /// Body text; per-symbol alerts carry a monospaced table in a code fence.
    pub body: String,
    pub color: u32,
    pub footer: String,
}

/// Port for the outbound notification transport. Fire-and-forget: no
/// retry contract, but failures must surface as errors, not panics.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &Message) -> Result<(), WatchError>;
}
