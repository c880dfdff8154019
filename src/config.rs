use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};

use crate::domain::error::WatchError;

/// Explicit run configuration, read from the environment once at startup
/// and passed into the pipeline at construction time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Notification endpoint. Required: without it no alert can be
    /// delivered, so startup fails fast.
    pub webhook_url: String,
    /// Maximum open price for a symbol to qualify.
    pub price_ceiling: f64,
    /// Watchlist size bound.
    pub quota: usize,
    /// Overnight proxy instrument for the pre-market advisory.
    pub proxy_symbol: String,
    /// Market local-time offset from UTC, in hours.
    pub utc_offset_hours: i32,
    /// Hard per-call timeout for outbound HTTP.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            price_ceiling: 20.0,
            quota: 5,
            proxy_symbol: "EWT".into(),
            utc_offset_hours: 8,
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, WatchError> {
        let webhook_url = std::env::var("TICKWATCH_WEBHOOK")
            .map_err(|_| WatchError::ConfigurationMissing("TICKWATCH_WEBHOOK".into()))?;
        let defaults = Self::default();
        Ok(Self {
            webhook_url,
            price_ceiling: env_or("TICKWATCH_PRICE_CEILING", defaults.price_ceiling),
            quota: env_or("TICKWATCH_QUOTA", defaults.quota),
            proxy_symbol: std::env::var("TICKWATCH_PROXY").unwrap_or(defaults.proxy_symbol),
            utc_offset_hours: env_or("TICKWATCH_UTC_OFFSET", defaults.utc_offset_hours),
            request_timeout_secs: env_or("TICKWATCH_TIMEOUT_SECS", defaults.request_timeout_secs),
        })
    }

    /// The market's wall-clock offset. Out-of-range values fall back to
    /// UTC rather than failing the run.
    pub fn market_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours.clamp(-23, 23) * 3600)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
