//! Shared test doubles for the port traits.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use tickwatch::config::AppConfig;
use tickwatch::domain::error::WatchError;
use tickwatch::domain::ports::market_data::{MarketData, Quote};
use tickwatch::domain::ports::notifier::{Message, Notifier};
use tickwatch::domain::ports::ranked_source::{RankedRecord, RankedSource};
use tickwatch::domain::values::snapshot::Bar;
use tickwatch::Tickwatch;

pub fn test_config() -> AppConfig {
    AppConfig {
        webhook_url: "http://localhost/hook".into(),
        ..Default::default()
    }
}

pub fn setup(
    market: Arc<dyn MarketData>,
    ranked: Arc<dyn RankedSource>,
    notifier: Arc<dyn Notifier>,
) -> Tickwatch {
    Tickwatch::with_ports(&test_config(), market, ranked, notifier)
}

pub fn record(code: &str, name: &str, open: Option<f64>) -> RankedRecord {
    RankedRecord {
        code: code.into(),
        name: name.into(),
        open_price: open,
    }
}

/// Two intraday minute bars: open at the first, `current` as the latest close.
pub fn day_bars(open: f64, current: f64) -> Vec<Bar> {
    vec![
        Bar::new(
            Utc.with_ymd_and_hms(2025, 6, 2, 1, 1, 0).unwrap(),
            Some(open),
            Some(open),
        ),
        Bar::new(
            Utc.with_ymd_and_hms(2025, 6, 2, 2, 30, 0).unwrap(),
            Some(current),
            Some(current),
        ),
    ]
}

/// Market-data fake keyed by symbol; unknown symbols report missing data.
#[derive(Default)]
pub struct FakeMarketData {
    bars_by_symbol: HashMap<String, Vec<Bar>>,
    names: HashMap<String, String>,
}

impl FakeMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, symbol: &str, open: f64, current: f64) -> Self {
        self.bars_by_symbol
            .insert(symbol.into(), day_bars(open, current));
        self
    }

    pub fn with_daily_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Bar::new(
                    Utc.with_ymd_and_hms(2025, 5, 26 + i as u32, 13, 30, 0).unwrap(),
                    Some(close),
                    Some(close),
                )
            })
            .collect();
        self.bars_by_symbol.insert(symbol.into(), bars);
        self
    }

    pub fn with_name(mut self, symbol: &str, name: &str) -> Self {
        self.names.insert(symbol.into(), name.into());
        self
    }
}

#[async_trait]
impl MarketData for FakeMarketData {
    async fn bars(
        &self,
        symbol: &str,
        _range: &str,
        _interval: &str,
    ) -> Result<Vec<Bar>, WatchError> {
        self.bars_by_symbol
            .get(symbol)
            .cloned()
            .ok_or_else(|| WatchError::SymbolDataMissing(symbol.to_string()))
    }

    async fn quote(&self, symbol: &str) -> Quote {
        Quote {
            code: symbol.to_string(),
            display_name: self
                .names
                .get(symbol)
                .cloned()
                .unwrap_or_else(|| symbol.to_string()),
        }
    }
}

/// Ranked-source fake: a fixed record list, or a hard failure.
pub enum FakeRankedSource {
    Records(Vec<RankedRecord>),
    Unavailable,
}

#[async_trait]
impl RankedSource for FakeRankedSource {
    async fn top_traded(&self) -> Result<Vec<RankedRecord>, WatchError> {
        match self {
            FakeRankedSource::Records(records) => Ok(records.clone()),
            FakeRankedSource::Unavailable => {
                Err(WatchError::SourceUnavailable("connection refused".into()))
            }
        }
    }
}

/// Notifier fake that records every successful send, optionally refusing
/// messages whose title contains a given substring.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Message>>,
    fail_titles_containing: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(substring: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_titles_containing: Some(substring.into()),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|m| m.title.clone()).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &Message) -> Result<(), WatchError> {
        if let Some(needle) = &self.fail_titles_containing {
            if message.title.contains(needle) {
                return Err(WatchError::DispatchFailure("refused by test".into()));
            }
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
