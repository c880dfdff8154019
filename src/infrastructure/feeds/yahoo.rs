use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::WatchError;
use crate::domain::ports::market_data::{MarketData, Quote};
use crate::domain::values::snapshot::Bar;

/// Yahoo Finance v8 chart API adapter (no auth required).
pub struct YahooMarketData {
    client: reqwest::Client,
}

impl YahooMarketData {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartData, WatchError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?range={range}&interval={interval}"
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WatchError::SymbolDataMissing(format!("{symbol}: {e}")))?;

        if !resp.status().is_success() {
            return Err(WatchError::SymbolDataMissing(format!(
                "{symbol}: chart API returned {}",
                resp.status()
            )));
        }

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| WatchError::Parse(format!("{symbol}: {e}")))?;

        if let Some(err) = data.chart.error {
            return Err(WatchError::Parse(format!("{symbol}: chart error: {err}")));
        }

        data.chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| WatchError::SymbolDataMissing(format!("{symbol}: empty chart result")))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    symbol: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

/// Per-field arrays aligned with the timestamp array; halted or untraded
/// intervals carry nulls.
#[derive(Debug, serde::Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl ChartData {
    fn into_bars(self) -> Vec<Bar> {
        let timestamps = self.timestamp.unwrap_or_default();
        let series = self
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .unwrap_or(QuoteSeries {
                open: vec![],
                close: vec![],
            });

        timestamps
            .iter()
            .enumerate()
            .filter_map(|(i, &secs)| {
                let timestamp: DateTime<Utc> = DateTime::from_timestamp(secs, 0)?;
                Some(Bar::new(
                    timestamp,
                    series.open.get(i).copied().flatten(),
                    series.close.get(i).copied().flatten(),
                ))
            })
            .collect()
    }
}

#[async_trait]
impl MarketData for YahooMarketData {
    async fn bars(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Bar>, WatchError> {
        let chart = self.fetch_chart(symbol, range, interval).await?;
        Ok(chart.into_bars())
    }

    async fn quote(&self, symbol: &str) -> Quote {
        match self.fetch_chart(symbol, "1d", "1d").await {
            Ok(chart) => {
                let meta = chart.meta;
                let display_name = meta
                    .short_name
                    .or(meta.long_name)
                    .unwrap_or_else(|| meta.symbol.clone());
                Quote {
                    code: meta.symbol,
                    display_name,
                }
            }
            // Best-effort contract: the code stands in for the name.
            Err(_) => Quote {
                code: symbol.to_string(),
                display_name: symbol.to_string(),
            },
        }
    }
}
