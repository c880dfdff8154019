use std::time::Duration;

use async_trait::async_trait;

use crate::domain::error::WatchError;
use crate::domain::ports::ranked_source::{RankedRecord, RankedSource};

/// Daily trade-volume ranking endpoint. Rows are positional string arrays:
/// `[rank, code, name, volume, trade_count, open, ...]`.
const RANKING_URL: &str = "https://www.twse.com.tw/exchangeReport/MI_INDEX20?response=json";

/// TWSE ranked daily-volume listing adapter.
pub struct TwseRankedSource {
    client: reqwest::Client,
}

impl TwseRankedSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RankingResponse {
    #[serde(default)]
    stat: String,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

/// Validates one positional row into a typed record. Rows without a code
/// or name are dropped; a bad price field only clears `open_price` so the
/// selector can skip the record without losing rank order.
fn parse_row(row: &[serde_json::Value]) -> Option<RankedRecord> {
    let code = row.get(1)?.as_str()?.trim().to_string();
    let name = row.get(2)?.as_str()?.trim().to_string();
    if code.is_empty() {
        return None;
    }
    let open_price = row.get(5).and_then(|v| v.as_str()).and_then(parse_price);
    Some(RankedRecord {
        code,
        name,
        open_price,
    })
}

/// Price fields arrive as grouped strings ("1,025.00"); "--" marks a
/// no-trade session.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == "--" {
        return None;
    }
    trimmed.parse().ok()
}

#[async_trait]
impl RankedSource for TwseRankedSource {
    async fn top_traded(&self) -> Result<Vec<RankedRecord>, WatchError> {
        let resp = self
            .client
            .get(RANKING_URL)
            .send()
            .await
            .map_err(|e| WatchError::SourceUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(WatchError::SourceUnavailable(format!(
                "ranking endpoint returned {}",
                resp.status()
            )));
        }

        let body: RankingResponse = resp
            .json()
            .await
            .map_err(|e| WatchError::Parse(e.to_string()))?;

        if body.stat != "OK" {
            return Err(WatchError::SourceUnavailable(format!(
                "ranking endpoint stat: {}",
                body.stat
            )));
        }

        Ok(body.data.iter().filter_map(|r| parse_row(r)).collect())
    }
}
