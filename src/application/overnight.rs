//! Overnight macro signal: percent move between the proxy instrument's
//! last two daily closes. Advisory only; any failure degrades to neutral.

use std::sync::Arc;

use log::warn;

use crate::domain::error::WatchError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::evaluation::round2;

pub struct OvernightSignalUseCase {
    market: Arc<dyn MarketData>,
    proxy_symbol: String,
}

impl OvernightSignalUseCase {
    pub fn new(market: Arc<dyn MarketData>, proxy_symbol: String) -> Self {
        Self {
            market,
            proxy_symbol,
        }
    }

    /// Overnight move in percent, rounded to 2 decimals. Never fails:
    /// retrieval errors and short histories return 0.0 (neutral).
    pub async fn execute(&self) -> f64 {
        match self.fetch_move().await {
            Ok(pct) => pct,
            Err(e) => {
                warn!("overnight signal unavailable, defaulting to neutral: {e}");
                0.0
            }
        }
    }

    async fn fetch_move(&self) -> Result<f64, WatchError> {
        let bars = self.market.bars(&self.proxy_symbol, "5d", "1d").await?;
        let closes: Vec<f64> = bars.iter().filter_map(|b| b.close).collect();
        let [.., prev, last] = closes.as_slice() else {
            return Err(WatchError::AuxiliarySignalUnavailable(format!(
                "fewer than two closes for {}",
                self.proxy_symbol
            )));
        };
        if *prev <= 0.0 {
            return Err(WatchError::AuxiliarySignalUnavailable(format!(
                "non-positive reference close for {}",
                self.proxy_symbol
            )));
        }
        Ok(round2((last - prev) / prev * 100.0))
    }
}
