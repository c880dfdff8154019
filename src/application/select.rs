//! Candidate selection: builds the day's watchlist from the ranked-volume
//! source, topping up from the static fallback pool.

use std::sync::Arc;

use log::{debug, warn};

use crate::domain::entities::symbol::Symbol;
use crate::domain::entities::watchlist::{Watchlist, FALLBACK_POOL};
use crate::domain::ports::market_data::MarketData;
use crate::domain::ports::ranked_source::{RankedRecord, RankedSource};

/// Standard common-stock codes are 4 characters; longer codes are ETFs,
/// funds, or warrants and are excluded from selection.
const COMMON_STOCK_CODE_LEN: usize = 4;

pub struct SelectWatchlistUseCase {
    ranked: Arc<dyn RankedSource>,
    market: Arc<dyn MarketData>,
    price_ceiling: f64,
    quota: usize,
}

impl SelectWatchlistUseCase {
    pub fn new(
        ranked: Arc<dyn RankedSource>,
        market: Arc<dyn MarketData>,
        price_ceiling: f64,
        quota: usize,
    ) -> Self {
        Self {
            ranked,
            market,
            price_ceiling,
            quota,
        }
    }

    /// Builds the watchlist: primary-source entries first (in rank order),
    /// then fallback-pool entries (in pool order), deduplicated by code,
    /// capped at the quota. A failed ranked-source fetch degrades to a
    /// pool-only selection; an undersized result is returned as-is.
    pub async fn execute(&self) -> Watchlist {
        let mut watchlist = Watchlist::new(self.quota);

        match self.ranked.top_traded().await {
            Ok(records) => {
                for record in &records {
                    if watchlist.is_full() {
                        break;
                    }
                    if let Some(symbol) = self.qualify(record, &watchlist).await {
                        watchlist.push(symbol);
                    }
                }
            }
            Err(e) => {
                warn!("ranked source unavailable, selecting from fallback pool only: {e}");
            }
        }

        for (code, name) in FALLBACK_POOL {
            if watchlist.is_full() {
                break;
            }
            watchlist.push(Symbol::new(*code, *name));
        }

        debug!(
            "selected {}/{} symbols: {}",
            watchlist.len(),
            watchlist.quota(),
            watchlist
                .iter()
                .map(|s| s.code.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        watchlist
    }

    /// Applies the acceptance policy to one ranked record. Returns the
    /// exchange-qualified symbol if the record passes, None if skipped.
    async fn qualify(&self, record: &RankedRecord, current: &Watchlist) -> Option<Symbol> {
        if record.code.len() > COMMON_STOCK_CODE_LEN {
            return None;
        }
        let open = record.open_price?;
        if !(open > 0.0 && open <= self.price_ceiling) {
            return None;
        }
        let code = format!("{}.TW", record.code);
        if current.contains_code(&code) {
            return None;
        }
        let name = if record.name.trim().is_empty() {
            self.market.quote(&code).await.display_name
        } else {
            record.name.clone()
        };
        Some(Symbol::new(code, name))
    }
}
