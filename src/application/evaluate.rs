//! Per-symbol signal evaluation over the watchlist, with failure
//! isolation: one symbol's missing data never stops the loop.

use std::sync::Arc;

use log::warn;
use serde::Serialize;

use crate::domain::entities::symbol::Symbol;
use crate::domain::entities::watchlist::Watchlist;
use crate::domain::error::WatchError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::evaluation::{evaluate, AlertOutcome, ThresholdSet};
use crate::domain::values::snapshot::PriceSnapshot;

/// One symbol's result for the current run.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub symbol: Symbol,
    /// 1-based position in the watchlist (selection order).
    pub position: usize,
    pub snapshot: PriceSnapshot,
    pub thresholds: ThresholdSet,
    pub outcome: AlertOutcome,
}

pub struct EvaluateWatchlistUseCase {
    market: Arc<dyn MarketData>,
}

impl EvaluateWatchlistUseCase {
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self { market }
    }

    /// Evaluates every watchlist symbol in selection order. Symbols whose
    /// data fetch fails or yields no usable bars are skipped and logged;
    /// positions of surviving entries still reflect selection order.
    pub async fn execute(&self, watchlist: &Watchlist) -> Vec<Evaluation> {
        let mut evaluations = Vec::with_capacity(watchlist.len());
        for (i, symbol) in watchlist.iter().enumerate() {
            match self.evaluate_one(symbol).await {
                Ok((snapshot, thresholds, outcome)) => evaluations.push(Evaluation {
                    symbol: symbol.clone(),
                    position: i + 1,
                    snapshot,
                    thresholds,
                    outcome,
                }),
                Err(e) => warn!("skipping {}: {e}", symbol.code),
            }
        }
        evaluations
    }

    async fn evaluate_one(
        &self,
        symbol: &Symbol,
    ) -> Result<(PriceSnapshot, ThresholdSet, AlertOutcome), WatchError> {
        let bars = self.market.bars(&symbol.code, "1d", "1m").await?;
        let snapshot = PriceSnapshot::from_bars(&bars)
            .ok_or_else(|| WatchError::SymbolDataMissing(symbol.code.clone()))?;
        let (thresholds, outcome) = evaluate(snapshot.open, snapshot.current);
        Ok((snapshot, thresholds, outcome))
    }
}
