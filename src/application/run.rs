//! Full pipeline for one scheduled invocation: classify the regime, build
//! the watchlist, evaluate, dispatch. Stateless — nothing survives the run.

use chrono::{DateTime, FixedOffset, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::application::dispatch::DispatchUseCase;
use crate::application::evaluate::EvaluateWatchlistUseCase;
use crate::application::overnight::OvernightSignalUseCase;
use crate::application::select::SelectWatchlistUseCase;
use crate::domain::values::evaluation::AlertOutcome;
use crate::domain::values::regime::{classify, Regime};

/// What one run did, for the caller's log/stdout.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub regime: Regime,
    pub selected: usize,
    pub evaluated: usize,
    pub messages_sent: usize,
}

pub struct RunPipelineUseCase {
    select: SelectWatchlistUseCase,
    overnight: OvernightSignalUseCase,
    evaluate: EvaluateWatchlistUseCase,
    dispatch: DispatchUseCase,
    market_offset: FixedOffset,
}

impl RunPipelineUseCase {
    pub fn new(
        select: SelectWatchlistUseCase,
        overnight: OvernightSignalUseCase,
        evaluate: EvaluateWatchlistUseCase,
        dispatch: DispatchUseCase,
        market_offset: FixedOffset,
    ) -> Self {
        Self {
            select,
            overnight,
            evaluate,
            dispatch,
            market_offset,
        }
    }

    /// Runs the regime-appropriate pipeline. `manual` marks an on-demand
    /// invocation, which additionally reports Observed (non-triggered)
    /// symbols intraday.
    pub async fn execute(&self, now_utc: DateTime<Utc>, manual: bool) -> RunReport {
        let regime = classify(now_utc, self.market_offset);
        info!("run starting, regime: {regime}");

        let watchlist = self.select.execute().await;
        if watchlist.is_empty() {
            warn!("no eligible symbols, nothing to do");
            return RunReport {
                regime,
                selected: 0,
                evaluated: 0,
                messages_sent: 0,
            };
        }

        let (evaluated, messages_sent) = match regime {
            Regime::PreMarket => {
                let overnight_pct = self.overnight.execute().await;
                let sent = self
                    .dispatch
                    .premarket_summary(&watchlist, overnight_pct)
                    .await;
                (0, sent)
            }
            Regime::Intraday => {
                let evaluations = self.evaluate.execute(&watchlist).await;
                let sent = self
                    .dispatch
                    .intraday_alerts(&evaluations, watchlist.quota(), manual)
                    .await;
                (evaluations.len(), sent)
            }
            Regime::PostMarket => {
                // No per-symbol decision after the close; everything is
                // reported as part of the summary.
                let mut evaluations = self.evaluate.execute(&watchlist).await;
                for eval in &mut evaluations {
                    eval.outcome = AlertOutcome::SummaryOnly;
                }
                let sent = self.dispatch.postmarket_summary(&evaluations).await;
                (evaluations.len(), sent)
            }
        };

        info!(
            "run complete: {} selected, {evaluated} evaluated, {messages_sent} sent",
            watchlist.len()
        );
        RunReport {
            regime,
            selected: watchlist.len(),
            evaluated,
            messages_sent,
        }
    }
}
