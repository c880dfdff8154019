//! Message rendering and dispatch. One outbound send per message; a
//! failed send is logged and the remaining messages still go out.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use log::warn;

use crate::application::evaluate::Evaluation;
use crate::domain::entities::watchlist::Watchlist;
use crate::domain::ports::notifier::{
    Message, Notifier, COLOR_OBSERVE, COLOR_SUMMARY, COLOR_TRIGGER,
};
use crate::domain::values::evaluation::{evaluate, AlertOutcome};

/// Overnight move (percent) beyond which the pre-market advisory stops
/// being neutral, in either direction.
const ADVISORY_BAND_PCT: f64 = 1.0;

pub struct DispatchUseCase {
    notifier: Arc<dyn Notifier>,
    market_offset: FixedOffset,
}

impl DispatchUseCase {
    pub fn new(notifier: Arc<dyn Notifier>, market_offset: FixedOffset) -> Self {
        Self {
            notifier,
            market_offset,
        }
    }

    /// Pre-market summary: the full watchlist plus an advisory biased by
    /// the overnight proxy move. Always exactly one message.
    pub async fn premarket_summary(&self, watchlist: &Watchlist, overnight_pct: f64) -> usize {
        let listing = watchlist
            .iter()
            .map(|s| format!("{} {}", s.code, s.name))
            .collect::<Vec<_>>()
            .join("\n");
        let body = format!(
            "Today's watchlist:\n```\n{listing}\n```\nOvernight proxy move: {overnight_pct:+.2}%\nAdvisory: {}",
            advisory(overnight_pct)
        );
        let message = Message {
            title: format!("📋 Pre-market watchlist ({} symbols)", watchlist.len()),
            body,
            color: COLOR_SUMMARY,
            footer: self.footer(Utc::now()),
        };
        self.send(&message).await as usize
    }

    /// Intraday alerts: one message per Triggered symbol; Observed symbols
    /// are included only on manual (on-demand) runs. Messages go out in
    /// watchlist order, titled with the symbol's selection position out of
    /// the quota. Returns how many sends succeeded.
    pub async fn intraday_alerts(
        &self,
        evaluations: &[Evaluation],
        quota: usize,
        manual: bool,
    ) -> usize {
        let mut sent = 0;
        for eval in evaluations {
            let (headline, color) = match eval.outcome {
                AlertOutcome::Triggered => ("🎯 Cheap-entry trigger", COLOR_TRIGGER),
                AlertOutcome::Observed if manual => ("👀 Observing", COLOR_OBSERVE),
                _ => continue,
            };
            let message = Message {
                title: format!(
                    "{headline} {}/{quota}: {}",
                    eval.position, eval.symbol.name
                ),
                body: render_symbol_table(eval),
                color,
                footer: self.footer(eval.snapshot.as_of),
            };
            if self.send(&message).await {
                sent += 1;
            }
        }
        sent
    }

    /// Post-market summary: every evaluated symbol with today's close and
    /// next-session thresholds projected from that close (no open exists
    /// yet for tomorrow). Always one message.
    pub async fn postmarket_summary(&self, evaluations: &[Evaluation]) -> usize {
        let mut lines = vec![
            "code     | close  | next buy | next tp".to_string(),
            "---------|--------|----------|--------".to_string(),
        ];
        for eval in evaluations {
            let close = eval.snapshot.current;
            let (projected, _) = evaluate(close, close);
            lines.push(format!(
                "{:<8} | {:>6.2} | {:>8.2} | {:>7.2}",
                eval.symbol.code, close, projected.cheap_entry, projected.take_profit
            ));
        }
        let message = Message {
            title: format!("🌙 Post-market summary ({} symbols)", evaluations.len()),
            body: format!("```\n{}\n```", lines.join("\n")),
            color: COLOR_SUMMARY,
            footer: self.footer(Utc::now()),
        };
        self.send(&message).await as usize
    }

    /// Single outbound send. Transport failures are logged, never
    /// propagated: one bad send must not block the rest of the run.
    async fn send(&self, message: &Message) -> bool {
        match self.notifier.send(message).await {
            Ok(()) => true,
            Err(e) => {
                warn!("dispatch failed for '{}': {e}", message.title);
                false
            }
        }
    }

    fn footer(&self, as_of: DateTime<Utc>) -> String {
        format!(
            "as of {}",
            as_of.with_timezone(&self.market_offset).format("%H:%M:%S")
        )
    }
}

/// Pre-market advisory text derived from the overnight proxy move.
pub fn advisory(overnight_pct: f64) -> &'static str {
    if overnight_pct >= ADVISORY_BAND_PCT {
        "caution: avoid chasing strength at the open"
    } else if overnight_pct <= -ADVISORY_BAND_PCT {
        "opportunity: maintain entry discipline on dips"
    } else {
        "neutral: follow the standard cheap-entry rule"
    }
}

/// Monospaced per-symbol table, rendered inside a code fence.
fn render_symbol_table(eval: &Evaluation) -> String {
    format!(
        "```\nitem        | value\n------------|----------\nname        | {}\ncode        | {}\nopen        | {:.2}\ncurrent     | {:.2}\ntrigger buy | {:.2}\ntake profit | {:.2}\nchange      | {:+.2}%\n```",
        eval.symbol.name,
        eval.symbol.code,
        eval.snapshot.open,
        eval.snapshot.current,
        eval.thresholds.cheap_entry,
        eval.thresholds.take_profit,
        eval.thresholds.change_pct,
    )
}
