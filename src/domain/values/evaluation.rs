use serde::Serialize;

/// Cheap-entry discount off the day's open (1.5%).
pub const CHEAP_ENTRY_DISCOUNT: f64 = 0.985;
/// Take-profit premium over the latest observed price (2.5%).
pub const TAKE_PROFIT_PREMIUM: f64 = 1.025;

/// Rounds to two decimals, half away from zero (`f64::round` semantics).
/// All monetary values in the pipeline go through this.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-symbol thresholds, recomputed from scratch on every evaluation.
/// The take-profit side derives from whatever "current" is at call time,
/// so repeated evaluations against a falling price drift downward. That
/// drift is inherited behavior, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdSet {
    pub cheap_entry: f64,
    pub take_profit: f64,
    pub change_pct: f64,
}

/// How a symbol classified against its thresholds this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertOutcome {
    /// Current price at or below the cheap-entry threshold.
    Triggered,
    /// Above threshold; reported only on manual runs.
    Observed,
    /// Listed in a regime summary without a per-symbol decision.
    SummaryOnly,
}

/// Pure threshold computation. Idempotent: identical inputs always yield
/// identical thresholds and outcome.
pub fn evaluate(open: f64, current: f64) -> (ThresholdSet, AlertOutcome) {
    let thresholds = ThresholdSet {
        cheap_entry: round2(open * CHEAP_ENTRY_DISCOUNT),
        take_profit: round2(current * TAKE_PROFIT_PREMIUM),
        change_pct: round2((current - open) / open * 100.0),
    };
    let outcome = if current <= thresholds.cheap_entry {
        AlertOutcome::Triggered
    } else {
        AlertOutcome::Observed
    };
    (thresholds, outcome)
}
