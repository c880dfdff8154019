use super::evaluation::round2;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One OHLC bar as returned by the market-data port. Upstream pads halted
/// or untraded intervals with nulls, hence the Options.
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub close: Option<f64>,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, open: Option<f64>, close: Option<f64>) -> Self {
        Self {
            timestamp,
            open,
            close,
        }
    }
}

/// A symbol's state for the current run: today's open, the latest traded
/// price, and when that price was observed. Derived fresh every run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceSnapshot {
    pub open: f64,
    pub current: f64,
    pub as_of: DateTime<Utc>,
}

impl PriceSnapshot {
    /// Open of the first bar that traded, close of the last bar that
    /// traded. Returns None when the day has no usable bars. A non-positive
    /// open counts as untraded (it would poison the change computation).
    pub fn from_bars(bars: &[Bar]) -> Option<Self> {
        let open = bars.iter().find_map(|b| b.open.filter(|v| *v > 0.0))?;
        let last = bars.iter().rev().find(|b| b.close.is_some())?;
        Some(Self {
            open: round2(open),
            current: round2(last.close?),
            as_of: last.timestamp,
        })
    }
}
