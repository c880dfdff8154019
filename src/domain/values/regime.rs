use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::Serialize;
use std::fmt;

/// Time-of-day operating mode, decided once at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    PreMarket,
    Intraday,
    PostMarket,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::PreMarket => write!(f, "pre-market"),
            Regime::Intraday => write!(f, "intraday"),
            Regime::PostMarket => write!(f, "post-market"),
        }
    }
}

/// Pure function of the instant converted to the market's fixed offset:
/// before 09:00 local is pre-market, the 14:00 hour is the post-market
/// evaluation window, everything else (including evenings) is intraday.
pub fn classify(now_utc: DateTime<Utc>, market_offset: FixedOffset) -> Regime {
    let local = now_utc.with_timezone(&market_offset);
    match local.hour() {
        h if h < 9 => Regime::PreMarket,
        14 => Regime::PostMarket,
        _ => Regime::Intraday,
    }
}
