use crate::domain::error::WatchError;
use crate::domain::values::snapshot::Bar;
use async_trait::async_trait;

/// Quote lookup result: the code plus a best-effort display name.
#[derive(Debug, Clone)]
pub struct Quote {
    pub code: String,
    pub display_name: String,
}

/// Port for historical price bars and name lookups.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Bars for `symbol` over `range` at `interval` (chart-API style
    /// strings, e.g. range "1d" / interval "1m").
    async fn bars(&self, symbol: &str, range: &str, interval: &str)
        -> Result<Vec<Bar>, WatchError>;

    /// Display name for `symbol`. Infallible by contract: adapters fall
    /// back to the code itself when the lookup fails.
    async fn quote(&self, symbol: &str) -> Quote;
}
