use crate::domain::error::WatchError;
use async_trait::async_trait;

/// One row of the ranked daily trade-volume listing, already validated at
/// the adapter boundary. `open_price` is None for rows whose price field
/// was missing, unparsable, or the "no trade" sentinel.
#[derive(Debug, Clone)]
pub struct RankedRecord {
    /// Bare exchange code, e.g. "2409". ETF/warrant codes are longer.
    pub code: String,
    pub name: String,
    pub open_price: Option<f64>,
}

/// Port for the ranked-list data source used to seed the watchlist.
#[async_trait]
pub trait RankedSource: Send + Sync {
    /// Today's top-traded instruments, in source (rank) order.
    async fn top_traded(&self) -> Result<Vec<RankedRecord>, WatchError>;
}
