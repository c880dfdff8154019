pub mod symbol;
pub mod watchlist;
