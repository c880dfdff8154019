pub mod market_data;
pub mod notifier;
pub mod ranked_source;
