pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::application::dispatch::DispatchUseCase;
use crate::application::evaluate::EvaluateWatchlistUseCase;
use crate::application::overnight::OvernightSignalUseCase;
use crate::application::run::{RunPipelineUseCase, RunReport};
use crate::application::select::SelectWatchlistUseCase;
use crate::config::AppConfig;
use crate::domain::entities::watchlist::Watchlist;
use crate::domain::error::WatchError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::ranked_source::RankedSource;
use crate::infrastructure::feeds::twse::TwseRankedSource;
use crate::infrastructure::feeds::yahoo::YahooMarketData;
use crate::infrastructure::notify::discord::DiscordNotifier;

/// Facade wiring the ports to the use cases. Construct once per
/// invocation; holds no state beyond the wiring itself.
pub struct Tickwatch {
    run_uc: RunPipelineUseCase,
    select_uc: SelectWatchlistUseCase,
    overnight_uc: OvernightSignalUseCase,
}

impl Tickwatch {
    /// Wires the production adapters. Fails fast when the notification
    /// endpoint is not configured — a run that cannot deliver is useless.
    pub fn new(config: AppConfig) -> Result<Self, WatchError> {
        if config.webhook_url.is_empty() {
            return Err(WatchError::ConfigurationMissing("TICKWATCH_WEBHOOK".into()));
        }
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let market: Arc<dyn MarketData> = Arc::new(YahooMarketData::new(timeout));
        let ranked: Arc<dyn RankedSource> = Arc::new(TwseRankedSource::new(timeout));
        let notifier: Arc<dyn Notifier> =
            Arc::new(DiscordNotifier::new(config.webhook_url.clone(), timeout));
        Ok(Self::with_ports(&config, market, ranked, notifier))
    }

    /// Test seam: wire arbitrary port implementations.
    pub fn with_ports(
        config: &AppConfig,
        market: Arc<dyn MarketData>,
        ranked: Arc<dyn RankedSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let offset = config.market_offset();
        let select = SelectWatchlistUseCase::new(
            ranked.clone(),
            market.clone(),
            config.price_ceiling,
            config.quota,
        );
        let overnight =
            OvernightSignalUseCase::new(market.clone(), config.proxy_symbol.clone());
        let evaluate = EvaluateWatchlistUseCase::new(market.clone());
        let dispatch = DispatchUseCase::new(notifier, offset);

        Self {
            run_uc: RunPipelineUseCase::new(select, overnight, evaluate, dispatch, offset),
            select_uc: SelectWatchlistUseCase::new(
                ranked,
                market.clone(),
                config.price_ceiling,
                config.quota,
            ),
            overnight_uc: OvernightSignalUseCase::new(market, config.proxy_symbol.clone()),
        }
    }

    /// Full regime-appropriate pipeline for the given instant.
    pub async fn run(&self, now_utc: DateTime<Utc>, manual: bool) -> RunReport {
        self.run_uc.execute(now_utc, manual).await
    }

    /// Today's selection, without evaluating or dispatching.
    pub async fn watchlist(&self) -> Watchlist {
        self.select_uc.execute().await
    }

    /// Overnight proxy move in percent (0.0 when unavailable).
    pub async fn overnight_move(&self) -> f64 {
        self.overnight_uc.execute().await
    }
}
