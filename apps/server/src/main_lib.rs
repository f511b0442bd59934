use std::sync::Arc;

use coinfolio_core::{
    assets::AssetCatalog,
    broker::SwyftxClient,
    cache::SystemClock,
    market::{MarketService, MarketServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    prices::CoinGeckoProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub market_service: Arc<dyn MarketServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let catalog = Arc::new(AssetCatalog::new());
    let clock = Arc::new(SystemClock);
    let broker = Arc::new(SwyftxClient::with_base_url(
        config.swyftx_api_key.clone(),
        config.swyftx_base_url.clone(),
    ));
    let provider = Arc::new(CoinGeckoProvider::with_base_url(
        config.coingecko_base_url.clone(),
    ));

    let portfolio_service = Arc::new(PortfolioService::new(
        broker.clone(),
        provider,
        catalog,
        clock,
    ));
    let market_service = Arc::new(MarketService::new(broker));

    Arc::new(AppState {
        portfolio_service,
        market_service,
    })
}
