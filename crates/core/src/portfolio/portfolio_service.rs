//! The portfolio valuation pipeline behind the result cache.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::assets::{AssetCatalog, AssetId};
use crate::broker::BrokerApi;
use crate::cache::{Clock, ResultCache};
use crate::constants::PORTFOLIO_CACHE_TTL;
use crate::errors::Result;
use crate::prices::{PriceProvider, PriceResolver};

use super::{aggregate, PortfolioSummary};

/// Computes consolidated portfolio summaries on demand.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Return the current portfolio summary, recomputing it only when
    /// the cached one has expired.
    async fn get_portfolio(&self) -> Result<PortfolioSummary>;
}

/// Production pipeline: broker balances, resolved prices, aggregation,
/// single-slot TTL cache.
pub struct PortfolioService {
    broker: Arc<dyn BrokerApi>,
    resolver: PriceResolver,
    catalog: Arc<AssetCatalog>,
    cache: ResultCache<PortfolioSummary>,
    clock: Arc<dyn Clock>,
}

impl PortfolioService {
    pub fn new(
        broker: Arc<dyn BrokerApi>,
        provider: Arc<dyn PriceProvider>,
        catalog: Arc<AssetCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver: PriceResolver::new(catalog.clone(), provider),
            cache: ResultCache::new(PORTFOLIO_CACHE_TTL, clock.clone()),
            broker,
            catalog,
            clock,
        }
    }

    /// Run the full pipeline once. Price resolution depends on the set
    /// of held assets, so it always follows the balance fetch.
    async fn compute(&self) -> Result<PortfolioSummary> {
        let balances = self.broker.fetch_balances().await?;
        let held: HashSet<AssetId> = balances.iter().map(|b| b.asset_id).collect();
        let prices = self.resolver.resolve(&held).await?;
        Ok(aggregate(&self.catalog, &balances, &prices, self.clock.now()))
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self) -> Result<PortfolioSummary> {
        if let Some(summary) = self.cache.get_fresh() {
            tracing::debug!("portfolio cache hit");
            return Ok(summary);
        }

        // Errors propagate here without touching the cache slot
        let summary = self.compute().await?;
        self.cache.store(summary.clone());
        tracing::info!(
            assets = summary.assets.len(),
            total = summary.total_primary_value,
            "portfolio recomputed"
        );
        Ok(summary)
    }
}
