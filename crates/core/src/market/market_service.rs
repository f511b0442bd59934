//! Market overview and per-asset detail over the broker's public data.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::assets::AssetId;
use crate::broker::{BrokerApi, BrokerAsset};
use crate::constants::MARKET_OVERVIEW_LIMIT;
use crate::errors::{Error, Result};

use super::{AssetDetail, MarketEntry};

/// Market data queries that do not involve the user's holdings.
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    /// Top assets by 24h volume, at most [`MARKET_OVERVIEW_LIMIT`] rows.
    async fn get_market_overview(&self) -> Result<Vec<MarketEntry>>;

    /// Detail for one asset, looked up by code case-insensitively.
    async fn get_asset_detail(&self, code: &str) -> Result<AssetDetail>;
}

pub struct MarketService {
    broker: Arc<dyn BrokerApi>,
}

impl MarketService {
    pub fn new(broker: Arc<dyn BrokerApi>) -> Self {
        Self { broker }
    }

    /// Assets and rates have no data dependency, so fetch them
    /// concurrently.
    async fn fetch_assets_and_rates(
        &self,
    ) -> Result<(Vec<BrokerAsset>, Vec<crate::broker::LiveRate>)> {
        futures::try_join!(self.broker.fetch_assets(), self.broker.fetch_live_rates())
    }
}

#[async_trait]
impl MarketServiceTrait for MarketService {
    async fn get_market_overview(&self) -> Result<Vec<MarketEntry>> {
        let (assets, rates) = self.fetch_assets_and_rates().await?;
        let assets_by_id: HashMap<AssetId, &BrokerAsset> =
            assets.iter().map(|a| (a.id, a)).collect();

        let mut entries: Vec<MarketEntry> = rates
            .iter()
            .map(|rate| {
                let info = assets_by_id.get(&rate.asset);
                MarketEntry {
                    asset_id: rate.asset,
                    code: info
                        .map(|a| a.code.clone())
                        .unwrap_or_else(|| "UNKNOWN".to_string()),
                    name: info
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    last_price: rate.bid.unwrap_or(0.0),
                    change_24h: rate.change_24h.unwrap_or(0.0),
                    change_7d: rate.change_7d,
                    volume_24h: rate.volume_24h.unwrap_or(0.0),
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.volume_24h
                .partial_cmp(&a.volume_24h)
                .unwrap_or(Ordering::Equal)
        });
        entries.truncate(MARKET_OVERVIEW_LIMIT);
        Ok(entries)
    }

    async fn get_asset_detail(&self, code: &str) -> Result<AssetDetail> {
        let (assets, rates) = self.fetch_assets_and_rates().await?;

        let asset = assets
            .iter()
            .find(|a| a.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::NotFound(format!("asset {}", code)))?;
        let rate = rates.iter().find(|r| r.asset == asset.id);

        Ok(AssetDetail {
            asset_id: asset.id,
            code: asset.code.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            current_price_aud: rate.and_then(|r| r.bid),
            current_price_usd: rate.and_then(|r| r.bid_usd),
            change_24h: rate.and_then(|r| r.change_24h),
            change_7d: rate.and_then(|r| r.change_7d),
            high_24h: rate.and_then(|r| r.high_24h),
            low_24h: rate.and_then(|r| r.low_24h),
            volume_24h: rate.and_then(|r| r.volume_24h),
        })
    }
}
