//! Market data response models.

use serde::Serialize;

use crate::assets::AssetId;

/// One row of the market overview, ordered by 24h volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketEntry {
    pub asset_id: AssetId,
    pub code: String,
    pub name: String,
    pub last_price: f64,
    pub change_24h: f64,
    pub change_7d: Option<f64>,
    pub volume_24h: f64,
}

/// Detail view for a single asset looked up by code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDetail {
    pub asset_id: AssetId,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub current_price_aud: Option<f64>,
    pub current_price_usd: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub volume_24h: Option<f64>,
}
