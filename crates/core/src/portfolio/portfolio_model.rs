//! Portfolio response models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assets::AssetId;

/// One valued holding in the portfolio response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioLineItem {
    pub asset_id: AssetId,
    pub code: String,
    pub name: String,
    /// Held quantity.
    pub balance: f64,
    /// Value in AUD.
    pub value_primary: f64,
    /// Value in USD, via the fixed approximate conversion factor.
    pub value_secondary: f64,
    /// 24h percentage change of the asset's price.
    pub change_24h: f64,
    /// Display color for the frontend.
    pub color: String,
}

/// The consolidated portfolio valuation. This is the cached artifact
/// and the body of `GET /api/portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_primary_value: f64,
    pub total_secondary_value: f64,
    /// Value-weighted average of the line items' 24h changes.
    pub total_change_24h: f64,
    /// Line items sorted by value descending.
    pub assets: Vec<PortfolioLineItem>,
    /// When this summary was computed.
    pub last_updated: DateTime<Utc>,
}
