//! Price resolution models.

use crate::assets::AssetId;

/// Where a resolved price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceProvenance {
    /// Fixed price from the asset catalog (fiat).
    Fixed,
    /// Fetched from the external price provider.
    External,
}

/// Price and 24h change returned by the external provider for one
/// lookup id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotedPrice {
    pub price: f64,
    pub change_24h: f64,
}

/// AUD price resolved for one held asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPrice {
    pub asset_id: AssetId,
    /// Price in the local currency (AUD).
    pub price: f64,
    /// 24h percentage change; zero for fixed prices.
    pub change_24h: f64,
    pub provenance: PriceProvenance,
}
