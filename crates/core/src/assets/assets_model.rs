//! Asset identity and descriptor models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Swyftx-assigned numeric asset identifier.
///
/// Every upstream payload (balances, live rates) and every derived
/// artifact is keyed by this id, so it gets a dedicated newtype instead
/// of a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub i64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable description of one tradable asset.
///
/// Exactly one of `fixed_price` and `coingecko_id` should be set:
/// fiat assets carry a fixed price, crypto assets carry a CoinGecko
/// lookup id for the batched simple-price call.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDescriptor {
    pub id: AssetId,
    /// Ticker code, e.g. "BTC".
    pub code: &'static str,
    /// Display name, e.g. "Bitcoin".
    pub name: &'static str,
    /// Fixed AUD price for fiat assets. `None` means the price comes
    /// from the external provider.
    pub fixed_price: Option<f64>,
    /// CoinGecko id used in the batched simple-price lookup.
    pub coingecko_id: Option<&'static str>,
    /// Display color for the frontend.
    pub color: &'static str,
}

impl AssetDescriptor {
    /// Whether this asset is valued at a fixed price.
    pub fn has_fixed_price(&self) -> bool {
        self.fixed_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_serializes_as_plain_integer() {
        let id = AssetId(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let parsed: AssetId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_asset_id_display() {
        assert_eq!(AssetId(42).to_string(), "42");
    }
}
