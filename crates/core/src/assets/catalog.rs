//! The startup-configured asset catalog.
//!
//! The catalog is the single typed mapping from [`AssetId`] to
//! [`AssetDescriptor`]. It is built once at startup and shared read-only
//! between the price resolver and the aggregator.

use std::collections::HashMap;

use super::{AssetDescriptor, AssetId};

/// Assets the service knows how to value. AUD is the only fixed-price
/// entry; everything else resolves through CoinGecko.
const DESCRIPTORS: &[AssetDescriptor] = &[
    AssetDescriptor {
        id: AssetId(1),
        code: "AUD",
        name: "Australian Dollar",
        fixed_price: Some(1.0),
        coingecko_id: None,
        color: "#0B6E4F",
    },
    AssetDescriptor {
        id: AssetId(3),
        code: "BTC",
        name: "Bitcoin",
        fixed_price: None,
        coingecko_id: Some("bitcoin"),
        color: "#F7931A",
    },
    AssetDescriptor {
        id: AssetId(5),
        code: "ETH",
        name: "Ethereum",
        fixed_price: None,
        coingecko_id: Some("ethereum"),
        color: "#627EEA",
    },
    AssetDescriptor {
        id: AssetId(7),
        code: "XRP",
        name: "XRP",
        fixed_price: None,
        coingecko_id: Some("ripple"),
        color: "#23292F",
    },
    AssetDescriptor {
        id: AssetId(8),
        code: "LTC",
        name: "Litecoin",
        fixed_price: None,
        coingecko_id: Some("litecoin"),
        color: "#345D9D",
    },
    AssetDescriptor {
        id: AssetId(10),
        code: "ADA",
        name: "Cardano",
        fixed_price: None,
        coingecko_id: Some("cardano"),
        color: "#0033AD",
    },
    AssetDescriptor {
        id: AssetId(23),
        code: "LINK",
        name: "Chainlink",
        fixed_price: None,
        coingecko_id: Some("chainlink"),
        color: "#2A5ADA",
    },
    AssetDescriptor {
        id: AssetId(25),
        code: "DOGE",
        name: "Dogecoin",
        fixed_price: None,
        coingecko_id: Some("dogecoin"),
        color: "#C2A633",
    },
    AssetDescriptor {
        id: AssetId(29),
        code: "DOT",
        name: "Polkadot",
        fixed_price: None,
        coingecko_id: Some("polkadot"),
        color: "#E6007A",
    },
    AssetDescriptor {
        id: AssetId(31),
        code: "SOL",
        name: "Solana",
        fixed_price: None,
        coingecko_id: Some("solana"),
        color: "#9945FF",
    },
    AssetDescriptor {
        id: AssetId(36),
        code: "USDT",
        name: "Tether",
        fixed_price: None,
        coingecko_id: Some("tether"),
        color: "#26A17B",
    },
    AssetDescriptor {
        id: AssetId(79),
        code: "USDC",
        name: "USD Coin",
        fixed_price: None,
        coingecko_id: Some("usd-coin"),
        color: "#2775CA",
    },
];

/// Read-only lookup over the configured asset descriptors.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    by_id: HashMap<AssetId, AssetDescriptor>,
}

impl AssetCatalog {
    /// Build the catalog from the built-in descriptor table.
    pub fn new() -> Self {
        let by_id = DESCRIPTORS.iter().map(|d| (d.id, d.clone())).collect();
        Self { by_id }
    }

    /// Look up a descriptor by asset id.
    pub fn get(&self, id: AssetId) -> Option<&AssetDescriptor> {
        self.by_id.get(&id)
    }

    /// Iterate over all configured descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.by_id.values()
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
