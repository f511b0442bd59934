//! Resolves prices for the set of held assets.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use crate::assets::{AssetCatalog, AssetId};
use crate::constants::VS_CURRENCY;
use crate::errors::Result;

use super::{PriceProvenance, PriceProvider, ResolvedPrice};

/// Combines fixed catalog prices with one batched external lookup.
pub struct PriceResolver {
    catalog: Arc<AssetCatalog>,
    provider: Arc<dyn PriceProvider>,
}

impl PriceResolver {
    pub fn new(catalog: Arc<AssetCatalog>, provider: Arc<dyn PriceProvider>) -> Self {
        Self { catalog, provider }
    }

    /// Resolve an AUD price and 24h change for each held asset.
    ///
    /// Fixed-price assets are emitted directly with zero change. All
    /// remaining held assets go into a single deduplicated external
    /// lookup; assets the provider does not return are omitted from the
    /// result, never an error.
    pub async fn resolve(&self, held: &HashSet<AssetId>) -> Result<HashMap<AssetId, ResolvedPrice>> {
        let mut resolved = HashMap::with_capacity(held.len());
        // BTreeSet keeps the outbound id list deterministic
        let mut lookup_ids: BTreeSet<&'static str> = BTreeSet::new();

        for id in held {
            let Some(descriptor) = self.catalog.get(*id) else {
                continue;
            };
            if let Some(price) = descriptor.fixed_price {
                resolved.insert(
                    *id,
                    ResolvedPrice {
                        asset_id: *id,
                        price,
                        change_24h: 0.0,
                        provenance: PriceProvenance::Fixed,
                    },
                );
            } else if let Some(key) = descriptor.coingecko_id {
                lookup_ids.insert(key);
            }
        }

        if lookup_ids.is_empty() {
            return Ok(resolved);
        }

        let ids: Vec<String> = lookup_ids.iter().map(|s| s.to_string()).collect();
        let quotes = self.provider.simple_prices(&ids, VS_CURRENCY).await?;

        for id in held {
            let Some(descriptor) = self.catalog.get(*id) else {
                continue;
            };
            if descriptor.fixed_price.is_some() {
                continue;
            }
            let Some(key) = descriptor.coingecko_id else {
                continue;
            };
            if let Some(quote) = quotes.get(key) {
                resolved.insert(
                    *id,
                    ResolvedPrice {
                        asset_id: *id,
                        price: quote.price,
                        change_24h: quote.change_24h,
                        provenance: PriceProvenance::External,
                    },
                );
            }
        }

        Ok(resolved)
    }
}
