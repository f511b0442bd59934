//! Joins balances with resolved prices into a portfolio summary.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::assets::{AssetCatalog, AssetId};
use crate::broker::BalanceEntry;
use crate::constants::AUD_TO_USD_RATE;
use crate::prices::ResolvedPrice;

use super::{PortfolioLineItem, PortfolioSummary};

/// Compute the portfolio summary for the given balances and prices.
///
/// A balance produces a line item only when its quantity is strictly
/// positive and both a catalog descriptor and a resolved price exist;
/// anything else is skipped without error. Line items are sorted by AUD
/// value descending, with ties keeping their encounter order.
pub fn aggregate(
    catalog: &AssetCatalog,
    balances: &[BalanceEntry],
    prices: &HashMap<AssetId, ResolvedPrice>,
    now: DateTime<Utc>,
) -> PortfolioSummary {
    let mut assets = Vec::with_capacity(balances.len());

    for balance in balances {
        if balance.quantity <= 0.0 {
            continue;
        }
        let Some(descriptor) = catalog.get(balance.asset_id) else {
            continue;
        };
        let Some(resolved) = prices.get(&balance.asset_id) else {
            continue;
        };

        let value = balance.quantity * resolved.price;
        assets.push(PortfolioLineItem {
            asset_id: balance.asset_id,
            code: descriptor.code.to_string(),
            name: descriptor.name.to_string(),
            balance: balance.quantity,
            value_primary: value,
            value_secondary: value * AUD_TO_USD_RATE,
            change_24h: resolved.change_24h,
            color: descriptor.color.to_string(),
        });
    }

    let total: f64 = assets.iter().map(|a| a.value_primary).sum();
    let total_change_24h = if total > 0.0 {
        assets
            .iter()
            .map(|a| a.value_primary * a.change_24h)
            .sum::<f64>()
            / total
    } else {
        0.0
    };

    // sort_by is stable, ties keep encounter order
    assets.sort_by(|a, b| {
        b.value_primary
            .partial_cmp(&a.value_primary)
            .unwrap_or(Ordering::Equal)
    });

    PortfolioSummary {
        total_primary_value: total,
        total_secondary_value: total * AUD_TO_USD_RATE,
        total_change_24h,
        assets,
        last_updated: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices::PriceProvenance;

    const EPSILON: f64 = 1e-9;

    fn balance(id: i64, quantity: f64) -> BalanceEntry {
        BalanceEntry {
            asset_id: AssetId(id),
            quantity,
        }
    }

    fn price(id: i64, price: f64, change_24h: f64, provenance: PriceProvenance) -> ResolvedPrice {
        ResolvedPrice {
            asset_id: AssetId(id),
            price,
            change_24h,
            provenance,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_btc_plus_aud_scenario() {
        let catalog = AssetCatalog::new();
        let balances = vec![balance(3, 0.5), balance(1, 100.0)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(3), price(3, 90_000.0, 2.0, PriceProvenance::External));
        prices.insert(AssetId(1), price(1, 1.0, 0.0, PriceProvenance::Fixed));

        let summary = aggregate(&catalog, &balances, &prices, now());

        assert!((summary.total_primary_value - 45_100.0).abs() < EPSILON);
        assert!((summary.total_secondary_value - 45_100.0 * 0.65).abs() < EPSILON);
        assert_eq!(summary.assets.len(), 2);
        // BTC (45000) sorts before AUD (100)
        assert_eq!(summary.assets[0].code, "BTC");
        assert_eq!(summary.assets[1].code, "AUD");
        // Weighted change: 45000 * 2.0 / 45100
        let expected_change = 45_000.0 * 2.0 / 45_100.0;
        assert!((summary.total_change_24h - expected_change).abs() < EPSILON);
        assert_eq!(summary.last_updated, now());
    }

    #[test]
    fn test_empty_balances_produce_zero_totals() {
        let catalog = AssetCatalog::new();
        let summary = aggregate(&catalog, &[], &HashMap::new(), now());

        assert_eq!(summary.total_primary_value, 0.0);
        assert_eq!(summary.total_secondary_value, 0.0);
        assert_eq!(summary.total_change_24h, 0.0);
        assert!(summary.assets.is_empty());
    }

    #[test]
    fn test_non_positive_balances_are_skipped() {
        let catalog = AssetCatalog::new();
        let balances = vec![balance(3, 0.0), balance(1, -5.0)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(3), price(3, 90_000.0, 0.0, PriceProvenance::External));
        prices.insert(AssetId(1), price(1, 1.0, 0.0, PriceProvenance::Fixed));

        let summary = aggregate(&catalog, &balances, &prices, now());

        assert!(summary.assets.is_empty());
        assert_eq!(summary.total_primary_value, 0.0);
    }

    #[test]
    fn test_unpriced_assets_are_dropped_silently() {
        let catalog = AssetCatalog::new();
        // ETH held but no resolved price for it
        let balances = vec![balance(5, 10.0), balance(1, 50.0)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(1), price(1, 1.0, 0.0, PriceProvenance::Fixed));

        let summary = aggregate(&catalog, &balances, &prices, now());

        assert_eq!(summary.assets.len(), 1);
        assert_eq!(summary.assets[0].code, "AUD");
        assert!((summary.total_primary_value - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_total_equals_sum_of_line_items() {
        let catalog = AssetCatalog::new();
        let balances = vec![balance(3, 0.25), balance(5, 2.0), balance(1, 33.5)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(3), price(3, 91_234.5, 1.2, PriceProvenance::External));
        prices.insert(AssetId(5), price(5, 4_321.0, -0.7, PriceProvenance::External));
        prices.insert(AssetId(1), price(1, 1.0, 0.0, PriceProvenance::Fixed));

        let summary = aggregate(&catalog, &balances, &prices, now());

        let item_sum: f64 = summary.assets.iter().map(|a| a.value_primary).sum();
        assert!((summary.total_primary_value - item_sum).abs() < EPSILON);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let catalog = AssetCatalog::new();
        // Two assets with identical values; encounter order must hold
        let balances = vec![balance(3, 1.0), balance(5, 2.0)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(3), price(3, 100.0, 0.0, PriceProvenance::External));
        prices.insert(AssetId(5), price(5, 50.0, 0.0, PriceProvenance::External));

        let summary = aggregate(&catalog, &balances, &prices, now());

        assert_eq!(summary.assets[0].code, "BTC");
        assert_eq!(summary.assets[1].code, "ETH");
        assert_eq!(summary.assets[0].value_primary, summary.assets[1].value_primary);
    }

    #[test]
    fn test_weighted_change_is_zero_for_zero_total() {
        let catalog = AssetCatalog::new();
        let balances = vec![balance(3, 0.0)];
        let mut prices = HashMap::new();
        prices.insert(AssetId(3), price(3, 90_000.0, 5.0, PriceProvenance::External));

        let summary = aggregate(&catalog, &balances, &prices, now());

        assert_eq!(summary.total_change_24h, 0.0);
    }
}
