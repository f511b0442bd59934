//! Wire models for the Swyftx API.
//!
//! Swyftx serialises most numeric fields as strings; the deserializers
//! here accept either form.

use serde::{Deserialize, Deserializer};

use crate::assets::AssetId;

/// Response to the token refresh call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    pub access_token: String,
}

/// One entry of the raw `/user/balance/` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalance {
    pub asset_id: AssetId,
    #[serde(deserialize_with = "de_string_or_f64")]
    pub available_balance: f64,
}

/// A positive holding, as produced by the balance fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceEntry {
    pub asset_id: AssetId,
    pub quantity: f64,
}

/// One entry of the `/markets/assets/` list.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerAsset {
    pub id: AssetId,
    pub code: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub asset_type: Option<String>,
}

/// One entry of the `/live/rates/` list. Field names follow the wire
/// format, which is snake_case unlike the balance payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveRate {
    pub asset: AssetId,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub bid: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub bid_usd: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub change_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub change_7d: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub high_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub low_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string_or_f64")]
    pub volume_24h: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

fn de_string_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(v) => Ok(v),
        NumOrStr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn de_opt_string_or_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrStr::Num(v)) => Ok(Some(v)),
        Some(NumOrStr::Str(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_balance_accepts_numeric_quantity() {
        let raw: RawBalance =
            serde_json::from_str(r#"{"assetId": 3, "availableBalance": 0.5}"#).unwrap();
        assert_eq!(raw.asset_id, AssetId(3));
        assert_eq!(raw.available_balance, 0.5);
    }

    #[test]
    fn test_raw_balance_accepts_string_quantity() {
        let raw: RawBalance =
            serde_json::from_str(r#"{"assetId": 1, "availableBalance": "100.25"}"#).unwrap();
        assert_eq!(raw.available_balance, 100.25);
    }

    #[test]
    fn test_live_rate_missing_fields_default_to_none() {
        let rate: LiveRate = serde_json::from_str(r#"{"asset": 3, "bid": "90000"}"#).unwrap();
        assert_eq!(rate.asset, AssetId(3));
        assert_eq!(rate.bid, Some(90000.0));
        assert!(rate.volume_24h.is_none());
        assert!(rate.change_24h.is_none());
    }

    #[test]
    fn test_broker_asset_type_field() {
        let asset: BrokerAsset = serde_json::from_str(
            r#"{"id": 3, "code": "BTC", "name": "Bitcoin", "type": "crypto"}"#,
        )
        .unwrap();
        assert_eq!(asset.asset_type.as_deref(), Some("crypto"));
    }
}
