//! CoinGecko simple-price provider.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::constants::{COINGECKO_BASE_URL, UPSTREAM_REQUEST_TIMEOUT};
use crate::errors::{Error, Result};

use super::{PriceProvider, QuotedPrice};

const UPSTREAM_NAME: &str = "coingecko";

/// Provider backed by CoinGecko's `/api/v3/simple/price` endpoint.
///
/// All held lookup ids go into a single comma-separated call, which
/// keeps latency bounded and stays clear of CoinGecko's rate limits
/// regardless of portfolio size.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider against the public CoinGecko API.
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_BASE_URL.to_string())
    }

    /// Create a provider against a custom base URL (tests, proxies).
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    async fn simple_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<HashMap<String, QuotedPrice>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let joined = ids.join(",");
        let response = self
            .client
            .get(format!("{}/api/v3/simple/price", self.base_url))
            .query(&[
                ("ids", joined.as_str()),
                ("vs_currencies", vs_currency),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamFetch {
                upstream: UPSTREAM_NAME.to_string(),
                status: Some(status.as_u16()),
                message: "simple price lookup failed".to_string(),
            });
        }

        // Response shape: {"bitcoin": {"aud": 90000.0, "aud_24h_change": 2.0}, ...}
        let body: HashMap<String, HashMap<String, f64>> = response.json().await?;
        let change_key = format!("{}_24h_change", vs_currency);

        let mut quotes = HashMap::with_capacity(body.len());
        for (id, fields) in body {
            let Some(price) = fields.get(vs_currency).copied() else {
                continue;
            };
            let change_24h = fields.get(&change_key).copied().unwrap_or(0.0);
            quotes.insert(id, QuotedPrice { price, change_24h });
        }

        tracing::debug!(
            requested = ids.len(),
            resolved = quotes.len(),
            "coingecko simple price lookup"
        );
        Ok(quotes)
    }
}
