//! Swyftx brokerage client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::constants::{SWYFTX_BASE_URL, UPSTREAM_REQUEST_TIMEOUT};
use crate::errors::{Error, Result};

use super::broker_model::AuthResponse;
use super::{BalanceEntry, BrokerApi, BrokerAsset, LiveRate, RawBalance};

const UPSTREAM_NAME: &str = "swyftx";

/// HTTP client for the Swyftx API.
pub struct SwyftxClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SwyftxClient {
    /// Create a client against the production Swyftx API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, SWYFTX_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (tests, staging).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Exchange the static API key for a short-lived access token.
    async fn authenticate(&self) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/auth/refresh/", self.base_url))
            .json(&json!({ "apiKey": self.api_key }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamAuth {
                upstream: UPSTREAM_NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let auth: AuthResponse = response.json().await?;
        Ok(auth.access_token)
    }

    async fn get_json<T>(&self, path: &str, token: Option<&str>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamFetch {
                upstream: UPSTREAM_NAME.to_string(),
                status: Some(status.as_u16()),
                message: format!("GET {} failed", path),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BrokerApi for SwyftxClient {
    async fn fetch_balances(&self) -> Result<Vec<BalanceEntry>> {
        let token = self.authenticate().await?;
        let raw: Vec<RawBalance> = self.get_json("/user/balance/", Some(&token)).await?;

        let balances: Vec<BalanceEntry> = raw
            .into_iter()
            .filter(|b| b.available_balance > 0.0)
            .map(|b| BalanceEntry {
                asset_id: b.asset_id,
                quantity: b.available_balance,
            })
            .collect();

        tracing::debug!(count = balances.len(), "fetched positive balances");
        Ok(balances)
    }

    async fn fetch_assets(&self) -> Result<Vec<BrokerAsset>> {
        self.get_json("/markets/assets/", None).await
    }

    async fn fetch_live_rates(&self) -> Result<Vec<LiveRate>> {
        self.get_json("/live/rates/", None).await
    }
}
