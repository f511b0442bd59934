//! Brokerage API trait definition.

use async_trait::async_trait;

use crate::errors::Result;

use super::{BalanceEntry, BrokerAsset, LiveRate};

/// Read-only access to the brokerage API.
///
/// Implemented by [`SwyftxClient`](super::SwyftxClient) in production and
/// by hand-rolled mocks in tests.
#[async_trait]
pub trait BrokerApi: Send + Sync {
    /// Authenticate and return the user's balances, filtered to entries
    /// with a strictly positive available quantity.
    ///
    /// The short-lived access token is obtained, used once, and
    /// discarded; it is never cached across calls.
    async fn fetch_balances(&self) -> Result<Vec<BalanceEntry>>;

    /// All assets the brokerage lists.
    async fn fetch_assets(&self) -> Result<Vec<BrokerAsset>>;

    /// Live market rates for all listed assets.
    async fn fetch_live_rates(&self) -> Result<Vec<LiveRate>>;
}
