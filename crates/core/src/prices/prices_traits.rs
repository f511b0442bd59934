//! External price provider trait definition.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::Result;

use super::QuotedPrice;

/// Batched price lookup against an external market-data provider.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch prices for the given lookup ids in one call.
    ///
    /// Ids absent from the provider's response are simply missing from
    /// the returned map; the caller treats "no entry" as "cannot value
    /// this asset", not as an error. Only a failure of the call itself
    /// is an error.
    async fn simple_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<HashMap<String, QuotedPrice>>;
}
