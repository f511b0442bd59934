//! Configuration constants shared across the pipeline.

use std::time::Duration;

/// How long a computed portfolio summary stays fresh.
pub const PORTFOLIO_CACHE_TTL: Duration = Duration::from_secs(60);

/// Timeout applied to every outbound HTTP call. Calls that exceed it
/// fail the current request; there is no retry.
pub const UPSTREAM_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Approximate AUD to USD factor for the secondary valuation.
/// Not a live FX rate; a known approximation kept until a real
/// rate source is introduced.
pub const AUD_TO_USD_RATE: f64 = 0.65;

/// Currency the external price provider quotes against.
pub const VS_CURRENCY: &str = "aud";

/// Number of rows returned by the market overview endpoint.
pub const MARKET_OVERVIEW_LIMIT: usize = 50;

/// Default Swyftx API base URL.
pub const SWYFTX_BASE_URL: &str = "https://api.swyftx.com.au";

/// Default CoinGecko API base URL.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";
