//! Price resolution module.
//!
//! Held assets are valued either from a fixed catalog price (fiat) or
//! from one batched CoinGecko simple-price call (everything else).

mod coingecko;
mod prices_model;
mod prices_traits;
mod resolver;

// Re-export the public interface
pub use coingecko::CoinGeckoProvider;
pub use prices_model::{PriceProvenance, QuotedPrice, ResolvedPrice};
pub use prices_traits::PriceProvider;
pub use resolver::PriceResolver;
