//! Coinfolio Core - portfolio aggregation domain logic.
//!
//! This crate contains everything needed to value a Swyftx portfolio:
//! the static asset catalog, the brokerage client, CoinGecko price
//! resolution, the aggregation step, and the single-slot result cache.
//! It has no HTTP server dependency; the `coinfolio-server` app wires
//! these services behind an axum router.

pub mod assets;
pub mod broker;
pub mod cache;
pub mod constants;
pub mod errors;
pub mod market;
pub mod portfolio;
pub mod prices;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
