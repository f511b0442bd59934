//! Market data module - broker-wide rates, not user holdings.

mod market_model;
mod market_service;

// Re-export the public interface
pub use market_model::{AssetDetail, MarketEntry};
pub use market_service::{MarketService, MarketServiceTrait};
