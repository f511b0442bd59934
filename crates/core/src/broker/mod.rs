//! Brokerage (Swyftx) client module.

mod broker_model;
mod broker_traits;
mod swyftx_client;

// Re-export the public interface
pub use broker_model::{BalanceEntry, BrokerAsset, LiveRate, RawBalance};
pub use broker_traits::BrokerApi;
pub use swyftx_client::SwyftxClient;
