//! Portfolio valuation module.
//!
//! The pipeline: check the result cache, fetch balances, resolve prices
//! for the held assets, aggregate, store, return.

mod aggregator;
mod portfolio_model;
mod portfolio_service;


// Re-export the public interface
pub use aggregator::aggregate;
pub use portfolio_model::{PortfolioLineItem, PortfolioSummary};
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
