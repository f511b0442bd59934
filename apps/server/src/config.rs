use std::net::SocketAddr;

use coinfolio_core::constants::{COINGECKO_BASE_URL, SWYFTX_BASE_URL};
use coinfolio_core::{Error, Result};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub swyftx_api_key: String,
    pub swyftx_base_url: String,
    pub coingecko_base_url: String,
    pub cors_allow: Vec<String>,
}

impl Config {
    /// Read configuration from the environment. The brokerage API key
    /// is the one required secret; its absence fails startup.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let swyftx_api_key = std::env::var("SWYFTX_API_KEY")
            .map_err(|_| Error::Config("SWYFTX_API_KEY environment variable not set".into()))?;
        let listen_addr: SocketAddr = std::env::var("CF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid CF_LISTEN_ADDR".into()))?;
        let swyftx_base_url =
            std::env::var("CF_SWYFTX_BASE_URL").unwrap_or_else(|_| SWYFTX_BASE_URL.into());
        let coingecko_base_url =
            std::env::var("CF_COINGECKO_BASE_URL").unwrap_or_else(|_| COINGECKO_BASE_URL.into());
        let cors_allow = std::env::var("CF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            swyftx_api_key,
            swyftx_base_url,
            coingecko_base_url,
            cors_allow,
        })
    }
}
