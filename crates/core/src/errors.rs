//! Core error types for the aggregation pipeline.
//!
//! Every error here is terminal for the current request: nothing is
//! retried, and a failed pipeline run never overwrites the result cache.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio aggregation service.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The brokerage rejected the authentication call.
    #[error("Upstream auth failed: {upstream} returned {status}")]
    UpstreamAuth {
        /// The upstream that rejected the credential
        upstream: String,
        /// HTTP status returned by the upstream
        status: u16,
    },

    /// An outbound data call returned a non-2xx status.
    #[error("Upstream fetch failed: {upstream}: {message}")]
    UpstreamFetch {
        /// The upstream that failed
        upstream: String,
        /// HTTP status returned by the upstream, when one was received
        status: Option<u16>,
        /// Description of the failing call
        message: String,
    },

    /// A lookup by asset code found no match.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A network error occurred while communicating with an upstream.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Status code reported by the upstream, when one exists.
    ///
    /// The HTTP layer echoes this status to the caller; errors without
    /// one surface as a generic 502.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamAuth { status, .. } => Some(*status),
            Self::UpstreamFetch { status, .. } => *status,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_reports_status() {
        let error = Error::UpstreamAuth {
            upstream: "swyftx".to_string(),
            status: 401,
        };
        assert_eq!(error.upstream_status(), Some(401));
    }

    #[test]
    fn test_fetch_error_without_status() {
        let error = Error::UpstreamFetch {
            upstream: "coingecko".to_string(),
            status: None,
            message: "connection reset".to_string(),
        };
        assert_eq!(error.upstream_status(), None);
    }

    #[test]
    fn test_error_display() {
        let error = Error::UpstreamAuth {
            upstream: "swyftx".to_string(),
            status: 401,
        };
        assert_eq!(
            format!("{}", error),
            "Upstream auth failed: swyftx returned 401"
        );

        let error = Error::NotFound("asset XYZ".to_string());
        assert_eq!(format!("{}", error), "Not found: asset XYZ");
    }
}
