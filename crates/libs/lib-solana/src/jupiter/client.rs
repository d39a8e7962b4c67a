//! # Jupiter HTTP Client
//!
//! HTTP client wrapper for the Jupiter Aggregator API.

use lib_core::{Result, SwapError};
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper for Jupiter API
#[derive(Debug, Clone)]
pub struct JupiterHttpClient {
    pub http: Client,
    /// Base URL including the API version, e.g. `https://quote-api.jup.ag/v6`
    pub api_base: String,
}

impl JupiterHttpClient {
    /// Create a new HTTP client with timeout configuration
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SwapError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }
}

/// Status text for error messages, e.g. "Bad Request".
pub(crate) fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
