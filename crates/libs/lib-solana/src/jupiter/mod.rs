//! # Jupiter Aggregator Client
//!
//! Integration with Jupiter Aggregator v6 for swap quotes and prebuilt swap
//! transactions.

// region: --- Modules
pub mod types;
pub mod client;
pub mod quote;
pub mod swap;
// endregion: --- Modules

// region: --- Main Client
use client::JupiterHttpClient;
use lib_core::Result;
use std::time::Duration;

/// Default Jupiter v6 API base.
pub const DEFAULT_API_BASE: &str = "https://quote-api.jup.ag/v6";

/// Builder for configuring JupiterClient.
///
/// Allows fluent configuration of client settings before building.
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    timeout: Option<Duration>,
    api_base: Option<String>,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(10)),
            api_base: Some(DEFAULT_API_BASE.to_string()),
        }
    }
}

impl JupiterClientBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the API base URL (including the version segment).
    pub fn api_base(mut self, url: String) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Build the JupiterClient with configured settings.
    pub fn build(self) -> Result<JupiterClient> {
        let inner = JupiterHttpClient::new(
            self.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            self.timeout.unwrap_or_else(|| Duration::from_secs(10)),
        )?;

        Ok(JupiterClient { inner })
    }
}

/// Client for Jupiter Aggregator API
#[derive(Debug, Clone)]
pub struct JupiterClient {
    inner: JupiterHttpClient,
}

impl JupiterClient {
    /// Create a new Jupiter client using a builder for configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lib_solana::jupiter::JupiterClient;
    ///
    /// let client = JupiterClient::builder()
    ///     .timeout(std::time::Duration::from_secs(30))
    ///     .api_base("https://quote-api.jup.ag/v6".to_string())
    ///     .build()?;
    /// # Ok::<(), lib_core::SwapError>(())
    /// ```
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }

    // Delegate methods to inner client
    pub async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<types::QuoteResponse> {
        self.inner.get_swap_quote(input_mint, output_mint, amount, slippage_bps).await
    }

    pub async fn get_swap_transaction(
        &self,
        quote_response: &types::QuoteResponse,
        user_public_key: &str,
    ) -> Result<types::SwapTransactionResponse> {
        self.inner.get_swap_transaction(quote_response, user_public_key).await
    }
}
// endregion: --- Main Client

// Re-export commonly used types
pub use types::*;
