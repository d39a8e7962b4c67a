//! # Jupiter Quote API
//!
//! Quote API integration for getting swap quotes from Jupiter.

use super::client::{status_text, JupiterHttpClient};
use super::types::QuoteResponse;
use lib_core::{Result, SwapError};
use tracing::{debug, info};

impl JupiterHttpClient {
    /// Get a swap quote from Jupiter Aggregator V6
    ///
    /// One GET, no retry. Any non-success status becomes
    /// [`SwapError::QuoteFetch`] carrying the status text.
    pub async fn get_swap_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<QuoteResponse> {
        let url = self.endpoint("quote");
        let amount = amount.to_string();
        let slippage_bps = slippage_bps.to_string();

        debug!(
            %url,
            input_mint,
            output_mint,
            %amount,
            %slippage_bps,
            "Jupiter swap quote request"
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("inputMint", input_mint),
                ("outputMint", output_mint),
                ("amount", amount.as_str()),
                ("slippageBps", slippage_bps.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SwapError::QuoteFetch {
                status: format!("request failed: {}", e),
                body: String::new(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SwapError::QuoteFetch {
            status: format!("failed to read body: {}", e),
            body: String::new(),
        })?;

        if !status.is_success() {
            return Err(SwapError::QuoteFetch {
                status: status_text(status),
                body,
            });
        }

        let quote: QuoteResponse = serde_json::from_str(&body).map_err(|e| SwapError::QuoteFetch {
            status: format!("invalid quote response: {}", e),
            body: body.clone(),
        })?;

        info!(
            in_amount = %quote.in_amount,
            out_amount = %quote.out_amount,
            price_impact_pct = %quote.price_impact_pct,
            route = ?quote.route_labels(),
            "Quote received"
        );
        debug!("Quote Response: {}", body);

        Ok(quote)
    }
}
