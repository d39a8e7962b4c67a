//! # Jupiter Swap Transaction Building
//!
//! Swap transaction building from Jupiter quotes.

use super::client::{status_text, JupiterHttpClient};
use super::types::{QuoteResponse, RawSwapResponse, SwapRequest, SwapTransactionResponse};
use lib_core::{Result, SwapError};
use tracing::debug;

impl JupiterHttpClient {
    /// Build an unsigned swap transaction from a quote
    ///
    /// Compute-unit limit and priority fee are left to Jupiter
    /// (`dynamicComputeUnitLimit`, `prioritizationFeeLamports: "auto"`).
    pub async fn get_swap_transaction(
        &self,
        quote_response: &QuoteResponse,
        user_public_key: &str,
    ) -> Result<SwapTransactionResponse> {
        let url = self.endpoint("swap");
        let request_body = SwapRequest::new(quote_response, user_public_key);

        debug!("Jupiter swap transaction request for user: {}", user_public_key);

        let response = self
            .http
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SwapError::SwapBuild(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SwapError::SwapBuild(format!("{}: {}", status_text(status), error_text)));
        }

        let raw: RawSwapResponse = response
            .json()
            .await
            .map_err(|e| SwapError::SwapBuild(format!("invalid swap response: {}", e)))?;

        let swap_transaction = match raw.swap_transaction {
            Some(tx) if !tx.trim().is_empty() => tx,
            _ => {
                let reason = raw.error.unwrap_or_else(|| "swapTransaction missing from response".to_string());
                return Err(SwapError::SwapBuild(reason));
            }
        };

        debug!(
            last_valid_block_height = ?raw.last_valid_block_height,
            prioritization_fee_lamports = ?raw.prioritization_fee_lamports,
            "Jupiter swap transaction received"
        );

        Ok(SwapTransactionResponse {
            swap_transaction,
            last_valid_block_height: raw.last_valid_block_height,
            prioritization_fee_lamports: raw.prioritization_fee_lamports,
        })
    }
}
