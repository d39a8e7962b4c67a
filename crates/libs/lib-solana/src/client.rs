//! # Solana RPC Client
//!
//! Wrapper around the nonblocking Solana RPC client covering the two calls a
//! swap makes: raw transaction submission and signature status queries.
//!
//! ```rust,no_run
//! use lib_solana::client::SolanaClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SolanaClient::from_url("https://api.mainnet-beta.solana.com");
//!
//! let statuses = client
//!     .get_signature_statuses(&["5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW".to_string()])
//!     .await?;
//! println!("status: {:?}", statuses[0]);
//! # Ok(())
//! # }
//! ```

use crate::node::TransactionNode;
use crate::types::{SendOptions, SignatureStatus};
use async_trait::async_trait;
use lib_utils::b64::b64_encode;
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcRequest;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// High-level Solana RPC client wrapper.
///
/// A single instance is opened per run and shared between transaction
/// submission and confirmation polling.
pub struct SolanaClient {
    rpc: Arc<RpcClient>,
}

impl SolanaClient {
    /// Create a client for an explicit RPC endpoint.
    ///
    /// The connection is lazy - actual network requests only happen when
    /// methods are called.
    pub fn from_url(rpc_url: impl Into<String>) -> Self {
        let rpc_url = rpc_url.into();
        info!("🔗 Connecting to Solana RPC: {}", rpc_url);

        Self {
            rpc: Arc::new(RpcClient::new(rpc_url)),
        }
    }

    /// Submit already-signed, serialized transaction bytes.
    ///
    /// The bytes are sent base64-encoded through `sendTransaction` together
    /// with `options`. With `skip_preflight` the node skips simulation.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Transaction signature as base58 string
    /// * `Err(_)` - Transport failure or node rejection
    pub async fn send_raw_transaction(
        &self,
        raw_transaction: &[u8],
        options: &SendOptions,
    ) -> anyhow::Result<String> {
        let encoded = b64_encode(raw_transaction);

        debug!(
            bytes = raw_transaction.len(),
            skip_preflight = options.skip_preflight,
            max_retries = ?options.max_retries,
            "sendTransaction"
        );

        self.rpc
            .send::<String>(RpcRequest::SendTransaction, json!([encoded, options]))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send transaction: {}", e))
    }

    /// Query the status of one or more signatures.
    ///
    /// Returns one entry per requested signature, in request order. An entry
    /// is `None` when the node has no record of that signature yet.
    pub async fn get_signature_statuses(
        &self,
        signatures: &[String],
    ) -> anyhow::Result<Vec<Option<SignatureStatus>>> {
        let signatures = signatures
            .iter()
            .map(|s| Signature::from_str(s).map_err(|e| anyhow::anyhow!("Invalid signature {}: {}", s, e)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let response = self
            .rpc
            .get_signature_statuses(&signatures)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get signature statuses: {}", e))?;

        Ok(response
            .value
            .into_iter()
            .map(|entry| {
                entry.map(|status| SignatureStatus {
                    slot: status.slot,
                    confirmations: status.confirmations,
                    err: status.err.map(|e| format!("{:?}", e)),
                    confirmation_status: status.confirmation_status,
                })
            })
            .collect())
    }
}

#[async_trait]
impl TransactionNode for SolanaClient {
    async fn send_raw_transaction(
        &self,
        raw_transaction: &[u8],
        options: &SendOptions,
    ) -> anyhow::Result<String> {
        SolanaClient::send_raw_transaction(self, raw_transaction, options).await
    }

    async fn get_signature_statuses(
        &self,
        signatures: &[String],
    ) -> anyhow::Result<Vec<Option<SignatureStatus>>> {
        SolanaClient::get_signature_statuses(self, signatures).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionConfirmationStatus;
    use mockito::Matcher;

    const SIGNATURE: &str =
        "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW";

    #[tokio::test]
    async fn test_send_raw_transaction_wire_format() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""method":"sendTransaction""#.to_string()),
                Matcher::Regex(r#""skipPreflight":true"#.to_string()),
                Matcher::Regex(r#""maxRetries":2"#.to_string()),
                Matcher::Regex(r#""encoding":"base64""#.to_string()),
                Matcher::Regex(r#""AQID""#.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"jsonrpc":"2.0","result":"{}","id":1}}"#, SIGNATURE))
            .expect(1)
            .create_async()
            .await;

        let client = SolanaClient::from_url(server.url());
        let signature = client
            .send_raw_transaction(&[1, 2, 3], &SendOptions::swap_defaults())
            .await
            .unwrap();

        assert_eq!(signature, SIGNATURE);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_raw_transaction_node_rejection() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","error":{"code":-32003,"message":"Transaction signature verification failure"},"id":1}"#)
            .create_async()
            .await;

        let client = SolanaClient::from_url(server.url());
        let result = client
            .send_raw_transaction(&[0u8; 8], &SendOptions::swap_defaults())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_signature_statuses() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""method":"getSignatureStatuses""#.to_string()),
                Matcher::Regex(SIGNATURE.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","result":{"context":{"slot":82},"value":[{"slot":72,"confirmations":null,"err":null,"status":{"Ok":null},"confirmationStatus":"finalized"}]},"id":1}"#,
            )
            .create_async()
            .await;

        let client = SolanaClient::from_url(server.url());
        let statuses = client
            .get_signature_statuses(&[SIGNATURE.to_string()])
            .await
            .unwrap();

        assert_eq!(statuses.len(), 1);
        let status = statuses[0].as_ref().unwrap();
        assert_eq!(status.slot, 72);
        assert_eq!(status.confirmation_status, Some(TransactionConfirmationStatus::Finalized));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_signature_statuses_unknown_signature() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","result":{"context":{"slot":82},"value":[null]},"id":1}"#)
            .create_async()
            .await;

        let client = SolanaClient::from_url(server.url());
        let statuses = client
            .get_signature_statuses(&[SIGNATURE.to_string()])
            .await
            .unwrap();

        assert_eq!(statuses, vec![None]);
    }

    #[tokio::test]
    async fn test_get_signature_statuses_keeps_execution_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","result":{"context":{"slot":90},"value":[{"slot":88,"confirmations":3,"err":{"InstructionError":[0,{"Custom":6001}]},"status":{"Err":{"InstructionError":[0,{"Custom":6001}]}},"confirmationStatus":"confirmed"}]},"id":1}"#,
            )
            .create_async()
            .await;

        let client = SolanaClient::from_url(server.url());
        let statuses = client
            .get_signature_statuses(&[SIGNATURE.to_string()])
            .await
            .unwrap();

        let status = statuses[0].as_ref().unwrap();
        assert_eq!(status.confirmations, Some(3));
        assert_eq!(status.confirmation_status, Some(TransactionConfirmationStatus::Confirmed));
        assert!(status.err.as_deref().unwrap().contains("6001"));
        assert!(!status.is_finalized());
    }

    #[tokio::test]
    async fn test_get_signature_statuses_rejects_malformed_signature() {
        let client = SolanaClient::from_url("http://127.0.0.1:9");

        let result = client.get_signature_statuses(&["not-a-signature".to_string()]).await;

        assert!(result.unwrap_err().to_string().contains("Invalid signature"));
    }
}
