//! # Transaction Node Interface
//!
//! The two node operations a swap needs: submit raw transaction bytes and
//! query signature statuses. [`SolanaClient`](crate::client::SolanaClient)
//! implements it against JSON-RPC; tests substitute in-memory fakes.

use crate::types::{SendOptions, SignatureStatus};
use async_trait::async_trait;

/// Node operations used by the signer/submitter and the confirmation poller.
#[async_trait]
pub trait TransactionNode: Send + Sync {
    /// Submit serialized transaction bytes and return the transaction signature.
    async fn send_raw_transaction(
        &self,
        raw_transaction: &[u8],
        options: &SendOptions,
    ) -> anyhow::Result<String>;

    /// Query statuses for a list of signatures, one entry per signature.
    async fn get_signature_statuses(
        &self,
        signatures: &[String],
    ) -> anyhow::Result<Vec<Option<SignatureStatus>>>;
}
