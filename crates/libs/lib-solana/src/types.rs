//! # Solana Node Types
//!
//! Data structures exchanged with a Solana node for transaction submission
//! and signature status queries.
//!
//! - `SendOptions`: options attached to `sendTransaction`
//! - `SignatureStatus`: the part of a node's `TransactionStatus` the poller reads

use serde::Serialize;

pub use solana_transaction_status_client_types::TransactionConfirmationStatus;

/// Options for submitting a raw transaction.
///
/// Serialized as the second parameter of `sendTransaction`. The encoding is
/// always base64, matching how the raw bytes are sent.
///
/// # Example
///
/// ```rust
/// use lib_solana::types::SendOptions;
///
/// let options = SendOptions::swap_defaults();
/// assert!(options.skip_preflight);
/// assert_eq!(options.max_retries, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    /// Skip the node-side preflight simulation
    pub skip_preflight: bool,

    /// Maximum number of times the node itself rebroadcasts the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<usize>,

    /// Encoding of the raw transaction parameter
    pub encoding: &'static str,
}

impl SendOptions {
    /// Options used for swap submission: no preflight, two node-side retries.
    pub fn swap_defaults() -> Self {
        Self {
            skip_preflight: true,
            max_retries: Some(2),
            encoding: "base64",
        }
    }
}

impl Default for SendOptions {
    fn default() -> Self {
        Self::swap_defaults()
    }
}

/// Status of a single submitted signature.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureStatus {
    /// Slot the transaction was processed in
    pub slot: u64,

    /// Number of confirmed blocks since, `None` once rooted
    pub confirmations: Option<usize>,

    /// On-chain execution error, `None` if the transaction succeeded
    pub err: Option<String>,

    /// Cluster confirmation level; older nodes may omit it
    pub confirmation_status: Option<TransactionConfirmationStatus>,
}

impl SignatureStatus {
    /// Whether the node reports the `finalized` level.
    pub fn is_finalized(&self) -> bool {
        matches!(self.confirmation_status, Some(TransactionConfirmationStatus::Finalized))
    }
}
