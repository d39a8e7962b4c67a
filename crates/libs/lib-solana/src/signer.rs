//! # Transaction Signer & Submitter
//!
//! Turns the base64 transaction returned by the swap endpoint into signed raw
//! bytes and hands them to a [`TransactionNode`].
//!
//! ```text
//! base64 blob ─► bincode ─► VersionedTransaction ─► sign ─► bincode ─► sendTransaction
//! ```
//!
//! Resubmission is left to the node (`maxRetries`); nothing here retries.

use crate::keypair::SigningIdentity;
use crate::node::TransactionNode;
use crate::types::SendOptions;
use lib_core::{Result, SwapError};
use lib_utils::b64::b64_decode;
use solana_sdk::message::VersionedMessage;
use solana_sdk::transaction::VersionedTransaction;
use tracing::{debug, info};

/// A signed transaction together with its wire bytes.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub transaction: VersionedTransaction,
    pub raw: Vec<u8>,
}

/// Decode a base64 transaction blob into a versioned transaction.
pub fn decode_transaction(blob: &str) -> Result<VersionedTransaction> {
    let bytes = b64_decode(blob)
        .map_err(|e| SwapError::Signing(format!("Invalid base64 transaction: {}", e)))?;

    bincode::deserialize::<VersionedTransaction>(&bytes)
        .map_err(|e| SwapError::Signing(format!("Invalid transaction format: {}", e)))
}

/// Decode, sign and re-serialize a swap transaction.
pub fn sign_swap_transaction(blob: &str, identity: &SigningIdentity) -> Result<SignedTransaction> {
    let unsigned = decode_transaction(blob)?;

    let version = match &unsigned.message {
        VersionedMessage::Legacy(_) => "legacy",
        VersionedMessage::V0(_) => "v0",
    };
    debug!(
        version,
        signatures = unsigned.signatures.len(),
        accounts = unsigned.message.static_account_keys().len(),
        instructions = unsigned.message.instructions().len(),
        "Decoded swap transaction"
    );
    info!("Transaction: {:?}", unsigned);

    let transaction = VersionedTransaction::try_new(unsigned.message, &[identity.keypair()])
        .map_err(|e| SwapError::Signing(e.to_string()))?;

    let raw = bincode::serialize(&transaction)
        .map_err(|e| SwapError::Signing(format!("Failed to serialize transaction: {}", e)))?;

    Ok(SignedTransaction { transaction, raw })
}

/// Submit a signed transaction with the swap submission options.
pub async fn submit_transaction(
    node: &dyn TransactionNode,
    signed: &SignedTransaction,
) -> Result<String> {
    let txid = node
        .send_raw_transaction(&signed.raw, &SendOptions::swap_defaults())
        .await
        .map_err(|e| SwapError::Submission(e.to_string()))?;

    info!("Transaction sent with TXID: {}", txid);
    Ok(txid)
}

/// Sign the swap transaction and submit it, returning the transaction id.
pub async fn sign_and_submit(
    blob: &str,
    identity: &SigningIdentity,
    node: &dyn TransactionNode,
) -> Result<String> {
    let signed = sign_swap_transaction(blob, identity)?;
    submit_transaction(node, &signed).await
}
