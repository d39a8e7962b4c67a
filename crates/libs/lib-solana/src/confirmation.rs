//! # Confirmation Poller
//!
//! Waits for a submitted transaction to reach the `finalized` commitment level.
//!
//! The loop queries `getSignatureStatuses` until the node reports
//! `finalized` or the timeout elapses. Failed queries are logged and the loop
//! keeps going; the delay between queries comes from a [`PollStrategy`] so
//! tests can run without real sleeps.
//!
//! ```rust,no_run
//! use lib_solana::client::SolanaClient;
//! use lib_solana::confirmation::{await_confirmation, FixedInterval, DEFAULT_CONFIRM_TIMEOUT};
//!
//! # async fn example(txid: String) {
//! let client = SolanaClient::from_url("https://api.mainnet-beta.solana.com");
//! let outcome = await_confirmation(&client, &txid, DEFAULT_CONFIRM_TIMEOUT, &FixedInterval::default()).await;
//! println!("{:?}", outcome);
//! # }
//! ```

use crate::node::TransactionNode;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Default time to wait for finalization.
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_millis(180_000);

/// Delay between two status queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2_000);

/// Result of waiting for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// The node reported the `finalized` level.
    Confirmed,
    /// The timeout elapsed first. The transaction may still land.
    TimedOut,
}

/// Decides how long to sleep after each status query.
pub trait PollStrategy: Send + Sync {
    /// Delay after query number `attempt` (starting at 1).
    fn next_delay(&self, attempt: u32) -> Duration;
}

/// Flat interval, no backoff or jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedInterval(pub Duration);

impl Default for FixedInterval {
    fn default() -> Self {
        Self(DEFAULT_POLL_INTERVAL)
    }
}

impl PollStrategy for FixedInterval {
    fn next_delay(&self, _attempt: u32) -> Duration {
        self.0
    }
}

/// Poll the node until `signature` is finalized or `timeout` elapses.
///
/// Only `finalized` ends the loop successfully; `processed` and `confirmed`
/// keep it running. The sleep after each query is never skipped, including
/// after a failed query.
pub async fn await_confirmation(
    node: &dyn TransactionNode,
    signature: &str,
    timeout: Duration,
    strategy: &dyn PollStrategy,
) -> ConfirmationOutcome {
    let start = Instant::now();
    let signatures = [signature.to_string()];
    let mut attempt: u32 = 0;

    while start.elapsed() < timeout {
        attempt += 1;

        match node.get_signature_statuses(&signatures).await {
            Ok(statuses) => match statuses.into_iter().next().flatten() {
                Some(status) if status.is_finalized() => {
                    if let Some(err) = &status.err {
                        warn!(%signature, slot = status.slot, error = %err, "Transaction finalized with an execution error");
                    }
                    info!("Transaction {} confirmed", signature);
                    return ConfirmationOutcome::Confirmed;
                }
                Some(status) => {
                    debug!(
                        %signature,
                        attempt,
                        level = ?status.confirmation_status,
                        "Transaction not finalized yet"
                    );
                }
                None => {
                    debug!(%signature, attempt, "Transaction not yet visible to the node");
                }
            },
            Err(e) => {
                warn!("Error checking transaction status: {}", e);
            }
        }

        tokio::time::sleep(strategy.next_delay(attempt)).await;
    }

    warn!("Transaction confirmation for {} timed out.", signature);
    ConfirmationOutcome::TimedOut
}
