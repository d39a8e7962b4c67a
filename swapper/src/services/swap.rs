//! # Swap Service
//!
//! Runs one swap end to end: quote, build, sign, submit, wait.
//!
//! ## Architecture
//!
//! ```text
//! SwapService → JupiterClient   → Jupiter Aggregator API (quote, swap)
//!             → signer          → local keypair
//!             → TransactionNode → Solana RPC (sendTransaction, getSignatureStatuses)
//! ```
//!
//! Every stage short-circuits on error. Once the transaction is submitted the
//! run can only stop waiting; a timeout is reported as
//! [`ConfirmationOutcome::TimedOut`], not as an error.

use lib_core::{Config, Result};
use lib_solana::confirmation::{await_confirmation, ConfirmationOutcome, FixedInterval, PollStrategy};
use lib_solana::jupiter::{JupiterClient, QuoteResponse};
use lib_solana::signer::sign_and_submit;
use lib_solana::{SigningIdentity, SolanaState, TransactionNode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

/// Parameters of a single swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Mint of the asset being sold
    pub input_mint: String,
    /// Mint of the asset being bought
    pub output_mint: String,
    /// Amount in the input asset's smallest unit
    pub amount: u64,
    /// Slippage tolerance in basis points, passed through uninspected
    pub slippage_bps: u16,
}

/// What happened to a submitted swap.
#[derive(Debug, Clone)]
pub struct SwapReport {
    pub quote: QuoteResponse,
    pub txid: String,
    pub outcome: ConfirmationOutcome,
}

/// Service executing swaps against Jupiter and a Solana node.
pub struct SwapService {
    jupiter: Arc<JupiterClient>,
    node: Arc<dyn TransactionNode>,
    confirm_timeout: Duration,
    poll: Arc<dyn PollStrategy>,
}

impl SwapService {
    /// Create a service from the shared Solana state and configuration.
    pub fn new(state: &SolanaState, config: &Config) -> Self {
        Self::with_parts(
            state.jupiter.clone(),
            state.rpc.clone(),
            config.confirm_timeout(),
            Arc::new(FixedInterval::default()),
        )
    }

    /// Create a service from explicit collaborators.
    pub fn with_parts(
        jupiter: Arc<JupiterClient>,
        node: Arc<dyn TransactionNode>,
        confirm_timeout: Duration,
        poll: Arc<dyn PollStrategy>,
    ) -> Self {
        Self {
            jupiter,
            node,
            confirm_timeout,
            poll,
        }
    }

    /// Execute one swap and wait for it to finalize.
    ///
    /// # Errors
    ///
    /// * `SwapError::QuoteFetch` - quote request failed
    /// * `SwapError::SwapBuild` - swap transaction could not be built
    /// * `SwapError::Signing` - returned transaction could not be signed
    /// * `SwapError::Submission` - node rejected the transaction or was unreachable
    #[instrument(
        skip(self, identity),
        fields(
            input_mint = %request.input_mint,
            output_mint = %request.output_mint,
            amount = request.amount,
            slippage_bps = request.slippage_bps,
        )
    )]
    pub async fn execute(
        &self,
        request: &SwapRequest,
        identity: &SigningIdentity,
    ) -> Result<SwapReport> {
        let quote = self
            .jupiter
            .get_swap_quote(
                &request.input_mint,
                &request.output_mint,
                request.amount,
                request.slippage_bps,
            )
            .await?;

        let swap = self
            .jupiter
            .get_swap_transaction(&quote, &identity.pubkey_string())
            .await?;

        let txid = sign_and_submit(&swap.swap_transaction, identity, self.node.as_ref()).await?;

        info!(
            %txid,
            timeout_ms = self.confirm_timeout.as_millis() as u64,
            "Waiting for finalization"
        );

        let outcome = await_confirmation(
            self.node.as_ref(),
            &txid,
            self.confirm_timeout,
            self.poll.as_ref(),
        )
        .await;

        Ok(SwapReport { quote, txid, outcome })
    }
}
