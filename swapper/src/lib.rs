//! # Swapper
//!
//! Executes a single Jupiter swap on Solana: load the signing key, fetch a
//! quote, build and sign the swap transaction, submit it and wait for
//! finalization.

pub mod cli;
pub mod logging;
pub mod services;

use lib_core::{Config, Result};
use lib_solana::{SigningIdentity, SolanaState};
use services::{SwapReport, SwapRequest, SwapService};

/// Run one swap with the given configuration.
///
/// The signing key is loaded before any connection is opened, so a missing
/// or malformed key never touches the network.
pub async fn run(config: &Config, request: &SwapRequest) -> Result<SwapReport> {
    let identity = SigningIdentity::from_secret(config.private_key.as_deref())?;
    let state = SolanaState::from_config(config)?;
    let service = SwapService::new(&state, config);

    service.execute(request, &identity).await
}
