//! # Solana Integration State
//!
//! Bundles the two external collaborators of a swap run:
//!
//! ```text
//! ┌─────────────────┐
//! │  SolanaState    │  ← built once per run from Config
//! └────────┬────────┘
//!          │
//!          ├─► SolanaClient   (sendTransaction, getSignatureStatuses)
//!          └─► JupiterClient  (quote, swap transaction)
//! ```

use crate::client::SolanaClient;
use crate::jupiter::JupiterClient;
use lib_core::{Config, Result};
use std::sync::Arc;

/// Shared handles to the node connection and the quoting service.
#[derive(Clone)]
pub struct SolanaState {
    pub rpc: Arc<SolanaClient>,
    pub jupiter: Arc<JupiterClient>,
}

impl SolanaState {
    /// Open the node connection and the Jupiter client described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rpc = SolanaClient::from_url(config.rpc_url.clone());
        let jupiter = JupiterClient::builder()
            .api_base(config.jupiter_api_base.clone())
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            rpc: Arc::new(rpc),
            jupiter: Arc::new(jupiter),
        })
    }
}
