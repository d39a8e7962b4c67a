//! # Solana Library
//!
//! Solana blockchain integration for a single Jupiter swap: RPC client,
//! Jupiter client, signing identity, signer and confirmation poller.

// Declare all modules
pub mod client;
pub mod confirmation;
pub mod jupiter;
pub mod keypair;
pub mod node;
pub mod signer;
pub mod state;
pub mod types;

// Re-export commonly used types from root for convenience
pub use client::SolanaClient;
pub use confirmation::{await_confirmation, ConfirmationOutcome, FixedInterval, PollStrategy};
pub use jupiter::JupiterClient;
pub use keypair::SigningIdentity;
pub use node::TransactionNode;
pub use state::SolanaState;
