//! # Signing Identity
//!
//! Decodes the base58 private key handed in by configuration into a keypair.
//! The decoded key material stays inside [`SigningIdentity`]; only the public
//! key is ever printed.

use lib_core::{Result, SwapError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use std::fmt;
use tracing::info;

/// Keypair used to sign the swap transaction.
pub struct SigningIdentity {
    keypair: Keypair,
}

impl SigningIdentity {
    /// Load the identity from the configured secret.
    ///
    /// # Errors
    ///
    /// * `SwapError::MissingSecret` - no secret configured (or blank)
    /// * `SwapError::Decode` - secret is not base58 or not a 64-byte ed25519 keypair
    pub fn from_secret(secret: Option<&str>) -> Result<Self> {
        let secret = secret
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SwapError::MissingSecret)?;

        let identity = Self::from_base58(secret)?;
        info!(pubkey = %identity.pubkey(), "Keypair created successfully");
        Ok(identity)
    }

    /// Decode a base58-encoded 64-byte secret key.
    pub fn from_base58(secret: &str) -> Result<Self> {
        let bytes = bs58::decode(secret)
            .into_vec()
            .map_err(|e| SwapError::Decode(format!("invalid base58: {}", e)))?;

        let keypair = Keypair::try_from(bytes.as_slice())
            .map_err(|e| SwapError::Decode(format!("invalid keypair bytes ({} bytes): {}", bytes.len(), e)))?;

        Ok(Self { keypair })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Public key as a base58 string, the form Jupiter expects.
    pub fn pubkey_string(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl From<Keypair> for SigningIdentity {
    fn from(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("pubkey", &self.pubkey())
            .finish()
    }
}
