//! # Centralized Error Handling
//!
//! This module defines [`SwapError`], the error type every stage of the swap
//! pipeline returns. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Fatal** - the process cannot do anything useful and exits
//!    - [`MissingSecret`](SwapError::MissingSecret)
//!    - [`Config`](SwapError::Config)
//!
//! 2. **Run aborts** - the current swap stops and the failure is reported
//!    - [`Decode`](SwapError::Decode) - private key is not a usable keypair
//!    - [`QuoteFetch`](SwapError::QuoteFetch) - quoting service refused or returned garbage
//!    - [`SwapBuild`](SwapError::SwapBuild) - swap transaction could not be built
//!    - [`Signing`](SwapError::Signing) - transaction blob could not be decoded or signed
//!    - [`Submission`](SwapError::Submission) - node rejected the transaction or was unreachable
//!    - [`Http`](SwapError::Http) - HTTP client for the quoting service could not be built
//!
//! Status-query failures while waiting for confirmation never become a
//! `SwapError`; the poller logs them and keeps polling.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{SwapError, Result};
//!
//! fn require_secret(secret: Option<&str>) -> Result<&str> {
//!     secret.ok_or(SwapError::MissingSecret)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;

/// Error type covering every failure of a single swap run.
#[derive(Debug, Error)]
pub enum SwapError {
    /// The private key is not present in the process configuration.
    #[error("Private key not found in environment variables")]
    MissingSecret,

    /// The private key is present but is not a valid base58 keypair.
    #[error("Failed to create keypair: {0}")]
    Decode(String),

    /// The quoting service answered with a non-success status or an unusable body.
    #[error("Failed to fetch quote: {status}")]
    QuoteFetch {
        /// HTTP status text (e.g. "Bad Request") or a parse failure description
        status: String,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The swap endpoint failed or did not return a transaction.
    #[error("Failed to build swap transaction: {0}")]
    SwapBuild(String),

    /// The returned transaction could not be decoded or signed.
    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    /// Transport or node rejection while submitting the signed transaction.
    #[error("Failed to submit transaction: {0}")]
    Submission(String),

    /// Malformed configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client for the quoting service could not be built.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl SwapError {
    /// Whether the error should terminate the process rather than just the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SwapError::MissingSecret | SwapError::Config(_))
    }

    /// Short stable name of the variant, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SwapError::MissingSecret => "MissingSecret",
            SwapError::Decode(_) => "Decode",
            SwapError::QuoteFetch { .. } => "QuoteFetch",
            SwapError::SwapBuild(_) => "SwapBuild",
            SwapError::Signing(_) => "Signing",
            SwapError::Submission(_) => "Submission",
            SwapError::Config(_) => "Config",
            SwapError::Http(_) => "Http",
        }
    }
}

/// Convert `lib_utils::envs::Error` to `SwapError`.
impl From<lib_utils::envs::Error> for SwapError {
    fn from(err: lib_utils::envs::Error) -> Self {
        SwapError::Config(err.to_string())
    }
}
