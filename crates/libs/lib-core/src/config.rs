//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables
//! (a `.env` file is honoured through `dotenvy`). All values are validated
//! on startup to fail fast if misconfigured.
//!
//! The private key is carried as an `Option` and handed explicitly to the
//! signing identity loader; nothing else in the workspace reads the
//! environment for it.
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::load()?;
//! println!("RPC endpoint: {}", config.rpc_url);
//! # Ok::<(), lib_core::SwapError>(())
//! ```

use crate::error::{Result, SwapError};
use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse_or};
use lib_utils::validation::{validate_positive, validate_url};
use std::fmt;
use std::time::Duration;

/// Mainnet public RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Jupiter Aggregator v6 base URL.
pub const DEFAULT_JUPITER_API_BASE: &str = "https://quote-api.jup.ag/v6";

/// How long to wait for a submitted transaction to finalize.
pub const DEFAULT_CONFIRM_TIMEOUT_MS: u64 = 180_000;

/// Per-request timeout for the quoting service.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for a swap run.
#[derive(Clone)]
pub struct Config {
    /// Base58-encoded secret key (`PRIVATE_KEY`)
    ///
    /// `None` when the variable is unset or blank. Never printed.
    pub private_key: Option<String>,

    /// Solana JSON-RPC endpoint (`SOLANA_RPC_URL`)
    pub rpc_url: String,

    /// Jupiter Aggregator base URL (`JUPITER_API_BASE`)
    pub jupiter_api_base: String,

    /// Confirmation timeout in milliseconds (`CONFIRM_TIMEOUT_MS`)
    pub confirm_timeout_ms: u64,

    /// Quoting service request timeout in seconds (`HTTP_TIMEOUT_SECS`)
    pub http_timeout_secs: u64,

    /// Tracing level (`LOG_LEVEL`)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            private_key: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            jupiter_api_base: DEFAULT_JUPITER_API_BASE.to_string(),
            confirm_timeout_ms: DEFAULT_CONFIRM_TIMEOUT_MS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("rpc_url", &self.rpc_url)
            .field("jupiter_api_base", &self.jupiter_api_base)
            .field("confirm_timeout_ms", &self.confirm_timeout_ms)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load `.env` (if any), read the environment and validate the result.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            private_key: get_env_opt("PRIVATE_KEY"),
            rpc_url: get_env_or("SOLANA_RPC_URL", &defaults.rpc_url),
            jupiter_api_base: get_env_or("JUPITER_API_BASE", &defaults.jupiter_api_base)
                .trim_end_matches('/')
                .to_string(),
            confirm_timeout_ms: get_env_parse_or("CONFIRM_TIMEOUT_MS", defaults.confirm_timeout_ms)?,
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            log_level: get_env_or("LOG_LEVEL", &defaults.log_level).to_lowercase(),
        })
    }

    /// Validate configuration values.
    ///
    /// A missing private key is not a validation failure here; the signing
    /// identity loader reports it as [`SwapError::MissingSecret`].
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.rpc_url, "SOLANA_RPC_URL").map_err(SwapError::Config)?;
        validate_url(&self.jupiter_api_base, "JUPITER_API_BASE").map_err(SwapError::Config)?;
        validate_positive(self.confirm_timeout_ms, "CONFIRM_TIMEOUT_MS").map_err(SwapError::Config)?;
        validate_positive(self.http_timeout_secs, "HTTP_TIMEOUT_SECS").map_err(SwapError::Config)?;
        Ok(())
    }

    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_millis(self.confirm_timeout_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
