//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables, and validation.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64_decode, b64_encode};
pub use envs::{get_env_opt, get_env_or, get_env_parse_or};
pub use validation::{validate_not_empty, validate_positive, validate_url};
