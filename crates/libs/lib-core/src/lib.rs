//! # Core Library
//!
//! Configuration and the error taxonomy shared by the swap pipeline.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SwapError};
