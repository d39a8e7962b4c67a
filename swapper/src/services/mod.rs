//! Business logic layer.

pub mod swap;

pub use swap::{SwapReport, SwapRequest, SwapService};
