//! # Jupiter API Types
//!
//! Type definitions for Jupiter Aggregator v6 quote and swap payloads.
//!
//! The quote is validated eagerly for the fields this crate reads; any other
//! field Jupiter sends is kept in `extra` so the quote can be posted back to
//! `/swap` unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from Jupiter quote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    /// Jupiter sends this as a decimal string, e.g. `"0.0012"`
    pub price_impact_pct: String,
    pub slippage_bps: u16,
    pub route_plan: Vec<RoutePlanStep>,
    /// Remaining fields (`swapMode`, `otherAmountThreshold`, `contextSlot`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteResponse {
    /// Venue labels along the route, in order.
    pub fn route_labels(&self) -> Vec<&str> {
        self.route_plan
            .iter()
            .map(|step| step.swap_info.label.as_deref().unwrap_or("unknown"))
            .collect()
    }
}

/// A step in Jupiter's routing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanStep {
    pub swap_info: SwapInfo,
    pub percent: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Details about a single swap operation within a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub amm_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the swap API request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest<'a> {
    pub quote_response: &'a QuoteResponse,
    pub user_public_key: &'a str,
    pub dynamic_compute_unit_limit: bool,
    /// `"auto"` lets Jupiter pick the priority fee
    pub prioritization_fee_lamports: &'a str,
}

impl<'a> SwapRequest<'a> {
    pub fn new(quote_response: &'a QuoteResponse, user_public_key: &'a str) -> Self {
        Self {
            quote_response,
            user_public_key,
            dynamic_compute_unit_limit: true,
            prioritization_fee_lamports: "auto",
        }
    }
}

/// Response from Jupiter swap API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionResponse {
    /// Base64-encoded serialized Solana transaction
    pub swap_transaction: String,
    /// Block height after which transaction is invalid
    #[serde(default)]
    pub last_valid_block_height: Option<u64>,
    /// Priority fee Jupiter selected, in lamports
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
}

/// Raw swap API body; `swapTransaction` is checked explicitly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSwapResponse {
    pub swap_transaction: Option<String>,
    #[serde(default)]
    pub last_valid_block_height: Option<u64>,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
