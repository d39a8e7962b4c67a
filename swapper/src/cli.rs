//! Command-line arguments.
//!
//! Four positional parameters; run without arguments to repeat the reference
//! swap of 100 lamports of wrapped SOL into USDC at 50 bps slippage.

use crate::services::SwapRequest;
use clap::Parser;

/// Wrapped SOL mint.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// USDC mint.
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

#[derive(Debug, Parser)]
#[command(name = "swapper", version, about = "Swap one token for another through Jupiter and wait for finalization")]
pub struct Cli {
    /// Mint of the token to sell
    #[arg(default_value = SOL_MINT)]
    pub input_mint: String,

    /// Mint of the token to buy
    #[arg(default_value = USDC_MINT)]
    pub output_mint: String,

    /// Amount to sell, in the input token's smallest unit
    #[arg(default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub amount: u64,

    /// Slippage tolerance in basis points
    #[arg(default_value_t = 50)]
    pub slippage_bps: u16,
}

impl From<Cli> for SwapRequest {
    fn from(cli: Cli) -> Self {
        SwapRequest {
            input_mint: cli.input_mint,
            output_mint: cli.output_mint,
            amount: cli.amount,
            slippage_bps: cli.slippage_bps,
        }
    }
}
