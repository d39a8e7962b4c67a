//! # Swapper
//!
//! Thin entry point: configuration, logging, one swap.

use clap::Parser;
use lib_core::Config;
use lib_solana::ConfirmationOutcome;
use swapper::cli::Cli;
use swapper::services::SwapRequest;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    swapper::logging::init(&config.log_level);

    let request = SwapRequest::from(cli);

    match swapper::run(&config, &request).await {
        Ok(report) => match report.outcome {
            ConfirmationOutcome::Confirmed => {
                info!(txid = %report.txid, "Swap finalized");
            }
            ConfirmationOutcome::TimedOut => {
                warn!(txid = %report.txid, "Swap submitted but not finalized before timeout; it may still land");
            }
        },
        Err(e) if e.is_fatal() => {
            error!(kind = e.kind(), "{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!(kind = e.kind(), "Error during transaction submission or confirmation: {}", e);
        }
    }

    Ok(())
}
