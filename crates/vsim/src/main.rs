//! vsim - Entry Point
//!
//! Binary entry point for the `vsim` command line. Results are printed as
//! JSON on stdout; logs go to stderr.

use clap::Parser;
use vsim::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await
}
