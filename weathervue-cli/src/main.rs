//! Binary crate for the `weathervue` terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive lookup page
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
