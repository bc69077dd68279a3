//! # gadgetview
//!
//! Renders the per-node results of the process and socket collector
//! gadgets as one sorted report, in aligned columns or JSON.

mod commands;
mod output;

use clap::Parser;
use gadgetview_common::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
