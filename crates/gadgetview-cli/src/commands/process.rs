//! `gadgetview process-collector` — Report running processes across nodes.

use clap::Args;
use gadgetview_common::config::ReportConfig;
use gadgetview_common::types::NodeStatus;
use gadgetview_report::collector::{Report, process_report};

/// Arguments for the `process-collector` command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Show all threads.
    #[arg(short, long)]
    pub threads: bool,
}

/// Executes the `process-collector` command.
///
/// Merges every node's process list, collapses threads into one row per
/// process unless `--threads` is given, and renders the sorted result.
///
/// # Errors
///
/// Returns an error if structured rendering fails.
pub fn execute(
    args: &ProcessArgs,
    nodes: &[NodeStatus],
    config: ReportConfig,
) -> anyhow::Result<Report> {
    let config = config.with_threads(args.threads);
    tracing::debug!(threads = config.threads, output = %config.output, "building process report");
    Ok(process_report(nodes, &config)?)
}
