//! `gadgetview socket-collector` — Report network sockets across nodes.

use clap::Args;
use gadgetview_common::config::ReportConfig;
use gadgetview_common::types::NodeStatus;
use gadgetview_report::collector::{Report, socket_report};

/// Arguments for the `socket-collector` command.
#[derive(Args, Debug)]
pub struct SocketArgs {}

/// Executes the `socket-collector` command.
///
/// # Errors
///
/// Returns an error if structured rendering fails.
pub fn execute(
    _args: &SocketArgs,
    nodes: &[NodeStatus],
    config: ReportConfig,
) -> anyhow::Result<Report> {
    tracing::debug!(output = %config.output, "building socket report");
    Ok(socket_report(nodes, &config)?)
}
